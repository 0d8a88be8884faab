pub mod chroma_key;
pub mod io;
pub mod picker;

use image::RgbImage;

pub type CompositorResult<T> = Result<T, CompositorError>;

#[derive(thiserror::Error, Debug)]
pub enum CompositorError {
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub trait Composite {
    fn composite(
        &self,
        foreground: &RgbImage,
        background: &RgbImage,
    ) -> CompositorResult<RgbImage>;
}
