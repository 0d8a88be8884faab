use crate::{Composite, CompositorError, CompositorResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;

/// Chroma-key substitution configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ChromaKeyConfig {
    #[derivative(Default(value = "[0, 255, 0]"))]
    key_color: [u8; 3],

    #[derivative(Default(value = "100"))]
    threshold: u32,
}

impl ChromaKeyConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Composite for ChromaKeyConfig {
    fn composite(
        &self,
        foreground: &RgbImage,
        background: &RgbImage,
    ) -> CompositorResult<RgbImage> {
        let (width, height) = foreground.dimensions();

        // The background must cover the foreground's extent; checked before
        // any pixel is read so a mismatch never surfaces mid-iteration.
        if background.width() < width || background.height() < height {
            return Err(CompositorError::OutOfBounds(format!(
                "background {}x{} does not cover foreground {}x{}",
                background.width(),
                background.height(),
                width,
                height
            )));
        }

        let [kr, kg, kb] = self.key_color;

        let mut output = RgbImage::new(width, height);
        for (x, y, pixel) in foreground.enumerate_pixels() {
            // Each channel is compared to its own inclusive band
            // [key - threshold, key + threshold]. A pixel is keyed out only
            // when all three channels fall inside their bands.
            let dr = (pixel[0] as i32 - kr as i32).unsigned_abs();
            let dg = (pixel[1] as i32 - kg as i32).unsigned_abs();
            let db = (pixel[2] as i32 - kb as i32).unsigned_abs();

            if dr <= self.threshold && dg <= self.threshold && db <= self.threshold {
                output.put_pixel(x, y, *background.get_pixel(x, y));
            } else {
                output.put_pixel(x, y, *pixel);
            }
        }

        Ok(output)
    }
}
