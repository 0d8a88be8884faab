//! Image file loading and saving.

use crate::CompositorResult;
use image::{ImageReader, RgbImage};
use std::path::Path;

/// Opens and decodes an image file, converting it to 8-bit RGB.
pub fn load_image(path: impl AsRef<Path>) -> CompositorResult<RgbImage> {
    let path = path.as_ref();
    let image = ImageReader::open(path)?.decode()?.to_rgb8();

    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Encodes an image to a file; the format is chosen by the path extension.
pub fn save_image(image: &RgbImage, path: impl AsRef<Path>) -> CompositorResult<()> {
    let path = path.as_ref();
    image.save(path)?;

    log::debug!(
        "saved {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompositorError;
    use image::Rgb;

    #[test]
    fn test_save_then_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let mut image = RgbImage::new(2, 2);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(1, 0, Rgb([0, 255, 0]));
        image.put_pixel(0, 1, Rgb([0, 0, 255]));
        image.put_pixel(1, 1, Rgb([10, 20, 30]));

        save_image(&image, &path).unwrap();
        let loaded = load_image(&path).unwrap();

        assert_eq!(loaded, image);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_image(dir.path().join("nope.png"));
        assert!(matches!(result, Err(CompositorError::Io(_))));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not an image").unwrap();

        let result = load_image(&path);
        assert!(matches!(result, Err(CompositorError::Image(_))));
    }
}
