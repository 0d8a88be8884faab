//! Key-color selection: sampling a loaded image or parsing a color spec.

use crate::{CompositorError, CompositorResult};
use image::RgbImage;

/// Returns the RGB triple at `(x, y)`.
///
/// Fails with [`CompositorError::OutOfBounds`] when the coordinate lies past
/// the image extent.
pub fn pick_color(image: &RgbImage, x: u32, y: u32) -> CompositorResult<[u8; 3]> {
    let (width, height) = image.dimensions();

    if x >= width || y >= height {
        return Err(CompositorError::OutOfBounds(format!(
            "coordinate ({x}, {y}) outside image {width}x{height}"
        )));
    }

    let pixel = image.get_pixel(x, y);
    Ok([pixel[0], pixel[1], pixel[2]])
}

/// Parses `#RRGGBB`, `RRGGBB` or `R,G,B` into an RGB triple.
pub fn parse_key_color(spec: &str) -> CompositorResult<[u8; 3]> {
    let spec = spec.trim();

    let hex = spec.strip_prefix('#').unwrap_or(spec);
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&hex[0..2], 16);
        let g = u8::from_str_radix(&hex[2..4], 16);
        let b = u8::from_str_radix(&hex[4..6], 16);

        match (r, g, b) {
            (Ok(r), Ok(g), Ok(b)) => return Ok([r, g, b]),
            _ => {
                return Err(CompositorError::InvalidParameter(format!(
                    "invalid hex color: {spec}"
                )));
            }
        }
    }

    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CompositorError::InvalidParameter(format!(
            "expected #RRGGBB or R,G,B, got: {spec}"
        )));
    }

    let mut color = [0u8; 3];
    for (slot, part) in color.iter_mut().zip(&parts) {
        *slot = part.parse::<u8>().map_err(|_| {
            CompositorError::InvalidParameter(format!("invalid channel value: {part}"))
        })?;
    }

    Ok(color)
}
