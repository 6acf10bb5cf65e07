use std::path::Path;

use anyhow::{Context, Result};
use image::{EncodableLayout, ImageBuffer, ImageFormat, Pixel, PixelWithColorType};

/// Encode an 8-bit image buffer as PNG at `path`.
pub fn write_png_file<P>(path: &Path, image: &ImageBuffer<P, Vec<P::Subpixel>>) -> Result<()>
where
    P: Pixel + PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    image.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("[write_png] Failed to write {}", path.display()))
}
