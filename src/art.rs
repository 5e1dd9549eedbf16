pub mod average;
pub mod quantize;

use std::path::Path;

use anyhow::{Context, Result};
use image::DynamicImage;

pub use average::average_color;
pub use quantize::distinct_colors;

pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    image::open(path).with_context(|| format!("failed to open image {}", path.display()))
}
