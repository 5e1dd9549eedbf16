use image::DynamicImage;

use crate::palette::Color;

/// Per-channel arithmetic mean over every pixel, in 8-bit sRGB space.
///
/// Fully transparent pixels are skipped so letterboxed cover art does not
/// drag the average toward black. An image with no opaque pixels falls
/// back to mid-gray.
#[must_use]
pub fn average_color(image: &DynamicImage) -> Color {
    let rgba = image.to_rgba8();

    let (mut r_sum, mut g_sum, mut b_sum, mut count) = (0u64, 0u64, 0u64, 0u64);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        r_sum += u64::from(r);
        g_sum += u64::from(g);
        b_sum += u64::from(b);
        count += 1;
    }

    if count == 0 {
        return Color::from_rgb8(128, 128, 128);
    }

    Color::from_rgb8(
        (r_sum / count) as u8,
        (g_sum / count) as u8,
        (b_sum / count) as u8,
    )
}
