//! Perceptual measurements the role selector scores candidates with.
//!
//! Brightness and saturation come from the HSB model; luminance is WCAG 2.1
//! relative luminance (sRGB linearization + weighted sum), which is a
//! different quantity from HSB brightness and the one the contrast ratio is
//! defined over.

use super::color::Color;

/// HSB brightness, 0.0..=1.0.
#[must_use]
pub fn brightness(color: Color) -> f32 {
    color.hsb().2
}

/// HSB saturation, 0.0..=1.0.
#[must_use]
pub fn saturation(color: Color) -> f32 {
    color.hsb().1
}

/// HSB hue on a normalized 0.0..=1.0 circular scale.
#[must_use]
pub fn hue(color: Color) -> f32 {
    color.hsb().0
}

/// WCAG 2.1 relative luminance, 0.0 (black) to 1.0 (white).
#[must_use]
pub fn luminance(color: Color) -> f32 {
    let r = srgb_to_linear(color.red());
    let g = srgb_to_linear(color.green());
    let b = srgb_to_linear(color.blue());
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Circular hue distance folded onto the shorter arc, in 0.0..=0.5.
#[must_use]
pub fn hue_distance(a: Color, b: Color) -> f32 {
    let mut dist = (hue(a) - hue(b)).abs();
    if dist > 0.5 {
        dist = 1.0 - dist;
    }
    dist
}

/// WCAG 2.1 contrast ratio, 1.0..=21.0. Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let la = luminance(a);
    let lb = luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Mean of HSB brightness and relative luminance; the lightest-color
/// selection scores candidates with this.
#[must_use]
pub fn midtone_score(color: Color) -> f32 {
    (brightness(color) + luminance(color)) / 2.0
}

fn srgb_to_linear(channel: f32) -> f32 {
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}
