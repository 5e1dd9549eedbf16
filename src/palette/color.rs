use std::fmt;

use serde::{Serialize, Serializer};

/// An immutable sRGB color with components normalized to 0.0..=1.0.
///
/// Equality is structural (component values), which is what the selection
/// pipeline relies on to subtract an already-assigned color from a
/// candidate pool.
#[derive(Clone, Copy, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self::from_rgb8(r, g, b))
    }

    #[must_use]
    pub fn red(&self) -> f32 {
        self.r
    }

    #[must_use]
    pub fn green(&self) -> f32 {
        self.g
    }

    #[must_use]
    pub fn blue(&self) -> f32 {
        self.b
    }

    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.a
    }

    #[must_use]
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
        )
    }

    /// Canonical lowercase `#rrggbb` form, the denylist key.
    #[must_use]
    pub fn hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Hue, saturation and brightness per the HSB (HSV) model, each
    /// normalized to 0.0..=1.0. Hue is 0.0 for achromatic colors.
    #[must_use]
    pub fn hsb(&self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let brightness = max;
        let saturation = if max > 0.0 { delta / max } else { 0.0 };

        if delta <= 0.0 {
            return (0.0, saturation, brightness);
        }

        let sector = if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };

        (sector / 6.0, saturation, brightness)
    }

    /// Linear per-channel interpolation toward `other`; `fraction` 0.0
    /// keeps `self`, 1.0 yields `other`. Alpha blends the same way.
    #[must_use]
    pub fn blend(&self, other: Color, fraction: f32) -> Color {
        let keep = 1.0 - fraction;
        Color {
            r: self.r * keep + other.r * fraction,
            g: self.g * keep + other.g * fraction,
            b: self.b * keep + other.b * fraction,
            a: self.a * keep + other.a * fraction,
        }
    }
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}
