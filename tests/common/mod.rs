#![allow(dead_code)]

use std::path::PathBuf;

use artwork_theme::{
    app::events::Extraction,
    cli::Cli,
    palette::{Color, Denylist, extract_theme},
};
use image::{DynamicImage, Rgba, RgbaImage};

pub fn fixture_cli() -> Cli {
    Cli {
        image: PathBuf::from("cover.png"),
        colors: 5,
        deny: Vec::new(),
        json: false,
    }
}

pub fn hex(value: &str) -> Color {
    Color::from_hex(value).expect("valid fixture hex")
}

/// The five-color reference palette: primaries plus white and black.
pub fn reference_palette() -> Vec<Color> {
    vec![
        hex("#ff0000"),
        hex("#00ff00"),
        hex("#0000ff"),
        hex("#ffffff"),
        hex("#000000"),
    ]
}

pub fn reference_average() -> Color {
    hex("#808080")
}

pub fn reference_extraction() -> Extraction {
    let colors = reference_palette();
    let theme = extract_theme(&colors, reference_average(), &Denylist::new())
        .expect("reference palette yields a theme");
    Extraction { colors, theme }
}

/// A synthetic cover: four vertical color bands.
pub fn banded_image() -> DynamicImage {
    let bands = [
        Rgba([220, 40, 30, 255]),
        Rgba([30, 60, 180, 255]),
        Rgba([240, 240, 235, 255]),
        Rgba([20, 20, 25, 255]),
    ];
    DynamicImage::ImageRgba8(RgbaImage::from_fn(64, 64, |x, _| {
        bands[(x / 16) as usize]
    }))
}
