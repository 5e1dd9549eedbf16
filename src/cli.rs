use std::path::PathBuf;

use clap::Parser;

use crate::palette::{Color, Denylist};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "artwork-theme",
    version,
    about = "Adaptive color themes from artwork, in the terminal"
)]
pub struct Cli {
    /// Image to derive a theme from
    pub image: PathBuf,

    /// Representative colors to request from the quantizer
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(2..=12))]
    pub colors: u8,

    /// Exclude a color from role selection, e.g. --deny '#ecef2d' (repeatable)
    #[arg(long = "deny", value_name = "HEX", value_parser = parse_hex_entry)]
    pub deny: Vec<String>,

    /// Print the derived theme as JSON instead of opening the swatchboard
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    #[must_use]
    pub fn denylist(&self) -> Denylist {
        self.deny.iter().collect()
    }
}

fn parse_hex_entry(value: &str) -> Result<String, String> {
    if Color::from_hex(value).is_none() {
        return Err(format!("'{value}' is not a #rrggbb color"));
    }
    Ok(value.to_string())
}
