use std::collections::HashSet;

use super::color::Color;

/// Colors excluded from role selection, keyed by canonical `#rrggbb` hex.
///
/// Entries are case-normalized and accept a missing leading `#`, so CLI
/// input like `ECEF2D` and `#ecef2d` land on the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Denylist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, hex: &str) {
        self.entries.insert(canonical(hex));
    }

    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.entries.contains(&color.hex())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Denylist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut denylist = Self::new();
        for hex in iter {
            denylist.insert(hex.as_ref());
        }
        denylist
    }
}

fn canonical(hex: &str) -> String {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    format!("#{}", digits.to_ascii_lowercase())
}

/// Keep only colors whose canonical hex is not denylisted, in order.
#[must_use]
pub fn remove_denylisted(colors: &[Color], denylist: &Denylist) -> Vec<Color> {
    colors
        .iter()
        .copied()
        .filter(|color| !denylist.contains(*color))
        .collect()
}

/// Drop every element value-equal to `excluded`, preserving order.
#[must_use]
pub fn remove_exact(colors: &[Color], excluded: Color) -> Vec<Color> {
    colors
        .iter()
        .copied()
        .filter(|color| *color != excluded)
        .collect()
}
