use serde::Serialize;

use super::color::Color;

/// The four theme roles, in assignment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeRole {
    Background,
    Primary,
    Secondary,
    Highlight,
}

impl ThemeRole {
    pub const ALL: [ThemeRole; 4] = [
        ThemeRole::Background,
        ThemeRole::Primary,
        ThemeRole::Secondary,
        ThemeRole::Highlight,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ThemeRole::Background => "background",
            ThemeRole::Primary => "primary",
            ThemeRole::Secondary => "secondary",
            ThemeRole::Highlight => "highlight",
        }
    }
}

/// The derived theme: four role colors plus the two intermediate colors
/// kept for diagnostics. Serializes to canonical hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Theme {
    pub background: Color,
    pub primary: Color,
    pub secondary: Color,
    pub highlight: Color,
    pub average: Color,
    pub lightest: Color,
}

impl Theme {
    #[must_use]
    pub fn role(&self, role: ThemeRole) -> Color {
        match role {
            ThemeRole::Background => self.background,
            ThemeRole::Primary => self.primary,
            ThemeRole::Secondary => self.secondary,
            ThemeRole::Highlight => self.highlight,
        }
    }

    /// False when the input palette was too starved for four distinct
    /// roles and the selector had to reuse colors. Callers should treat
    /// such a theme as low-confidence.
    #[must_use]
    pub fn has_distinct_roles(&self) -> bool {
        let roles = [self.background, self.primary, self.secondary, self.highlight];
        for (index, color) in roles.iter().enumerate() {
            if roles[index + 1..].contains(color) {
                return false;
            }
        }
        true
    }
}
