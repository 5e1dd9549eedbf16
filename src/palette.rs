pub mod color;
pub mod filter;
pub mod metrics;
pub mod select;
pub mod theme;

pub use color::Color;
pub use filter::Denylist;
pub use select::{SelectionError, extract_theme};
pub use theme::{Theme, ThemeRole};
