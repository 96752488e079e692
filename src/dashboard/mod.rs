//! Dashboard widget layout and preference handling.

pub mod layout;
pub mod preferences;
pub mod tui;

pub use layout::{resolve_layout, DashboardLayout, KpiRow, MainRow};
pub use preferences::{Preferences, PreferenceStore};
