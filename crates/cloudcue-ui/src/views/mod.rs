//! Text views rendered to the terminal.
//!
//! Each view is a pure function from state to a `String`; the binary decides
//! where to print it.

pub mod activities;
pub mod cards;
pub mod favorites;
pub mod pages;

pub use activities::{render_activities, render_activities_error, render_unknown_location};
pub use cards::{activity_card, error_panel, tag_bar, weather_card};
pub use favorites::{favorites_summary, render_favorites};
pub use pages::{render_help, render_home};
