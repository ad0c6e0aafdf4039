//! Reusable dashboard widgets
//!
//! - State indicators and badges (color-coded status labels)
//! - Score bars colored by the risk/confidence tier policy

pub mod progress_bar;
pub mod state_indicator;

pub use progress_bar::{ProgressBar, ScoreScale};
pub use state_indicator::{badge, StateIndicator, StateType};
