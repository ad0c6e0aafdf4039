//! CyberWatch - Terminal security operations center dashboard
//!
//! A keyboard driven dashboard that presents a fixed set of security views:
//! - Event log stream with filter controls
//! - SIEM alert table
//! - Session risk analysis with charts
//! - AI reasoning, threat detection and incident reports
//! - Threat prevention actions and analyst feedback triage
//!
//! # Architecture
//!
//! - **Types / Sample data**: Static records every panel renders
//! - **Colors**: Pure score and category to color mappings
//! - **Navigation**: Section ids, labels and shortcuts
//! - **Panels**: One `Panel` implementation per section
//! - **App**: Shell that routes keys and lays out the frame
//! - **TUI**: Real terminal setup and input polling
//!
//! # Example
//!
//! ```no_run
//! use cyberwatch_core::{App, DashboardConfig, SectionId};
//!
//! let app = App::new(&DashboardConfig::default()).with_section(SectionId::ThreatDetection);
//! println!("{}", app.snapshot(120, 40)?);
//! # Ok::<(), cyberwatch_core::CyberWatchError>(())
//! ```

pub mod app;
pub mod colors;
pub mod config;
pub mod error;
pub mod navigation;
pub mod panels;
pub mod sample_data;
pub mod tui;
pub mod types;
pub mod widgets;

// Re-export commonly used types
pub use app::App;
pub use config::DashboardConfig;
pub use error::{CyberWatchError, Result};
pub use navigation::{Navigation, SectionId};
pub use panels::Panel;
pub use types::{ActionStatus, Severity, Verdict};
