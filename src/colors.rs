//! Color palette and tier policies for the dashboard
//!
//! Panels never pick colors ad hoc: scores, severities and statuses map to
//! the constants here through pure functions.

use crate::types::{ActionStatus, Impact, IncidentStatus, LogLevel, Severity, Verdict};
use ratatui::style::Color;

/// Color palette for dashboard elements
pub struct DashboardColors;

impl DashboardColors {
    // === Tier Colors ===

    /// High risk, critical severity, failures (Red)
    pub const DANGER: Color = Color::Red;

    /// Medium risk, pending work (Yellow)
    pub const WARNING: Color = Color::Yellow;

    /// Low risk, healthy, completed (Green)
    pub const SUCCESS: Color = Color::Green;

    /// Informational (Blue)
    pub const INFO: Color = Color::Blue;

    /// Neutral or inactive (Gray)
    pub const NEUTRAL: Color = Color::Gray;

    // === UI Elements ===

    /// Brand and primary accents (Cyan)
    pub const PRIMARY: Color = Color::Cyan;

    /// Panel borders
    pub const BORDER: Color = Color::DarkGray;

    /// Section headings (Yellow)
    pub const HEADER: Color = Color::Yellow;

    /// Secondary text (DarkGray)
    pub const SECONDARY: Color = Color::DarkGray;

    /// Disabled controls, dimmer than secondary text
    pub const MUTED: Color = Color::Rgb(80, 80, 90);

    /// Primary text (White)
    pub const TEXT: Color = Color::White;

    /// Accent for tactic/model labels (Magenta)
    pub const ACCENT: Color = Color::Magenta;
}

/// Three-tier bucket of a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl RiskTier {
    /// `>= 80` is high, `>= 60` medium, anything else low
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            RiskTier::High
        } else if score >= 60 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::High => "High",
            RiskTier::Medium => "Medium",
            RiskTier::Low => "Low",
        }
    }
}

/// Color for a risk score: high risk is red
pub fn risk_color(score: u8) -> Color {
    match RiskTier::from_score(score) {
        RiskTier::High => DashboardColors::DANGER,
        RiskTier::Medium => DashboardColors::WARNING,
        RiskTier::Low => DashboardColors::SUCCESS,
    }
}

/// Color for a confidence score: same thresholds, inverted meaning
pub fn confidence_color(score: u8) -> Color {
    match RiskTier::from_score(score) {
        RiskTier::High => DashboardColors::SUCCESS,
        RiskTier::Medium => DashboardColors::WARNING,
        RiskTier::Low => DashboardColors::DANGER,
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical | Severity::High => DashboardColors::DANGER,
        Severity::Medium => DashboardColors::WARNING,
        Severity::Low => DashboardColors::SUCCESS,
    }
}

/// SIEM alert badges render low severity as informational
pub fn alert_severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => DashboardColors::INFO,
        other => severity_color(other),
    }
}

pub fn impact_color(impact: Impact) -> Color {
    match impact {
        Impact::High => DashboardColors::DANGER,
        Impact::Medium => DashboardColors::WARNING,
        Impact::Low => DashboardColors::SUCCESS,
        Impact::None => DashboardColors::NEUTRAL,
    }
}

pub fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => DashboardColors::INFO,
        LogLevel::Warning => DashboardColors::WARNING,
        LogLevel::Error => DashboardColors::DANGER,
        LogLevel::Debug => DashboardColors::NEUTRAL,
    }
}

pub fn action_status_color(status: ActionStatus) -> Color {
    match status {
        ActionStatus::Ready => DashboardColors::SUCCESS,
        ActionStatus::Pending => DashboardColors::WARNING,
        ActionStatus::Executed => DashboardColors::INFO,
    }
}

pub fn incident_status_color(status: IncidentStatus) -> Color {
    match status {
        IncidentStatus::Active => DashboardColors::DANGER,
        IncidentStatus::Investigating => DashboardColors::WARNING,
        IncidentStatus::Resolved => DashboardColors::SUCCESS,
        IncidentStatus::Closed => DashboardColors::NEUTRAL,
    }
}

pub fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::TruePositive => DashboardColors::SUCCESS,
        Verdict::FalsePositive => DashboardColors::DANGER,
        Verdict::NeedsReview => DashboardColors::WARNING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_disabled_controls_stand_apart_from_secondary_text() {
        assert_ne!(DashboardColors::MUTED, DashboardColors::SECONDARY);
        assert_ne!(DashboardColors::MUTED, DashboardColors::NEUTRAL);
        assert_ne!(DashboardColors::MUTED, DashboardColors::TEXT);
    }

    #[test]
    fn test_risk_tier_examples() {
        assert_eq!(risk_color(95), Color::Red);
        assert_eq!(risk_color(70), Color::Yellow);
        assert_eq!(risk_color(10), Color::Green);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RiskTier::from_score(80), RiskTier::High);
        assert_eq!(RiskTier::from_score(79), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(60), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(59), RiskTier::Low);
        assert_eq!(RiskTier::from_score(0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(100), RiskTier::High);
    }

    #[test]
    fn test_confidence_is_inverted() {
        assert_eq!(confidence_color(87), Color::Green);
        assert_eq!(confidence_color(68), Color::Yellow);
        assert_eq!(confidence_color(45), Color::Red);
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(severity_color(Severity::Critical), Color::Red);
        assert_eq!(severity_color(Severity::High), Color::Red);
        assert_eq!(severity_color(Severity::Medium), Color::Yellow);
        assert_eq!(severity_color(Severity::Low), Color::Green);
        assert_eq!(alert_severity_color(Severity::Low), Color::Blue);
        assert_eq!(alert_severity_color(Severity::Critical), Color::Red);
    }

    #[test]
    fn test_impact_and_level_colors() {
        assert_eq!(impact_color(Impact::High), Color::Red);
        assert_eq!(impact_color(Impact::None), Color::Gray);
        assert_eq!(level_color(LogLevel::Info), Color::Blue);
        assert_eq!(level_color(LogLevel::Error), Color::Red);
    }

    proptest! {
        #[test]
        fn prop_risk_color_follows_tier(score in 0u8..=100) {
            let expected = if score >= 80 {
                Color::Red
            } else if score >= 60 {
                Color::Yellow
            } else {
                Color::Green
            };
            prop_assert_eq!(risk_color(score), expected);
        }

        #[test]
        fn prop_confidence_mirrors_risk(score in 0u8..=100) {
            let mirrored = match risk_color(score) {
                Color::Red => Color::Green,
                Color::Green => Color::Red,
                other => other,
            };
            prop_assert_eq!(confidence_color(score), mirrored);
        }
    }
}
