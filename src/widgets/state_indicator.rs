//! State indicator widget - Color-coded status badges

use crate::colors::DashboardColors;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// State types for visual indication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateType {
    /// Log stream indicator on
    Live,
    /// Log stream indicator off
    Paused,
    /// Integration reachable
    Online,
    /// Integration unreachable
    Offline,
    /// Detection engine running
    Active,
    /// Action waiting on something outside the dashboard
    Pending,
    /// Action already executed
    Executed,
    /// Risk factor fired
    Triggered,
    /// Risk factor quiet
    Inactive,
}

/// State indicator widget
pub struct StateIndicator {
    state_type: StateType,
    text: String,
    show_icon: bool,
}

impl StateIndicator {
    /// Create new state indicator
    pub fn new(state_type: StateType, text: impl Into<String>) -> Self {
        Self {
            state_type,
            text: text.into(),
            show_icon: true,
        }
    }

    /// Set whether to show icon
    pub fn show_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }

    fn color(&self) -> Color {
        match self.state_type {
            StateType::Live => DashboardColors::SUCCESS,
            StateType::Paused => DashboardColors::NEUTRAL,
            StateType::Online => DashboardColors::SUCCESS,
            StateType::Offline => DashboardColors::DANGER,
            StateType::Active => DashboardColors::SUCCESS,
            StateType::Pending => DashboardColors::WARNING,
            StateType::Executed => DashboardColors::INFO,
            StateType::Triggered => DashboardColors::DANGER,
            StateType::Inactive => DashboardColors::NEUTRAL,
        }
    }

    fn icon(&self) -> &'static str {
        match self.state_type {
            StateType::Live => "●",
            StateType::Paused => "○",
            StateType::Online => "▲",
            StateType::Offline => "▼",
            StateType::Active => "●",
            StateType::Pending => "‖",
            StateType::Executed => "✓",
            StateType::Triggered => "●",
            StateType::Inactive => "○",
        }
    }

    /// Render as a styled span
    pub fn render(&self) -> Span<'static> {
        let content = if self.show_icon {
            format!("{} {}", self.icon(), self.text)
        } else {
            self.text.clone()
        };

        Span::styled(
            content,
            Style::default().fg(self.color()).add_modifier(Modifier::BOLD),
        )
    }

    /// Render just the icon (no text)
    pub fn render_icon_only(&self) -> Span<'static> {
        Span::styled(
            self.icon().to_string(),
            Style::default().fg(self.color()).add_modifier(Modifier::BOLD),
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state_type(&self) -> StateType {
        self.state_type
    }
}

/// Bracketed label in the given color, e.g. `[High]`
pub fn badge(text: impl Into<String>, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{}]", text.into()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_indicator_creation() {
        let indicator = StateIndicator::new(StateType::Live, "Live");
        assert_eq!(indicator.text(), "Live");
        assert_eq!(indicator.state_type(), StateType::Live);
    }

    #[test]
    fn test_state_colors() {
        assert_eq!(StateIndicator::new(StateType::Live, "").color(), Color::Green);
        assert_eq!(StateIndicator::new(StateType::Paused, "").color(), Color::Gray);
        assert_eq!(StateIndicator::new(StateType::Offline, "").color(), Color::Red);
        assert_eq!(StateIndicator::new(StateType::Pending, "").color(), Color::Yellow);
        assert_eq!(StateIndicator::new(StateType::Active, "").color(), Color::Green);
    }

    #[test]
    fn test_active_engine_reads_as_running() {
        let span = StateIndicator::new(StateType::Active, "Active").render();
        assert_eq!(span.content, "● Active");
        assert_eq!(span.style.fg, Some(Color::Green));
    }

    #[test]
    fn test_icon_display() {
        let span = StateIndicator::new(StateType::Live, "Live").render();
        assert!(span.content.contains("●"));

        let span = StateIndicator::new(StateType::Live, "Live")
            .show_icon(false)
            .render();
        assert!(!span.content.contains("●"));
        assert_eq!(span.content, "Live");
    }

    #[test]
    fn test_badge() {
        let span = badge("Critical", Color::Red);
        assert_eq!(span.content, "[Critical]");
        assert_eq!(span.style.fg, Some(Color::Red));
    }
}
