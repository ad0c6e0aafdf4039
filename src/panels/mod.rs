//! Dashboard panels
//!
//! Each panel owns its own copy of the sample data and renders it into the
//! content area. Panels never talk to each other; the shell shows exactly one
//! at a time.
//!
//! Current panels:
//! - Event Logs: log stream with (display-only) filters and live toggle
//! - SIEM Alerts: alert table and integration status
//! - Event Analysis: session risk cards and charts
//! - AI Reasoning: hypothesis, evidence and recommendations
//! - Threat Detection: combined risk with engine and factor breakdowns
//! - Threat Prevention: executable response actions
//! - Incident Reports: incident record and timeline
//! - Admin Feedback: analyst triage of AI decisions

pub mod admin_feedback;
pub mod ai_reasoning;
pub mod event_analysis;
pub mod event_logs;
pub mod incident_report;
pub mod siem;
pub mod threat_detection;
pub mod threat_prevention;
pub mod top_bar;

pub use admin_feedback::AdminFeedbackPanel;
pub use ai_reasoning::AiReasoningPanel;
pub use event_analysis::EventAnalysisPanel;
pub use event_logs::EventLogsPanel;
pub use incident_report::IncidentReportPanel;
pub use siem::SiemPanel;
pub use threat_detection::ThreatDetectionPanel;
pub use threat_prevention::ThreatPreventionPanel;
pub use top_bar::TopBar;

use crate::colors::DashboardColors;
use crate::navigation::SectionId;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

/// A content-area view
pub trait Panel {
    /// Section this panel is registered under
    fn section(&self) -> SectionId;

    /// Draw the panel into `area`
    fn render(&self, frame: &mut Frame, area: Rect);

    /// Handle a key press; returns true when the key was consumed
    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }

    /// True while the panel is editing text and wants every key
    fn captures_input(&self) -> bool {
        false
    }

    /// Panel specific shortcuts for the footer
    fn key_hints(&self) -> &'static str {
        ""
    }
}

/// Bordered card with a bold title, shared by all panels
pub(crate) fn card(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DashboardColors::BORDER))
        .title(Span::styled(
            format!(" {} ", title.into()),
            Style::default()
                .fg(DashboardColors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Style for field labels ("Target:", "Model:")
pub(crate) fn label_style() -> Style {
    Style::default().fg(DashboardColors::SECONDARY)
}

/// Style for sub-section headings
pub(crate) fn heading_style() -> Style {
    Style::default()
        .fg(DashboardColors::HEADER)
        .add_modifier(Modifier::BOLD)
}

/// Shared helpers for rendering panels off-screen in tests
#[cfg(test)]
pub(crate) mod testing {
    use super::Panel;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    /// Render a panel into a `width` x `height` buffer and return its text
    pub fn render_to_string(panel: &dyn Panel, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let mut lines = Vec::with_capacity(height as usize);
        for y in 0..buffer.area.height {
            let line: String = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect();
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn char_key(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }
}
