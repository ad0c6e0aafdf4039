//! Top status bar - Brand, system health and operator

use crate::colors::DashboardColors;
use crate::sample_data;
use crate::types::TopBarStatus;
use crate::widgets::{StateIndicator, StateType};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Static status strip drawn above every section
pub struct TopBar {
    status: TopBarStatus,
}

impl TopBar {
    pub fn new() -> Self {
        Self {
            status: sample_data::top_bar_status(),
        }
    }

    pub fn status(&self) -> &TopBarStatus {
        &self.status
    }

    fn line(&self) -> Line<'static> {
        let s = &self.status;
        let label = Style::default().fg(DashboardColors::SECONDARY);
        Line::from(vec![
            Span::styled(
                "CyberWatch",
                Style::default()
                    .fg(DashboardColors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  System Health: ", label),
            StateIndicator::new(StateType::Online, s.system_health).render(),
            Span::styled("  API Status: ", label),
            StateIndicator::new(StateType::Online, s.api_status).render(),
            Span::styled("  Active Threats: ", label),
            Span::styled(
                s.active_threats.to_string(),
                Style::default()
                    .fg(DashboardColors::DANGER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Notifications: ", label),
            Span::styled(
                s.notifications.to_string(),
                Style::default().fg(DashboardColors::WARNING),
            ),
            Span::styled("  │  ", label),
            Span::styled(s.user, Style::default().fg(DashboardColors::TEXT)),
        ])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let bar = Paragraph::new(self.line()).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );
        frame.render_widget(bar, area);
    }
}

impl Default for TopBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_status() {
        let bar = TopBar::new();
        let mut terminal = Terminal::new(TestBackend::new(140, 2)).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let first: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol().to_string())
            .collect();
        assert!(first.starts_with("CyberWatch"));
        assert!(first.contains("System Health: ▲ Operational"));
        assert!(first.contains("API Status: ▲ Connected"));
        assert!(first.contains("Active Threats: 3"));
        assert!(first.contains("Notifications: 7"));
        assert!(first.contains("Security Admin"));
    }
}
