//! SIEM alerts panel - Alert table and integration status

use super::{card, label_style, Panel};
use crate::colors::{alert_severity_color, DashboardColors};
use crate::navigation::SectionId;
use crate::sample_data;
use crate::types::SiemAlert;
use crate::widgets::{badge, StateIndicator, StateType};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// SIEM integration panel widget
pub struct SiemPanel {
    alerts: Vec<SiemAlert>,
    /// Integration status. Hardcoded; no connectivity check is made.
    online: bool,
    selected: usize,
}

impl SiemPanel {
    pub fn new() -> Self {
        Self {
            alerts: sample_data::siem_alerts(),
            online: true,
            selected: 0,
        }
    }

    pub fn alerts(&self) -> &[SiemAlert] {
        &self.alerts
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Index of the highlighted row
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.alerts.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn status_line(&self) -> Line<'static> {
        let indicator = if self.online {
            StateIndicator::new(StateType::Online, "Online")
        } else {
            StateIndicator::new(StateType::Offline, "Offline")
        };
        Line::from(vec![
            Span::styled("Wazuh manager: ", label_style()),
            indicator.render(),
            Span::styled(
                format!("   {} alerts", self.alerts.len()),
                label_style(),
            ),
        ])
    }
}

impl Default for SiemPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for SiemPanel {
    fn section(&self) -> SectionId {
        SectionId::SiemAlerts
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = card("SIEM Integration (Wazuh)");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        frame.render_widget(Paragraph::new(self.status_line()), chunks[0]);

        let header = Row::new(vec![
            "Timestamp",
            "Source IP",
            "Event Type",
            "Severity",
            "Location",
            "Description",
        ])
        .style(label_style().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .alerts
            .iter()
            .map(|alert| {
                Row::new(vec![
                    Cell::from(Span::styled(
                        alert.timestamp,
                        Style::default().fg(DashboardColors::SECONDARY),
                    )),
                    Cell::from(Span::styled(
                        alert.source_ip,
                        Style::default().fg(DashboardColors::PRIMARY),
                    )),
                    Cell::from(alert.event_type),
                    Cell::from(badge(
                        alert.severity.label(),
                        alert_severity_color(alert.severity),
                    )),
                    Cell::from(Span::styled(alert.geo_location, label_style())),
                    Cell::from(Span::styled(alert.description, label_style())),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(20),
                Constraint::Length(15),
                Constraint::Length(21),
                Constraint::Length(11),
                Constraint::Length(9),
                Constraint::Min(20),
            ],
        )
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = TableState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(table, chunks[1], &mut state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_previous(),
            _ => return false,
        }
        true
    }

    fn key_hints(&self) -> &'static str {
        "↑/↓ select alert"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::testing::{key, render_to_string};

    #[test]
    fn test_panel_creation() {
        let panel = SiemPanel::new();
        assert!(panel.is_online());
        assert_eq!(panel.alerts().len(), 5);
        assert_eq!(panel.selected(), 0);
    }

    #[test]
    fn test_selection_bounds() {
        let mut panel = SiemPanel::new();
        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.selected(), 0);

        for _ in 0..10 {
            panel.handle_key(key(KeyCode::Down));
        }
        assert_eq!(panel.selected(), 4);
    }

    #[test]
    fn test_render_table() {
        let panel = SiemPanel::new();
        let text = render_to_string(&panel, 140, 14);
        assert!(text.contains("SIEM Integration (Wazuh)"));
        assert!(text.contains("Online"));
        assert!(text.contains("Source IP"));
        assert!(text.contains("DDoS Attempt"));
        assert!(text.contains("[Critical]"));
    }
}
