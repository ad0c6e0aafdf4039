//! Incident report panel - Incident record, timeline, evidence and exports

use super::{card, heading_style, label_style, Panel};
use crate::colors::{confidence_color, incident_status_color, severity_color, DashboardColors};
use crate::navigation::SectionId;
use crate::sample_data;
use crate::types::Incident;
use crate::widgets::badge;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use tracing::debug;

/// Export formats offered by the report toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Pdf,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Json => "Export JSON",
            ExportFormat::Pdf => "Export PDF",
        }
    }
}

/// Incident report panel widget
pub struct IncidentReportPanel {
    incident: Incident,
    scroll: u16,
}

impl IncidentReportPanel {
    pub fn new() -> Self {
        Self {
            incident: sample_data::incident(),
            scroll: 0,
        }
    }

    pub fn incident(&self) -> &Incident {
        &self.incident
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scrolling stops with the last body line at the top
    fn max_scroll(&self) -> u16 {
        u16::try_from(self.body_lines().len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Export controls are placeholders; nothing is written.
    pub fn export(&self, format: ExportFormat) {
        debug!("{} requested for {}", format.label(), self.incident.id);
    }

    fn header_lines(&self) -> Vec<Line<'static>> {
        let inc = &self.incident;
        vec![
            Line::from(vec![
                Span::styled(
                    inc.id,
                    Style::default()
                        .fg(DashboardColors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                badge(inc.status.label(), incident_status_color(inc.status)),
                Span::raw(" "),
                badge(inc.severity.label(), severity_color(inc.severity)),
                Span::styled("  Confidence: ", label_style()),
                Span::styled(
                    format!("{}%", inc.confidence),
                    Style::default().fg(confidence_color(inc.confidence)),
                ),
                Span::raw("   "),
                badge(
                    format!("e {}", ExportFormat::Json.label()),
                    DashboardColors::NEUTRAL,
                ),
                Span::raw(" "),
                badge(
                    format!("d {}", ExportFormat::Pdf.label()),
                    DashboardColors::NEUTRAL,
                ),
            ]),
            Line::from(Span::styled(
                inc.title,
                Style::default()
                    .fg(DashboardColors::TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
        ]
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let inc = &self.incident;
        let text = Style::default().fg(DashboardColors::TEXT);
        let mut lines = vec![
            Line::from(Span::styled("Summary", heading_style())),
            Line::from(Span::styled(inc.summary, text)),
            Line::default(),
            Line::from(Span::styled("Timeline", heading_style())),
        ];

        for entry in &inc.timeline {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp),
                    Style::default().fg(DashboardColors::SECONDARY),
                ),
                Span::styled(entry.event, text.add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  [{}]", entry.actor),
                    Style::default().fg(DashboardColors::ACCENT),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("         {}", entry.details),
                label_style(),
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Evidence", heading_style())));
        lines.extend(inc.evidence.iter().map(|item| {
            Line::from(vec![
                Span::styled("  • ", Style::default().fg(DashboardColors::WARNING)),
                Span::styled(*item, text),
            ])
        }));

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Actions Taken", heading_style())));
        lines.extend(inc.actions_taken.iter().map(|item| {
            Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(DashboardColors::SUCCESS)),
                Span::styled(*item, text),
            ])
        }));

        lines
    }

    fn footer_line(&self) -> Line<'static> {
        let inc = &self.incident;
        Line::from(vec![
            Span::styled("Created: ", label_style()),
            Span::raw(inc.created),
            Span::styled("   Last Updated: ", label_style()),
            Span::raw(inc.last_updated),
            Span::styled("   Assignee: ", label_style()),
            Span::raw(inc.assignee),
        ])
    }
}

impl Default for IncidentReportPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for IncidentReportPanel {
    fn section(&self) -> SectionId {
        SectionId::IncidentReports
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = card("Incident Report");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(Paragraph::new(self.header_lines()), chunks[0]);
        frame.render_widget(
            Paragraph::new(self.body_lines())
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            chunks[1],
        );
        frame.render_widget(Paragraph::new(self.footer_line()), chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('e') => self.export(ExportFormat::Json),
            KeyCode::Char('d') => self.export(ExportFormat::Pdf),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1).min(self.max_scroll()),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            _ => return false,
        }
        true
    }

    fn key_hints(&self) -> &'static str {
        "↑/↓ scroll | e export JSON | d export PDF"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::testing::{char_key, key, render_to_string};

    #[test]
    fn test_exports_change_nothing() {
        let mut panel = IncidentReportPanel::new();
        let before = panel.incident().clone();

        assert!(panel.handle_key(char_key('e')));
        assert!(panel.handle_key(char_key('d')));

        assert_eq!(panel.incident(), &before);
        assert_eq!(panel.scroll, 0);
    }

    #[test]
    fn test_scroll_stops_at_last_line() {
        let mut panel = IncidentReportPanel::new();
        let last = (panel.body_lines().len() - 1) as u16;
        for _ in 0..200 {
            panel.handle_key(key(KeyCode::Down));
        }
        assert_eq!(panel.scroll(), last);

        let text = render_to_string(&panel, 120, 50);
        assert!(text.contains("Escalated to incident response team"));

        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.scroll(), last - 1);
    }

    #[test]
    fn test_render_record() {
        let panel = IncidentReportPanel::new();
        let text = render_to_string(&panel, 120, 50);
        assert!(text.contains("INC-2024-001247"));
        assert!(text.contains("[Active]"));
        assert!(text.contains("[High]"));
        assert!(text.contains("Coordinated Brute Force Attack Campaign"));
        assert!(text.contains("Initial detection triggered"));
        assert!(text.contains("Manual investigation started"));
        assert!(text.contains("Assignee: Sarah Chen"));
        assert!(text.contains("[e Export JSON]"));
    }
}
