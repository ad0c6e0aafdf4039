//! Event analysis panel - Session risk cards, failed login trend and port usage

use super::{card, label_style, Panel};
use crate::colors::{risk_color, DashboardColors};
use crate::navigation::SectionId;
use crate::sample_data;
use crate::types::{LoginFailurePoint, PortUsage, SessionRisk};
use crate::widgets::badge;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, BarChart, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Event analysis panel widget
pub struct EventAnalysisPanel {
    sessions: Vec<SessionRisk>,
    login_failures: Vec<LoginFailurePoint>,
    ports: Vec<PortUsage>,
}

impl EventAnalysisPanel {
    pub fn new() -> Self {
        Self {
            sessions: sample_data::session_risks(),
            login_failures: sample_data::login_failures(),
            ports: sample_data::port_usage(),
        }
    }

    pub fn sessions(&self) -> &[SessionRisk] {
        &self.sessions
    }

    /// (x, y) points for the failed login line chart
    pub fn failure_series(&self) -> Vec<(f64, f64)> {
        self.login_failures
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, f64::from(point.failures)))
            .collect()
    }

    /// (port, connections) pairs for the port usage bar chart
    pub fn port_bars(&self) -> Vec<(&'static str, u64)> {
        self.ports
            .iter()
            .map(|usage| (usage.port, usage.connections))
            .collect()
    }

    fn session_lines(session: &SessionRisk) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled(session.ip, Style::default().fg(DashboardColors::PRIMARY)),
                Span::raw(" "),
                badge(
                    format!("Risk: {}%", session.risk_score),
                    risk_color(session.risk_score),
                ),
                Span::styled(
                    format!("  last activity {}", session.last_activity),
                    label_style(),
                ),
            ]),
            Line::from(vec![
                Span::styled("  Failed Logins: ", label_style()),
                Span::styled(
                    session.failed_logins.to_string(),
                    Style::default().fg(DashboardColors::DANGER),
                ),
                Span::styled("  Binaries: ", label_style()),
                Span::styled(
                    session.binaries_executed.to_string(),
                    Style::default().fg(DashboardColors::WARNING),
                ),
                Span::styled("  Location: ", label_style()),
                Span::styled(session.country, Style::default().fg(DashboardColors::INFO)),
                Span::styled("  City: ", label_style()),
                Span::styled(session.city, Style::default().fg(DashboardColors::ACCENT)),
            ]),
        ]
    }

    fn render_sessions(&self, frame: &mut Frame, area: Rect) {
        let block = card("Session Analysis");
        let mut lines = Vec::new();
        for session in &self.sessions {
            lines.extend(Self::session_lines(session));
        }
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_failures(&self, frame: &mut Frame, area: Rect) {
        let data = self.failure_series();
        let max = self
            .login_failures
            .iter()
            .map(|p| p.failures)
            .max()
            .unwrap_or(0);
        let y_top = f64::from(max.max(1));
        let x_end = self.login_failures.len().saturating_sub(1).max(1) as f64;

        let x_labels: Vec<Span> = match (self.login_failures.first(), self.login_failures.last()) {
            (Some(first), Some(last)) => vec![
                Span::styled(first.time, label_style()),
                Span::styled(last.time, label_style()),
            ],
            _ => Vec::new(),
        };

        let dataset = Dataset::default()
            .name("failures")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(DashboardColors::DANGER))
            .data(&data);

        let chart = Chart::new(vec![dataset])
            .block(card("Failed Logins (5min intervals)"))
            .x_axis(
                Axis::default()
                    .style(label_style())
                    .bounds([0.0, x_end])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(label_style())
                    .bounds([0.0, y_top])
                    .labels(vec![
                        Span::styled("0", label_style()),
                        Span::styled(max.to_string(), label_style()),
                    ]),
            );

        frame.render_widget(chart, area);
    }

    fn render_ports(&self, frame: &mut Frame, area: Rect) {
        let bars = self.port_bars();
        let chart = BarChart::default()
            .block(card("Unusual Port Usage"))
            .data(bars.as_slice())
            .bar_width(5)
            .bar_gap(1)
            .bar_style(Style::default().fg(DashboardColors::PRIMARY))
            .value_style(Style::default().fg(Color::Black).bg(DashboardColors::PRIMARY))
            .label_style(label_style());

        frame.render_widget(chart, area);
    }
}

impl Default for EventAnalysisPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for EventAnalysisPanel {
    fn section(&self) -> SectionId {
        SectionId::EventAnalysis
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let session_height = (self.sessions.len() * 2 + 2) as u16;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(session_height), Constraint::Min(8)])
            .split(area);

        self.render_sessions(frame, rows[0]);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        self.render_failures(frame, charts[0]);
        self.render_ports(frame, charts[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::testing::render_to_string;

    #[test]
    fn test_session_risk_colors() {
        let panel = EventAnalysisPanel::new();
        let colors: Vec<Color> = panel
            .sessions()
            .iter()
            .map(|s| risk_color(s.risk_score))
            .collect();
        // 95, 78, 62
        assert_eq!(colors, vec![Color::Red, Color::Yellow, Color::Yellow]);
    }

    #[test]
    fn test_chart_series() {
        let panel = EventAnalysisPanel::new();
        let series = panel.failure_series();
        assert_eq!(series.len(), 6);
        assert_eq!(series[2], (2.0, 15.0));

        let bars = panel.port_bars();
        assert_eq!(bars[1], ("80", 234));
        assert_eq!(bars.len(), 6);
    }

    #[test]
    fn test_render_cards_and_charts() {
        let panel = EventAnalysisPanel::new();
        let text = render_to_string(&panel, 120, 30);
        assert!(text.contains("Session Analysis"));
        assert!(text.contains("203.0.113.42"));
        assert!(text.contains("[Risk: 95%]"));
        assert!(text.contains("Failed Logins (5min intervals)"));
        assert!(text.contains("Unusual Port Usage"));
    }
}
