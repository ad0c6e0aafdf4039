//! AI reasoning panel - Hypothesis, explanation, confidence and evidence
//!
//! Shows a single prepared analysis record. No model is invoked.

use super::{card, heading_style, label_style, Panel};
use crate::colors::{confidence_color, severity_color, DashboardColors};
use crate::navigation::SectionId;
use crate::sample_data;
use crate::types::AiAnalysis;
use crate::widgets::{badge, ProgressBar, ScoreScale};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

/// AI reasoning panel widget
pub struct AiReasoningPanel {
    analysis: AiAnalysis,
    scroll: u16,
}

impl AiReasoningPanel {
    pub fn new() -> Self {
        Self {
            analysis: sample_data::ai_analysis(),
            scroll: 0,
        }
    }

    pub fn analysis(&self) -> &AiAnalysis {
        &self.analysis
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scrolling stops with the last body line at the top
    fn max_scroll(&self) -> u16 {
        u16::try_from(self.body_lines().len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let a = &self.analysis;
        let text = Style::default().fg(DashboardColors::TEXT);
        let mut lines = vec![
            Line::from(Span::styled("Hypothesis", heading_style())),
            Line::from(Span::styled(a.hypothesis, text)),
            Line::default(),
            Line::from(Span::styled("Explanation", heading_style())),
            Line::from(Span::styled(a.explanation, text)),
            Line::default(),
            Line::from(Span::styled("Recommended Actions", heading_style())),
        ];

        lines.extend(a.recommended_actions.iter().enumerate().map(|(i, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{}. ", i + 1),
                    Style::default().fg(DashboardColors::PRIMARY),
                ),
                Span::styled(*action, text),
            ])
        }));

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Evidence Lines", heading_style())));
        lines.extend(a.evidence_lines.iter().map(|evidence| {
            Line::from(Span::styled(
                format!("  {}", evidence),
                label_style().add_modifier(Modifier::ITALIC),
            ))
        }));

        lines.push(Line::default());
        let mut tags = vec![Span::styled("Threat Actors: ", label_style())];
        for actor in &a.threat_actors {
            tags.push(badge(*actor, DashboardColors::DANGER));
            tags.push(Span::raw(" "));
        }
        tags.push(Span::styled(" Tactics: ", label_style()));
        for tactic in &a.tactics {
            tags.push(badge(*tactic, DashboardColors::WARNING));
            tags.push(Span::raw(" "));
        }
        tags.push(Span::raw("  "));
        tags.push(badge(
            format!("{} Severity", a.severity),
            severity_color(a.severity),
        ));
        lines.push(Line::from(tags));

        lines
    }
}

impl Default for AiReasoningPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for AiReasoningPanel {
    fn section(&self) -> SectionId {
        SectionId::AiReasoning
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let confidence = self.analysis.confidence;
        let block = card("AI Reasoning Assistant (GPT-4)");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let header = Line::from(vec![
            Span::styled("Confidence: ", label_style()),
            Span::styled(
                format!("{}%", confidence),
                Style::default()
                    .fg(confidence_color(confidence))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   (Low < 60 ≤ Medium < 80 ≤ High)", label_style()),
        ]);
        frame.render_widget(Paragraph::new(header), chunks[0]);

        ProgressBar::new(confidence)
            .scale(ScoreScale::Confidence)
            .label("Confidence Score")
            .render(frame, chunks[1], Block::default());

        let body = Paragraph::new(self.body_lines())
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0));
        frame.render_widget(body, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1).min(self.max_scroll()),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            _ => return false,
        }
        true
    }

    fn key_hints(&self) -> &'static str {
        "↑/↓ scroll"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::testing::{key, render_to_string};
    use ratatui::style::Color;

    #[test]
    fn test_confidence_uses_inverted_scale() {
        let panel = AiReasoningPanel::new();
        assert_eq!(panel.analysis().confidence, 87);
        assert_eq!(confidence_color(panel.analysis().confidence), Color::Green);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut panel = AiReasoningPanel::new();
        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.scroll, 0);
        panel.handle_key(key(KeyCode::Down));
        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.scroll, 2);
    }

    #[test]
    fn test_scroll_stops_at_last_line() {
        let mut panel = AiReasoningPanel::new();
        let last = (panel.body_lines().len() - 1) as u16;
        for _ in 0..200 {
            panel.handle_key(key(KeyCode::Down));
        }
        assert_eq!(panel.scroll(), last);

        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.scroll(), last - 1);

        let text = render_to_string(&panel, 160, 40);
        assert!(text.contains("[High Severity]"));
    }

    #[test]
    fn test_render_sections() {
        let panel = AiReasoningPanel::new();
        let text = render_to_string(&panel, 120, 50);
        assert!(text.contains("AI Reasoning Assistant (GPT-4)"));
        assert!(text.contains("87%"));
        assert!(text.contains("Hypothesis"));
        assert!(text.contains("Recommended Actions"));
        assert!(text.contains("1. Immediately block all source IPs"));
        assert!(text.contains("[APT28]"));
        assert!(text.contains("[High Severity]"));
    }
}
