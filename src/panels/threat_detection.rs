//! Threat detection panel - Combined risk score with engine and factor breakdowns
//!
//! The combined score is a prepared value; nothing is aggregated here.

use super::{card, heading_style, label_style, Panel};
use crate::colors::{risk_color, severity_color, DashboardColors};
use crate::navigation::SectionId;
use crate::sample_data;
use crate::types::{DetectionEngine, DetectionSummary, RiskFactor};
use crate::widgets::{badge, ProgressBar, ScoreScale, StateIndicator, StateType};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Threat detection panel widget
pub struct ThreatDetectionPanel {
    summary: DetectionSummary,
}

impl ThreatDetectionPanel {
    pub fn new() -> Self {
        Self {
            summary: sample_data::detection_summary(),
        }
    }

    pub fn summary(&self) -> &DetectionSummary {
        &self.summary
    }

    /// Gauge fill for a risk factor: its weight when triggered, else empty
    pub fn factor_fill(factor: &RiskFactor) -> u8 {
        if factor.triggered {
            factor.weight
        } else {
            0
        }
    }

    fn score_span(score: u8) -> Span<'static> {
        Span::styled(
            format!("{}%", score),
            Style::default()
                .fg(risk_color(score))
                .add_modifier(Modifier::BOLD),
        )
    }

    fn engine_lines(engine: &DetectionEngine) -> Vec<Line<'static>> {
        let status = StateIndicator::new(StateType::Active, engine.status);
        vec![
            Line::from(vec![
                Span::styled(
                    engine.name,
                    Style::default()
                        .fg(DashboardColors::TEXT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Self::score_span(engine.score),
                Span::raw(" "),
                status.render(),
            ]),
            Line::from(vec![
                Span::styled("  Model: ", label_style()),
                Span::raw(engine.model),
                Span::styled("  Confidence: ", label_style()),
                Span::raw(engine.confidence.label()),
            ]),
        ]
    }

    fn render_engines(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled("Detection Engines", heading_style()))];
        for engine in &self.summary.detection_engines {
            lines.extend(Self::engine_lines(engine));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_factors(&self, frame: &mut Frame, area: Rect) {
        let factors = &self.summary.risk_factors;
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(factors.iter().map(|_| Constraint::Length(2)));
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Risk Factors", heading_style()))),
            rows[0],
        );

        for (i, factor) in factors.iter().enumerate() {
            let row = rows[i + 1];
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(1)])
                .split(row);

            let dot = if factor.triggered {
                StateIndicator::new(StateType::Triggered, "")
            } else {
                StateIndicator::new(StateType::Inactive, "")
            };
            let title = Line::from(vec![
                Span::raw(factor.factor),
                Span::styled(format!("  {}% ", factor.weight), label_style()),
                dot.render_icon_only(),
            ]);
            frame.render_widget(Paragraph::new(title), parts[0]);

            ProgressBar::new(Self::factor_fill(factor))
                .scale(ScoreScale::Fixed(DashboardColors::PRIMARY))
                .show_percentage(false)
                .render(frame, parts[1], Block::default());
        }
    }
}

impl Default for ThreatDetectionPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ThreatDetectionPanel {
    fn section(&self) -> SectionId {
        SectionId::ThreatDetection
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let s = &self.summary;
        let block = card("Threat Detection Engine");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(inner);

        let header = Line::from(vec![
            Span::styled("Combined Risk Score ", heading_style()),
            Self::score_span(s.overall_risk),
            Span::styled("  Based on ML, LLM, and rule-based analysis  ", label_style()),
            badge(format!("{} Risk", s.severity), severity_color(s.severity)),
        ]);
        frame.render_widget(Paragraph::new(header), rows[0]);

        ProgressBar::new(s.overall_risk)
            .scale(ScoreScale::Risk)
            .render(frame, rows[1], Block::default());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        self.render_engines(frame, columns[0]);
        self.render_factors(frame, columns[1]);

        let footer = Line::from(vec![
            Span::styled("ML Score: ", label_style()),
            Self::score_span(s.ml_score),
            Span::styled("   LLM Score: ", label_style()),
            Self::score_span(s.llm_confidence),
            Span::styled("   Rule Score: ", label_style()),
            Self::score_span(s.rule_based_checks),
        ]);
        frame.render_widget(Paragraph::new(footer), rows[3]);
    }
}
