//! Admin feedback panel - Analyst triage of AI decisions
//!
//! A pending alert moves from unselected to selected when the analyst picks
//! it, and leaves the queue when feedback with a verdict is submitted.
//! Submissions stay local; the history list and model statistics are static.

use super::{card, heading_style, label_style, Panel};
use crate::colors::{confidence_color, verdict_color, DashboardColors};
use crate::navigation::SectionId;
use crate::sample_data;
use crate::types::{FeedbackAlert, FeedbackRecord, ModelStats, Verdict};
use crate::widgets::badge;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::debug;

/// Admin feedback panel widget
pub struct AdminFeedbackPanel {
    pending: Vec<FeedbackAlert>,
    history: Vec<FeedbackRecord>,
    stats: ModelStats,
    cursor: usize,
    selected: Option<u32>,
    verdict: Option<Verdict>,
    notes: String,
    editing_notes: bool,
}

impl AdminFeedbackPanel {
    pub fn new() -> Self {
        Self {
            pending: sample_data::pending_feedback(),
            history: sample_data::feedback_history(),
            stats: sample_data::model_stats(),
            cursor: 0,
            selected: None,
            verdict: None,
            notes: String::new(),
            editing_notes: false,
        }
    }

    pub fn pending(&self) -> &[FeedbackAlert] {
        &self.pending
    }

    pub fn pending_ids(&self) -> Vec<u32> {
        self.pending.iter().map(|a| a.id).collect()
    }

    pub fn history(&self) -> &[FeedbackRecord] {
        &self.history
    }

    pub fn stats(&self) -> &ModelStats {
        &self.stats
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn is_editing_notes(&self) -> bool {
        self.editing_notes
    }

    /// Select a pending alert by id. Unknown ids are ignored.
    pub fn select(&mut self, id: u32) {
        if self.pending.iter().any(|a| a.id == id) {
            self.selected = Some(id);
            debug!("Selected alert {} for feedback", id);
        }
    }

    /// Choose a verdict for the selected alert
    pub fn set_verdict(&mut self, verdict: Verdict) {
        if self.selected.is_some() {
            self.verdict = Some(verdict);
        }
    }

    pub fn submit_enabled(&self) -> bool {
        self.verdict.is_some()
    }

    /// Drop the selected alert from the queue and reset the form.
    /// Without both a selection and a verdict this does nothing.
    pub fn submit(&mut self) {
        let (Some(id), Some(verdict)) = (self.selected, self.verdict) else {
            debug!("Feedback submit ignored: selection or verdict missing");
            return;
        };

        self.pending.retain(|a| a.id != id);
        debug!(
            "Feedback submitted for alert {}: {} ({} note chars)",
            id,
            verdict.label(),
            self.notes.len()
        );

        self.selected = None;
        self.verdict = None;
        self.notes.clear();
        self.editing_notes = false;
        self.cursor = self.cursor.min(self.pending.len().saturating_sub(1));
    }

    fn handle_notes_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.editing_notes = false,
            KeyCode::Backspace => {
                self.notes.pop();
            }
            KeyCode::Char(c) => self.notes.push(c),
            _ => {}
        }
        true
    }

    fn verdict_from_key(c: char) -> Option<Verdict> {
        Verdict::all().into_iter().find(|v| v.shortcut_key() == c)
    }

    fn pending_item(&self, alert: &FeedbackAlert) -> ListItem<'static> {
        let marker = if self.selected == Some(alert.id) {
            Span::styled("◆ ", Style::default().fg(DashboardColors::PRIMARY))
        } else {
            Span::raw("  ")
        };
        ListItem::new(vec![
            Line::from(vec![
                marker,
                Span::styled(alert.description, Style::default().fg(DashboardColors::TEXT)),
                Span::raw(" "),
                badge(
                    format!("{}%", alert.confidence),
                    confidence_color(alert.confidence),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("  {}  AI: ", alert.timestamp), label_style()),
                Span::styled(alert.ai_decision, Style::default().fg(DashboardColors::WARNING)),
            ]),
        ])
    }

    fn render_queue(&self, frame: &mut Frame, area: Rect) {
        let block = card(format!("Pending Review ({})", self.pending.len()));
        if self.pending.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No pending alerts to review",
                label_style().add_modifier(Modifier::ITALIC),
            )))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .pending
            .iter()
            .map(|alert| self.pending_item(alert))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(DashboardColors::BORDER));
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn form_lines(&self) -> Vec<Line<'static>> {
        let Some(id) = self.selected else {
            return vec![Line::from(Span::styled(
                "Press Enter on a pending alert to review it",
                label_style(),
            ))];
        };

        let mut lines = vec![Line::from(vec![
            Span::styled("Reviewing alert ", label_style()),
            Span::styled(
                format!("#{}", id),
                Style::default()
                    .fg(DashboardColors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];

        for verdict in Verdict::all() {
            let chosen = self.verdict == Some(verdict);
            let radio = if chosen { "(•)" } else { "( )" };
            let mut style = Style::default().fg(verdict_color(verdict));
            if chosen {
                style = style.add_modifier(Modifier::BOLD);
            }
            lines.push(Line::from(vec![
                Span::styled(format!("  {} {} ", radio, verdict.shortcut_key()), label_style()),
                Span::styled(verdict.label(), style),
            ]));
        }

        let cursor = if self.editing_notes { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled("  Notes: ", label_style()),
            Span::styled(
                format!("{}{}", self.notes, cursor),
                Style::default().fg(DashboardColors::TEXT),
            ),
        ]));

        let submit = if self.submit_enabled() {
            Span::styled(
                "[s Submit Feedback]",
                Style::default()
                    .fg(DashboardColors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("[Submit Feedback]", Style::default().fg(DashboardColors::MUTED))
        };
        lines.push(Line::from(vec![Span::raw("  "), submit]));
        lines
    }

    fn stats_lines(&self) -> Vec<Line<'static>> {
        let s = &self.stats;
        let metric = |label: &'static str, value: u8| {
            vec![
                Span::styled(format!("{}: ", label), label_style()),
                Span::styled(
                    format!("{}%  ", value),
                    Style::default()
                        .fg(DashboardColors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
            ]
        };

        let mut figures = Vec::new();
        figures.extend(metric("Accuracy", s.accuracy));
        figures.extend(metric("Precision", s.precision));
        figures.extend(metric("Recall", s.recall));
        figures.extend(metric("F1 Score", s.f1_score));

        vec![
            Line::from(Span::styled("Model Performance", heading_style())),
            Line::from(figures),
            Line::from(vec![
                Span::styled("Training: ", label_style()),
                badge(s.training_status, DashboardColors::SUCCESS),
                Span::styled("  Last: ", label_style()),
                Span::raw(s.last_training),
                Span::styled("  Next: ", label_style()),
                Span::raw(s.next_training),
            ]),
            Line::from(vec![
                Span::styled("Total Feedback: ", label_style()),
                Span::raw(group_thousands(s.feedback_count)),
                Span::styled("  Pending: ", label_style()),
                Span::raw(s.pending_feedback.to_string()),
                Span::raw("   "),
                Span::styled(
                    "[Trigger Retraining]",
                    Style::default().fg(DashboardColors::MUTED),
                ),
            ]),
        ]
    }

    fn history_item(record: &FeedbackRecord) -> ListItem<'static> {
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(record.description, Style::default().fg(DashboardColors::TEXT)),
                Span::raw(" "),
                badge(record.verdict.label(), verdict_color(record.verdict)),
                Span::styled(format!(" {}%", record.confidence), label_style()),
            ]),
            Line::from(Span::styled(
                format!("  {}  {}", record.timestamp, record.notes),
                label_style(),
            )),
        ])
    }
}

/// Format a count with comma thousands separators ("1,247")
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Default for AdminFeedbackPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for AdminFeedbackPanel {
    fn section(&self) -> SectionId {
        SectionId::AdminFeedback
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(9)])
            .split(columns[0]);

        self.render_queue(frame, left[0]);
        frame.render_widget(
            Paragraph::new(self.form_lines()).block(card("Feedback")),
            left[1],
        );

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(columns[1]);

        frame.render_widget(
            Paragraph::new(self.stats_lines()).block(card("AI Model")),
            right[0],
        );

        let history: Vec<ListItem> = self.history.iter().map(Self::history_item).collect();
        frame.render_widget(
            List::new(history).block(card("Recent Feedback")),
            right[1],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.editing_notes {
            return self.handle_notes_key(key);
        }

        match key.code {
            KeyCode::Down => {
                if self.cursor + 1 < self.pending.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Enter => {
                if let Some(id) = self.pending.get(self.cursor).map(|a| a.id) {
                    self.select(id);
                }
            }
            KeyCode::Char('n') if self.selected.is_some() => self.editing_notes = true,
            KeyCode::Char('s') => self.submit(),
            KeyCode::Char(c) => match Self::verdict_from_key(c) {
                Some(verdict) => self.set_verdict(verdict),
                None => return false,
            },
            _ => return false,
        }
        true
    }

    fn captures_input(&self) -> bool {
        self.editing_notes
    }

    fn key_hints(&self) -> &'static str {
        "↑/↓ move | Enter select | t/f/r verdict | n notes | s submit"
    }
}
