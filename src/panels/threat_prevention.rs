//! Threat prevention panel - Response actions with manual execution
//!
//! Executing an action only changes its recorded status. The global Auto Mode
//! switch is a display flag; it never blocks or triggers execution.

use super::{card, label_style, Panel};
use crate::colors::{action_status_color, impact_color, severity_color, DashboardColors};
use crate::navigation::SectionId;
use crate::sample_data;
use crate::types::{ActionStatus, PreventionAction};
use crate::widgets::{badge, StateIndicator, StateType};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::debug;

/// Per-status totals shown in the summary row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionCounts {
    pub executed: usize,
    pub pending: usize,
    pub ready: usize,
    pub auto_enabled: usize,
}

/// Threat prevention panel widget
pub struct ThreatPreventionPanel {
    actions: Vec<PreventionAction>,
    auto_mode: bool,
    cursor: usize,
}

impl ThreatPreventionPanel {
    pub fn new(auto_mode: bool) -> Self {
        Self {
            actions: sample_data::prevention_actions(),
            auto_mode,
            cursor: 0,
        }
    }

    pub fn actions(&self) -> &[PreventionAction] {
        &self.actions
    }

    pub fn action(&self, id: u32) -> Option<&PreventionAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn is_auto_mode(&self) -> bool {
        self.auto_mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Mark a Ready action as Executed. Any other status is left alone.
    pub fn execute(&mut self, id: u32) {
        match self.actions.iter_mut().find(|a| a.id == id) {
            Some(action) if action.status == ActionStatus::Ready => {
                action.status = ActionStatus::Executed;
                debug!("Executed prevention action {} ({})", id, action.name);
            }
            Some(action) => {
                debug!(
                    "Ignoring execute for action {} in status {}",
                    id,
                    action.status.label()
                );
            }
            None => debug!("No prevention action with id {}", id),
        }
    }

    /// Flip one action's auto-execute flag
    pub fn toggle_auto_execute(&mut self, id: u32) {
        if let Some(action) = self.actions.iter_mut().find(|a| a.id == id) {
            action.auto_execute = !action.auto_execute;
            debug!("Action {} auto-execute: {}", id, action.auto_execute);
        }
    }

    pub fn toggle_auto_mode(&mut self) {
        self.auto_mode = !self.auto_mode;
        debug!("Auto Mode: {}", self.auto_mode);
    }

    pub fn counts(&self) -> ActionCounts {
        self.actions
            .iter()
            .fold(ActionCounts::default(), |mut counts, action| {
                match action.status {
                    ActionStatus::Executed => counts.executed += 1,
                    ActionStatus::Pending => counts.pending += 1,
                    ActionStatus::Ready => counts.ready += 1,
                }
                if action.auto_execute {
                    counts.auto_enabled += 1;
                }
                counts
            })
    }

    fn selected_id(&self) -> Option<u32> {
        self.actions.get(self.cursor).map(|a| a.id)
    }

    fn status_control(status: ActionStatus) -> Span<'static> {
        let color = action_status_color(status);
        match status {
            ActionStatus::Ready => Span::styled(
                "[Execute]",
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            ActionStatus::Executed => {
                StateIndicator::new(StateType::Executed, "Completed").render()
            }
            ActionStatus::Pending => StateIndicator::new(StateType::Pending, "Waiting").render(),
        }
    }

    fn action_item(action: &PreventionAction) -> ListItem<'static> {
        let auto = if action.auto_execute {
            Span::styled("auto: on ", Style::default().fg(DashboardColors::SUCCESS))
        } else {
            Span::styled("auto: off", Style::default().fg(DashboardColors::NEUTRAL))
        };

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(
                    action.name,
                    Style::default()
                        .fg(DashboardColors::TEXT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                badge(action.severity.label(), severity_color(action.severity)),
                Span::raw(" "),
                badge(
                    action.status.label(),
                    action_status_color(action.status),
                ),
            ]),
            Line::from(Span::styled(format!("  {}", action.description), label_style())),
            Line::from(vec![
                Span::styled("  Target: ", label_style()),
                Span::styled(action.target, Style::default().fg(DashboardColors::PRIMARY)),
                Span::styled("  Impact: ", label_style()),
                Span::styled(
                    action.estimated_impact.label(),
                    Style::default().fg(impact_color(action.estimated_impact)),
                ),
                Span::raw("  "),
                auto,
                Span::raw("  "),
                Self::status_control(action.status),
            ]),
        ])
    }

    fn summary_line(&self) -> Line<'static> {
        let counts = self.counts();
        let stat = |label: &'static str, value: usize, color| {
            vec![
                Span::styled(
                    value.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}   ", label), label_style()),
            ]
        };

        let mut spans = Vec::new();
        spans.extend(stat("Executed", counts.executed, DashboardColors::INFO));
        spans.extend(stat("Pending", counts.pending, DashboardColors::WARNING));
        spans.extend(stat("Ready", counts.ready, DashboardColors::SUCCESS));
        spans.extend(stat("Auto-enabled", counts.auto_enabled, DashboardColors::ACCENT));
        Line::from(spans)
    }
}

impl Default for ThreatPreventionPanel {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Panel for ThreatPreventionPanel {
    fn section(&self) -> SectionId {
        SectionId::ThreatPrevention
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = card("Automated Threat Prevention");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let banner_height = if self.auto_mode { 0 } else { 1 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(banner_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let mode = if self.auto_mode {
            badge("Automated", DashboardColors::SUCCESS)
        } else {
            badge("Manual", DashboardColors::WARNING)
        };
        let header = Line::from(vec![Span::styled("Auto Mode: ", label_style()), mode]);
        frame.render_widget(Paragraph::new(header), chunks[0]);

        if !self.auto_mode {
            let banner = Span::styled(
                "Automatic prevention is disabled. Manual approval required for all actions.",
                Style::default().fg(DashboardColors::WARNING),
            );
            frame.render_widget(Paragraph::new(Line::from(banner)), chunks[1]);
        }

        let items: Vec<ListItem> = self.actions.iter().map(Self::action_item).collect();
        let list = List::new(items)
            .highlight_style(Style::default().bg(DashboardColors::BORDER))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, chunks[2], &mut state);

        frame.render_widget(Paragraph::new(self.summary_line()), chunks[3]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down => {
                if self.cursor + 1 < self.actions.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Enter | KeyCode::Char('x') => {
                if let Some(id) = self.selected_id() {
                    self.execute(id);
                }
            }
            KeyCode::Char('a') => {
                if let Some(id) = self.selected_id() {
                    self.toggle_auto_execute(id);
                }
            }
            KeyCode::Char('m') => self.toggle_auto_mode(),
            _ => return false,
        }
        true
    }

    fn key_hints(&self) -> &'static str {
        "↑/↓ select | x execute | a auto | m auto mode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::testing::{char_key, key, render_to_string};

    #[test]
    fn test_initial_counts() {
        let panel = ThreatPreventionPanel::default();
        assert_eq!(
            panel.counts(),
            ActionCounts {
                executed: 1,
                pending: 1,
                ready: 3,
                auto_enabled: 2,
            }
        );
    }

    #[test]
    fn test_execute_ready_changes_only_that_action() {
        let mut panel = ThreatPreventionPanel::default();
        let before = panel.actions().to_vec();

        panel.execute(1);

        for (old, new) in before.iter().zip(panel.actions()) {
            if old.id == 1 {
                assert_eq!(new.status, ActionStatus::Executed);
                assert_eq!(
                    PreventionAction {
                        status: old.status,
                        ..new.clone()
                    },
                    *old
                );
            } else {
                assert_eq!(new, old);
            }
        }
        assert!(panel.is_auto_mode());
    }

    #[test]
    fn test_execute_non_ready_is_noop() {
        let mut panel = ThreatPreventionPanel::default();
        let before = panel.actions().to_vec();

        panel.execute(2); // Pending
        panel.execute(4); // Executed
        panel.execute(99);

        assert_eq!(panel.actions(), before.as_slice());
    }

    #[test]
    fn test_auto_mode_does_not_gate_execution() {
        let mut panel = ThreatPreventionPanel::new(false);
        panel.execute(3);
        assert_eq!(panel.action(3).map(|a| a.status), Some(ActionStatus::Executed));
    }

    #[test]
    fn test_toggle_auto_execute() {
        let mut panel = ThreatPreventionPanel::default();
        panel.toggle_auto_execute(3);
        assert_eq!(panel.action(3).map(|a| a.auto_execute), Some(true));
        assert_eq!(panel.counts().auto_enabled, 3);

        panel.toggle_auto_execute(3);
        assert_eq!(panel.action(3).map(|a| a.auto_execute), Some(false));
    }

    #[test]
    fn test_keys_act_on_cursor() {
        let mut panel = ThreatPreventionPanel::default();
        panel.handle_key(key(KeyCode::Down));
        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.cursor(), 2);

        panel.handle_key(char_key('x'));
        assert_eq!(panel.action(3).map(|a| a.status), Some(ActionStatus::Executed));

        panel.handle_key(char_key('a'));
        assert_eq!(panel.action(3).map(|a| a.auto_execute), Some(true));

        panel.handle_key(char_key('m'));
        assert!(!panel.is_auto_mode());
    }

    #[test]
    fn test_render_banner_only_when_manual() {
        let mut panel = ThreatPreventionPanel::default();
        let text = render_to_string(&panel, 120, 24);
        assert!(text.contains("[Automated]"));
        assert!(text.contains("[Execute]"));
        assert!(text.contains("Completed"));
        assert!(text.contains("Waiting"));
        assert!(!text.contains("Automatic prevention is disabled"));

        panel.toggle_auto_mode();
        let text = render_to_string(&panel, 120, 24);
        assert!(text.contains("[Manual]"));
        assert!(text.contains(
            "Automatic prevention is disabled. Manual approval required for all actions."
        ));
    }
}
