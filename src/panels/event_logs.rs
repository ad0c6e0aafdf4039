//! Event logs panel - Log stream with filter controls and live indicator
//!
//! The server/type/search controls record what the analyst picked and echo
//! it in the header, but the list always shows every entry. The live toggle
//! only flips the indicator.

use super::{card, label_style, Panel};
use crate::colors::{level_color, DashboardColors};
use crate::navigation::SectionId;
use crate::sample_data::{self, LOG_SERVERS, LOG_TYPES};
use crate::types::LogEntry;
use crate::widgets::{badge, StateIndicator, StateType};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use tracing::debug;

/// Event logs panel widget
pub struct EventLogsPanel {
    entries: Vec<LogEntry>,
    streaming: bool,
    server_filter: usize,
    type_filter: usize,
    search: String,
    editing_search: bool,
    scroll_offset: usize,
}

impl EventLogsPanel {
    /// Create the panel with the live indicator on or off
    pub fn new(streaming: bool) -> Self {
        Self {
            entries: sample_data::event_logs(),
            streaming,
            server_filter: 0,
            type_filter: 0,
            search: String::new(),
            editing_search: false,
            scroll_offset: 0,
        }
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Flip the live indicator
    pub fn toggle_streaming(&mut self) {
        self.streaming = !self.streaming;
        debug!("Event log streaming indicator: {}", self.streaming);
    }

    pub fn cycle_server_filter(&mut self) {
        self.server_filter = (self.server_filter + 1) % LOG_SERVERS.len();
    }

    pub fn cycle_type_filter(&mut self) {
        self.type_filter = (self.type_filter + 1) % LOG_TYPES.len();
    }

    pub fn server_filter(&self) -> &'static str {
        LOG_SERVERS[self.server_filter]
    }

    pub fn type_filter(&self) -> &'static str {
        LOG_TYPES[self.type_filter]
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_editing_search(&self) -> bool {
        self.editing_search
    }

    /// Entries shown in the list. Filters are not applied.
    pub fn visible_entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Scroll down the list (increase offset)
    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(amount)
            .min(self.entries.len().saturating_sub(1));
    }

    /// Scroll up the list (decrease offset)
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.editing_search = false,
            KeyCode::Backspace => {
                self.search.pop();
            }
            KeyCode::Char(c) => self.search.push(c),
            _ => {}
        }
        true
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let indicator = if self.streaming {
            StateIndicator::new(StateType::Live, "Live")
        } else {
            StateIndicator::new(StateType::Paused, "Paused")
        };

        let cursor = if self.editing_search { "_" } else { "" };
        let search_text = if self.search.is_empty() && !self.editing_search {
            Span::styled("Search logs...", label_style().add_modifier(Modifier::ITALIC))
        } else {
            Span::styled(
                format!("{}{}", self.search, cursor),
                Style::default().fg(DashboardColors::TEXT),
            )
        };

        let lines = vec![
            Line::from(vec![indicator.render()]),
            Line::from(vec![
                Span::styled("Server: ", label_style()),
                Span::styled(self.server_filter(), Style::default().fg(DashboardColors::PRIMARY)),
                Span::raw("  "),
                Span::styled("Type: ", label_style()),
                Span::styled(self.type_filter(), Style::default().fg(DashboardColors::PRIMARY)),
                Span::raw("  "),
                Span::styled("Search: ", label_style()),
                search_text,
            ]),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn entry_item(entry: &LogEntry) -> ListItem<'static> {
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp),
                    Style::default().fg(DashboardColors::SECONDARY),
                ),
                badge(entry.server, DashboardColors::TEXT),
                Span::raw(" "),
                badge(entry.log_type, DashboardColors::TEXT),
                Span::raw(" "),
                badge(entry.level.label(), level_color(entry.level)),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(entry.message, Style::default().fg(DashboardColors::TEXT)),
                Span::styled(
                    format!("  {}", entry.source),
                    Style::default().fg(DashboardColors::SECONDARY),
                ),
            ]),
        ])
    }
}

impl Default for EventLogsPanel {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Panel for EventLogsPanel {
    fn section(&self) -> SectionId {
        SectionId::EventLogs
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = card("Event Logs");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        self.render_controls(frame, chunks[0]);

        let items: Vec<ListItem> = self
            .visible_entries()
            .iter()
            .skip(self.scroll_offset)
            .map(Self::entry_item)
            .collect();
        frame.render_widget(List::new(items), chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.editing_search {
            return self.handle_search_key(key);
        }

        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('p') => self.toggle_streaming(),
            KeyCode::Char('s') => self.cycle_server_filter(),
            KeyCode::Char('t') => self.cycle_type_filter(),
            KeyCode::Char('/') => self.editing_search = true,
            KeyCode::Down => self.scroll_down(1),
            KeyCode::Up => self.scroll_up(1),
            _ => return false,
        }
        true
    }

    fn captures_input(&self) -> bool {
        self.editing_search
    }

    fn key_hints(&self) -> &'static str {
        "space live | s server | t type | / search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::testing::{char_key, key, render_to_string};

    #[test]
    fn test_panel_creation() {
        let panel = EventLogsPanel::default();
        assert!(panel.is_streaming());
        assert_eq!(panel.visible_entries().len(), 5);
        assert_eq!(panel.server_filter(), "All Servers");
        assert_eq!(panel.type_filter(), "All Types");
        assert_eq!(panel.search(), "");
    }

    #[test]
    fn test_streaming_toggle_only_flips_indicator() {
        let mut panel = EventLogsPanel::default();
        let before = panel.visible_entries().to_vec();

        assert!(panel.handle_key(char_key(' ')));
        assert!(!panel.is_streaming());
        assert_eq!(panel.visible_entries(), before.as_slice());

        panel.toggle_streaming();
        assert!(panel.is_streaming());
        assert_eq!(panel.visible_entries(), before.as_slice());
    }

    #[test]
    fn test_filters_cycle_and_wrap() {
        let mut panel = EventLogsPanel::default();
        panel.cycle_server_filter();
        assert_eq!(panel.server_filter(), "web-01");
        for _ in 0..4 {
            panel.cycle_server_filter();
        }
        assert_eq!(panel.server_filter(), "All Servers");

        panel.handle_key(char_key('t'));
        assert_eq!(panel.type_filter(), "System");
    }

    #[test]
    fn test_filters_never_narrow_the_list() {
        let mut panel = EventLogsPanel::default();
        panel.cycle_server_filter(); // web-01
        panel.cycle_type_filter(); // System
        panel.handle_key(char_key('/'));
        for c in "nothing matches".chars() {
            panel.handle_key(char_key(c));
        }

        assert_eq!(panel.visible_entries(), sample_data::event_logs().as_slice());
    }

    #[test]
    fn test_search_editing_captures_keys() {
        let mut panel = EventLogsPanel::default();
        assert!(!panel.captures_input());

        panel.handle_key(char_key('/'));
        assert!(panel.captures_input());

        // 's' and 't' are text while editing, not filter shortcuts
        panel.handle_key(char_key('s'));
        panel.handle_key(char_key('t'));
        panel.handle_key(char_key('x'));
        panel.handle_key(key(KeyCode::Backspace));
        assert_eq!(panel.search(), "st");
        assert_eq!(panel.server_filter(), "All Servers");

        panel.handle_key(key(KeyCode::Enter));
        assert!(!panel.captures_input());
        assert_eq!(panel.search(), "st");
    }

    #[test]
    fn test_scroll_bounds() {
        let mut panel = EventLogsPanel::default();
        panel.scroll_down(100);
        assert_eq!(panel.scroll_offset(), 4);

        panel.scroll_up(1);
        assert_eq!(panel.scroll_offset(), 3);

        panel.scroll_up(100);
        assert_eq!(panel.scroll_offset(), 0);
    }

    #[test]
    fn test_unhandled_key_not_consumed() {
        let mut panel = EventLogsPanel::default();
        assert!(!panel.handle_key(char_key('z')));
    }

    #[test]
    fn test_render_shows_indicator_and_entries() {
        let mut panel = EventLogsPanel::default();
        let text = render_to_string(&panel, 100, 20);
        assert!(text.contains("Event Logs"));
        assert!(text.contains("● Live"));
        assert!(text.contains("High CPU usage detected: 89%"));
        assert!(text.contains("[WARNING]"));

        panel.toggle_streaming();
        let text = render_to_string(&panel, 100, 20);
        assert!(text.contains("○ Paused"));
    }
}
