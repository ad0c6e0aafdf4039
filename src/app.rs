//! Dashboard shell - Navigation, layout and key dispatch
//!
//! The shell owns one instance of every panel and shows the one registered
//! for the current section. Panel state survives switching sections.

use crate::colors::DashboardColors;
use crate::config::DashboardConfig;
use crate::error::{CyberWatchError, Result};
use crate::navigation::{Navigation, SectionId};
use crate::panels::{
    AdminFeedbackPanel, AiReasoningPanel, EventAnalysisPanel, EventLogsPanel,
    IncidentReportPanel, Panel, SiemPanel, ThreatDetectionPanel, ThreatPreventionPanel, TopBar,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::TestBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame, Terminal,
};
use tracing::debug;

const SIDEBAR_WIDTH: u16 = 28;
const SUBTITLE: &str = "Real-time cybersecurity monitoring and threat response dashboard";
const GLOBAL_HINTS: &str = "1-8 section | Tab/Shift-Tab cycle | ? help | q quit";
const HELP_TEXT: &str = "Keys: 1-8 jump to section, Tab next, Shift-Tab previous, \
    q or Ctrl-C quit, ? hide help. Panel keys are listed on the right.";

/// Top level application state
pub struct App {
    navigation: Navigation,
    top_bar: TopBar,
    event_logs: EventLogsPanel,
    siem: SiemPanel,
    event_analysis: EventAnalysisPanel,
    ai_reasoning: AiReasoningPanel,
    threat_detection: ThreatDetectionPanel,
    threat_prevention: ThreatPreventionPanel,
    incident_report: IncidentReportPanel,
    admin_feedback: AdminFeedbackPanel,
    show_help: bool,
}

impl App {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            navigation: Navigation::new(config.initial_section()),
            top_bar: TopBar::new(),
            event_logs: EventLogsPanel::new(config.event_logs.streaming),
            siem: SiemPanel::new(),
            event_analysis: EventAnalysisPanel::new(),
            ai_reasoning: AiReasoningPanel::new(),
            threat_detection: ThreatDetectionPanel::new(),
            threat_prevention: ThreatPreventionPanel::new(config.threat_prevention.auto_mode),
            incident_report: IncidentReportPanel::new(),
            admin_feedback: AdminFeedbackPanel::new(),
            show_help: false,
        }
    }

    /// Start on a specific section
    pub fn with_section(mut self, section: SectionId) -> Self {
        self.navigation.select(section);
        self
    }

    pub fn current_section(&self) -> SectionId {
        self.navigation.current()
    }

    pub fn select_section(&mut self, section: SectionId) {
        self.navigation.select(section);
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Panel registered for a section
    pub fn panel(&self, section: SectionId) -> &dyn Panel {
        match section {
            SectionId::EventLogs => &self.event_logs,
            SectionId::SiemAlerts => &self.siem,
            SectionId::EventAnalysis => &self.event_analysis,
            SectionId::AiReasoning => &self.ai_reasoning,
            SectionId::ThreatDetection => &self.threat_detection,
            SectionId::ThreatPrevention => &self.threat_prevention,
            SectionId::IncidentReports => &self.incident_report,
            SectionId::AdminFeedback => &self.admin_feedback,
        }
    }

    fn panel_mut(&mut self, section: SectionId) -> &mut dyn Panel {
        match section {
            SectionId::EventLogs => &mut self.event_logs,
            SectionId::SiemAlerts => &mut self.siem,
            SectionId::EventAnalysis => &mut self.event_analysis,
            SectionId::AiReasoning => &mut self.ai_reasoning,
            SectionId::ThreatDetection => &mut self.threat_detection,
            SectionId::ThreatPrevention => &mut self.threat_prevention,
            SectionId::IncidentReports => &mut self.incident_report,
            SectionId::AdminFeedback => &mut self.admin_feedback,
        }
    }

    pub fn active_panel(&self) -> &dyn Panel {
        self.panel(self.current_section())
    }

    pub fn event_logs(&self) -> &EventLogsPanel {
        &self.event_logs
    }

    pub fn threat_prevention(&self) -> &ThreatPreventionPanel {
        &self.threat_prevention
    }

    pub fn admin_feedback(&self) -> &AdminFeedbackPanel {
        &self.admin_feedback
    }

    /// Handle a key press. Returns true when the dashboard should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let section = self.current_section();
        if self.panel(section).captures_input() {
            self.panel_mut(section).handle_key(key);
            return false;
        }

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Tab => self.navigation.next(),
            KeyCode::BackTab => self.navigation.previous(),
            KeyCode::Char(c) => match SectionId::from_shortcut(c) {
                Some(target) => self.navigation.select(target),
                None => self.delegate(section, key),
            },
            _ => self.delegate(section, key),
        }
        false
    }

    fn delegate(&mut self, section: SectionId, key: KeyEvent) {
        if !self.panel_mut(section).handle_key(key) {
            debug!("Unhandled key {:?} in {}", key.code, section.id());
        }
    }

    /// Draw the whole dashboard
    pub fn render(&self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.top_bar.render(frame, rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        self.render_sidebar(frame, columns[0]);
        self.render_content(frame, columns[1]);
        self.render_footer(frame, rows[2]);
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(DashboardColors::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let brand = vec![
            Line::from(Span::styled(
                " CyberWatch",
                Style::default()
                    .fg(DashboardColors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                " Security Operations Center",
                Style::default().fg(DashboardColors::MUTED),
            )),
        ];
        frame.render_widget(Paragraph::new(brand), parts[0]);

        let current = self.current_section();
        let items: Vec<ListItem> = SectionId::all()
            .into_iter()
            .map(|section| {
                let active = section == current;
                let marker = if active { "▌" } else { " " };
                let style = if active {
                    Style::default()
                        .fg(DashboardColors::PRIMARY)
                        .bg(DashboardColors::BORDER)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(DashboardColors::TEXT)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(DashboardColors::PRIMARY)),
                    Span::styled(
                        format!("{} ", section.shortcut_key()),
                        Style::default().fg(DashboardColors::MUTED),
                    ),
                    Span::styled(section.label(), style),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items), parts[1]);

        let version = Paragraph::new(Span::styled(
            format!(" CyberWatch v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(DashboardColors::MUTED),
        ));
        frame.render_widget(version, parts[2]);
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let heading = vec![
            Line::from(Span::styled(
                format!(" {}", self.current_section().label()),
                Style::default()
                    .fg(DashboardColors::TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}", SUBTITLE),
                Style::default().fg(DashboardColors::MUTED),
            )),
        ];
        frame.render_widget(Paragraph::new(heading), parts[0]);

        self.active_panel().render(frame, parts[1]);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let panel = self.active_panel();
        let left = if self.show_help { HELP_TEXT } else { GLOBAL_HINTS };
        let mut spans = vec![Span::styled(left, Style::default().fg(DashboardColors::NEUTRAL))];

        let hints = panel.key_hints();
        if !hints.is_empty() {
            spans.push(Span::styled(" │ ", Style::default().fg(DashboardColors::BORDER)));
            spans.push(Span::styled(hints, Style::default().fg(DashboardColors::PRIMARY)));
        }
        if panel.captures_input() {
            spans.push(Span::styled(
                "  [editing: Enter/Esc to finish]",
                Style::default().fg(DashboardColors::WARNING),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Render one frame off-screen and return it as plain text
    pub fn snapshot(&self, width: u16, height: u16) -> Result<String> {
        if width == 0 || height == 0 {
            return Err(CyberWatchError::Terminal(format!(
                "snapshot size must be non-zero, got {}x{}",
                width, height
            )));
        }

        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        terminal.draw(|f| self.render(f))?;

        let buffer = terminal.backend().buffer();
        let lines: Vec<String> = (0..buffer.area.height)
            .map(|y| {
                let row: String = (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect();
                row.trim_end().to_string()
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}
