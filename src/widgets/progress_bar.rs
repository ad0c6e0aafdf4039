//! Score bar widget - gauge colored by the score tier policy

use crate::colors::{confidence_color, risk_color, DashboardColors};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Gauge},
    Frame,
};

/// How a score bar picks its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreScale {
    /// High scores are bad (red)
    Risk,
    /// High scores are good (green)
    Confidence,
    /// Always the same color
    Fixed(Color),
}

/// Progress bar for 0-100 scores
pub struct ProgressBar {
    progress: u8,
    scale: ScoreScale,
    label: Option<String>,
    show_percentage: bool,
}

impl ProgressBar {
    /// Create new progress bar (progress: 0-100)
    pub fn new(progress: u8) -> Self {
        Self {
            progress: progress.min(100),
            scale: ScoreScale::Risk,
            label: None,
            show_percentage: true,
        }
    }

    pub fn scale(mut self, scale: ScoreScale) -> Self {
        self.scale = scale;
        self
    }

    /// Set custom label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set whether to show percentage
    pub fn show_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    fn color(&self) -> Color {
        match self.scale {
            ScoreScale::Risk => risk_color(self.progress),
            ScoreScale::Confidence => confidence_color(self.progress),
            ScoreScale::Fixed(color) => color,
        }
    }

    fn label_text(&self) -> String {
        match (&self.label, self.show_percentage) {
            (Some(label), true) => format!("{} {}%", label, self.progress),
            (None, true) => format!("{}%", self.progress),
            (Some(label), false) => label.clone(),
            (None, false) => String::new(),
        }
    }

    /// Render the progress bar
    pub fn render(&self, frame: &mut Frame, area: Rect, block: Block) {
        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(self.color()).bg(DashboardColors::BORDER))
            .label(self.label_text())
            .ratio(f64::from(self.progress) / 100.0);

        frame.render_widget(gauge, area);
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }
}
