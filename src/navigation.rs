//! Navigation shell state - which section the content area shows

/// Section identifiers in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    EventLogs,
    SiemAlerts,
    EventAnalysis,
    AiReasoning,
    ThreatDetection,
    ThreatPrevention,
    IncidentReports,
    AdminFeedback,
}

impl SectionId {
    /// Get all section IDs in display order
    pub fn all() -> [SectionId; 8] {
        [
            SectionId::EventLogs,
            SectionId::SiemAlerts,
            SectionId::EventAnalysis,
            SectionId::AiReasoning,
            SectionId::ThreatDetection,
            SectionId::ThreatPrevention,
            SectionId::IncidentReports,
            SectionId::AdminFeedback,
        ]
    }

    /// Stable string id, as accepted on the command line and in config
    pub fn id(&self) -> &'static str {
        match self {
            SectionId::EventLogs => "logs",
            SectionId::SiemAlerts => "alerts",
            SectionId::EventAnalysis => "analysis",
            SectionId::AiReasoning => "reasoning",
            SectionId::ThreatDetection => "detection",
            SectionId::ThreatPrevention => "prevention",
            SectionId::IncidentReports => "reports",
            SectionId::AdminFeedback => "feedback",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::EventLogs => "Event Logs",
            SectionId::SiemAlerts => "SIEM Alerts",
            SectionId::EventAnalysis => "Event Analysis",
            SectionId::AiReasoning => "AI Reasoning",
            SectionId::ThreatDetection => "Threat Detection",
            SectionId::ThreatPrevention => "Threat Prevention",
            SectionId::IncidentReports => "Incident Reports",
            SectionId::AdminFeedback => "Admin Feedback",
        }
    }

    /// Get keyboard shortcut number (1-8)
    pub fn shortcut_key(&self) -> char {
        match self {
            SectionId::EventLogs => '1',
            SectionId::SiemAlerts => '2',
            SectionId::EventAnalysis => '3',
            SectionId::AiReasoning => '4',
            SectionId::ThreatDetection => '5',
            SectionId::ThreatPrevention => '6',
            SectionId::IncidentReports => '7',
            SectionId::AdminFeedback => '8',
        }
    }

    /// Resolve a string id. Unknown ids resolve to the default section.
    pub fn from_id(id: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|section| section.id() == id)
            .unwrap_or_default()
    }

    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|section| section.shortcut_key() == key)
    }

    fn position(&self) -> usize {
        Self::all()
            .iter()
            .position(|section| section == self)
            .unwrap_or(0)
    }
}

/// Currently selected section
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    current: SectionId,
}

impl Navigation {
    pub fn new(initial: SectionId) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> SectionId {
        self.current
    }

    pub fn select(&mut self, section: SectionId) {
        if section != self.current {
            tracing::debug!("Navigating {} -> {}", self.current.id(), section.id());
        }
        self.current = section;
    }

    /// Move to the next section, wrapping at the end
    pub fn next(&mut self) {
        let all = SectionId::all();
        let index = (self.current.position() + 1) % all.len();
        self.select(all[index]);
    }

    /// Move to the previous section, wrapping at the start
    pub fn previous(&mut self) {
        let all = SectionId::all();
        let index = (self.current.position() + all.len() - 1) % all.len();
        self.select(all[index]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for section in SectionId::all() {
            assert_eq!(SectionId::from_id(section.id()), section);
        }
    }

    #[test]
    fn test_unknown_id_defaults_to_event_logs() {
        assert_eq!(SectionId::from_id("firewall"), SectionId::EventLogs);
        assert_eq!(SectionId::from_id(""), SectionId::EventLogs);
        assert_eq!(SectionId::from_id("LOGS"), SectionId::EventLogs);
    }

    #[test]
    fn test_section_shortcuts() {
        assert_eq!(SectionId::EventLogs.shortcut_key(), '1');
        assert_eq!(SectionId::AdminFeedback.shortcut_key(), '8');
        assert_eq!(SectionId::from_shortcut('6'), Some(SectionId::ThreatPrevention));
        assert_eq!(SectionId::from_shortcut('9'), None);
        assert_eq!(SectionId::from_shortcut('0'), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SectionId::SiemAlerts.label(), "SIEM Alerts");
        assert_eq!(SectionId::IncidentReports.label(), "Incident Reports");
    }

    #[test]
    fn test_navigation_select() {
        let mut nav = Navigation::default();
        assert_eq!(nav.current(), SectionId::EventLogs);

        nav.select(SectionId::ThreatDetection);
        assert_eq!(nav.current(), SectionId::ThreatDetection);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut nav = Navigation::new(SectionId::AdminFeedback);
        nav.next();
        assert_eq!(nav.current(), SectionId::EventLogs);

        nav.previous();
        assert_eq!(nav.current(), SectionId::AdminFeedback);

        nav.previous();
        assert_eq!(nav.current(), SectionId::IncidentReports);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut nav = Navigation::new(SectionId::EventAnalysis);
        for _ in 0..SectionId::all().len() {
            nav.next();
        }
        assert_eq!(nav.current(), SectionId::EventAnalysis);
    }
}
