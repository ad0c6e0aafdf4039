//! Core record types shown by the dashboard panels
//!
//! Every record is a flat display shape. Sample instances live in
//! [`crate::sample_data`]; only [`PreventionAction`] carries fields that the
//! UI mutates during a session.

use std::fmt;

/// Severity tier, ordered from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Log level of an event log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Debug,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }
}

/// Lifecycle of a prevention action
///
/// Only `Ready -> Executed` is reachable from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Ready,
    Pending,
    Executed,
}

impl ActionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ActionStatus::Ready => "Ready",
            ActionStatus::Pending => "Pending",
            ActionStatus::Executed => "Executed",
        }
    }
}

/// Estimated impact of running a prevention action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
    Low,
    None,
}

impl Impact {
    pub fn label(&self) -> &'static str {
        match self {
            Impact::High => "High",
            Impact::Medium => "Medium",
            Impact::Low => "Low",
            Impact::None => "None",
        }
    }
}

/// Incident workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentStatus {
    Active,
    Investigating,
    Resolved,
    Closed,
}

impl IncidentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IncidentStatus::Active => "Active",
            IncidentStatus::Investigating => "Investigating",
            IncidentStatus::Resolved => "Resolved",
            IncidentStatus::Closed => "Closed",
        }
    }
}

/// Analyst verdict on an AI decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    TruePositive,
    FalsePositive,
    NeedsReview,
}

impl Verdict {
    /// All verdicts in the order the form lists them
    pub fn all() -> [Verdict; 3] {
        [
            Verdict::TruePositive,
            Verdict::FalsePositive,
            Verdict::NeedsReview,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::TruePositive => "True Positive",
            Verdict::FalsePositive => "False Positive",
            Verdict::NeedsReview => "Needs Review",
        }
    }

    /// Key that picks this verdict in the feedback form
    pub fn shortcut_key(&self) -> char {
        match self {
            Verdict::TruePositive => 't',
            Verdict::FalsePositive => 'f',
            Verdict::NeedsReview => 'r',
        }
    }
}

/// Event log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: u32,
    pub timestamp: &'static str,
    pub server: &'static str,
    pub log_type: &'static str,
    pub level: LogLevel,
    pub message: &'static str,
    pub source: &'static str,
}

/// Alert as forwarded by the SIEM
#[derive(Debug, Clone, PartialEq)]
pub struct SiemAlert {
    pub id: u32,
    pub timestamp: &'static str,
    pub source_ip: &'static str,
    pub event_type: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub geo_location: &'static str,
}

/// Per-session risk card in the event analysis view
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRisk {
    pub id: u32,
    pub ip: &'static str,
    pub failed_logins: u32,
    pub binaries_executed: u32,
    pub country: &'static str,
    pub city: &'static str,
    pub last_activity: &'static str,
    pub risk_score: u8,
}

/// Failed login count for one five minute bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoginFailurePoint {
    pub time: &'static str,
    pub failures: u32,
}

/// Connection count observed on a port
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortUsage {
    pub port: &'static str,
    pub connections: u64,
    pub label: &'static str,
}

/// Reasoning record presented by the AI assistant view
#[derive(Debug, Clone, PartialEq)]
pub struct AiAnalysis {
    pub hypothesis: &'static str,
    pub confidence: u8,
    pub explanation: &'static str,
    pub recommended_actions: Vec<&'static str>,
    pub evidence_lines: Vec<&'static str>,
    pub threat_actors: Vec<&'static str>,
    pub tactics: Vec<&'static str>,
    pub severity: Severity,
}

/// One detection engine's contribution
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionEngine {
    pub name: &'static str,
    pub score: u8,
    pub status: &'static str,
    pub model: &'static str,
    pub confidence: Severity,
}

/// Weighted risk factor and whether it fired
#[derive(Debug, Clone, PartialEq)]
pub struct RiskFactor {
    pub factor: &'static str,
    pub weight: u8,
    pub triggered: bool,
}

/// Combined detection view. `overall_risk` is a literal, never derived
/// from the engines or factors.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionSummary {
    pub overall_risk: u8,
    pub ml_score: u8,
    pub llm_confidence: u8,
    pub rule_based_checks: u8,
    pub severity: Severity,
    pub detection_engines: Vec<DetectionEngine>,
    pub risk_factors: Vec<RiskFactor>,
}

/// Response action offered by the prevention engine
#[derive(Debug, Clone, PartialEq)]
pub struct PreventionAction {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub auto_execute: bool,
    pub target: &'static str,
    pub estimated_impact: Impact,
    pub status: ActionStatus,
}

/// Incident timeline line
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub timestamp: &'static str,
    pub event: &'static str,
    pub actor: &'static str,
    pub details: &'static str,
}

/// Incident report
#[derive(Debug, Clone, PartialEq)]
pub struct Incident {
    pub id: &'static str,
    pub title: &'static str,
    pub status: IncidentStatus,
    pub severity: Severity,
    pub assignee: &'static str,
    pub created: &'static str,
    pub last_updated: &'static str,
    pub summary: &'static str,
    pub confidence: u8,
    pub timeline: Vec<TimelineEntry>,
    pub evidence: Vec<&'static str>,
    pub actions_taken: Vec<&'static str>,
}

/// Alert awaiting analyst feedback
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackAlert {
    pub id: u32,
    pub timestamp: &'static str,
    pub description: &'static str,
    pub confidence: u8,
    pub ai_decision: &'static str,
}

/// Feedback already given on an alert
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    pub id: u32,
    pub timestamp: &'static str,
    pub description: &'static str,
    pub verdict: Verdict,
    pub confidence: u8,
    pub notes: &'static str,
}

/// Detection model quality figures
#[derive(Debug, Clone, PartialEq)]
pub struct ModelStats {
    pub accuracy: u8,
    pub precision: u8,
    pub recall: u8,
    pub f1_score: u8,
    pub last_training: &'static str,
    pub training_status: &'static str,
    pub next_training: &'static str,
    pub feedback_count: u32,
    pub pending_feedback: u32,
}

/// Counters in the top status bar
#[derive(Debug, Clone, PartialEq)]
pub struct TopBarStatus {
    pub system_health: &'static str,
    pub api_status: &'static str,
    pub active_threats: u32,
    pub notifications: u32,
    pub user: &'static str,
}
