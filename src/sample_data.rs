//! Built-in sample datasets
//!
//! Each panel takes a fresh copy at construction time, so panel state never
//! leaks between dashboard instances.

use crate::types::*;

pub fn event_logs() -> Vec<LogEntry> {
    vec![
        LogEntry {
            id: 1,
            timestamp: "2024-12-19 15:42:33",
            server: "web-01",
            log_type: "Authentication",
            level: LogLevel::Info,
            message: "Successful login from user: deepgurav2329@gmail.com",
            source: "192.168.1.105",
        },
        LogEntry {
            id: 2,
            timestamp: "2024-12-19 15:42:28",
            server: "db-02",
            log_type: "System",
            level: LogLevel::Warning,
            message: "High CPU usage detected: 89%",
            source: "192.168.1.202",
        },
        LogEntry {
            id: 3,
            timestamp: "2024-12-19 15:42:25",
            server: "web-01",
            log_type: "Authentication",
            level: LogLevel::Error,
            message: "Failed login attempt for user: admin",
            source: "10.0.0.45",
        },
        LogEntry {
            id: 4,
            timestamp: "2024-12-19 15:42:20",
            server: "app-03",
            log_type: "Application",
            level: LogLevel::Info,
            message: "Application started successfully",
            source: "192.168.1.103",
        },
        LogEntry {
            id: 5,
            timestamp: "2024-12-19 15:42:15",
            server: "fw-01",
            log_type: "Network",
            level: LogLevel::Warning,
            message: "Suspicious traffic pattern detected from external IP",
            source: "203.0.113.42",
        },
    ]
}

/// Server choices offered by the event log filter (first entry means "any")
pub const LOG_SERVERS: [&str; 5] = ["All Servers", "web-01", "db-02", "app-03", "fw-01"];

/// Type choices offered by the event log filter (first entry means "any")
pub const LOG_TYPES: [&str; 5] = [
    "All Types",
    "System",
    "Authentication",
    "Application",
    "Network",
];

pub fn siem_alerts() -> Vec<SiemAlert> {
    vec![
        SiemAlert {
            id: 1,
            timestamp: "2024-12-19 15:43:12",
            source_ip: "203.0.113.42",
            event_type: "Brute Force Attack",
            severity: Severity::High,
            description: "Multiple failed login attempts detected",
            geo_location: "India",
        },
        SiemAlert {
            id: 2,
            timestamp: "2024-12-19 15:41:55",
            source_ip: "192.168.1.105",
            event_type: "Privilege Escalation",
            severity: Severity::Medium,
            description: "Unauthorized sudo access attempt",
            geo_location: "India",
        },
        SiemAlert {
            id: 3,
            timestamp: "2024-12-19 15:40:33",
            source_ip: "10.0.0.45",
            event_type: "Malware Detection",
            severity: Severity::High,
            description: "Suspicious file execution detected",
            geo_location: "India",
        },
        SiemAlert {
            id: 4,
            timestamp: "2024-12-19 15:39:18",
            source_ip: "198.51.100.27",
            event_type: "DDoS Attempt",
            severity: Severity::Critical,
            description: "High volume of requests from single source",
            geo_location: "India",
        },
        SiemAlert {
            id: 5,
            timestamp: "2024-12-19 15:38:44",
            source_ip: "172.16.0.89",
            event_type: "Data Exfiltration",
            severity: Severity::Medium,
            description: "Unusual outbound data transfer patterns",
            geo_location: "India",
        },
    ]
}

pub fn session_risks() -> Vec<SessionRisk> {
    vec![
        SessionRisk {
            id: 1,
            ip: "203.0.113.42",
            failed_logins: 15,
            binaries_executed: 3,
            country: "India",
            city: "UP",
            last_activity: "15:43:12",
            risk_score: 95,
        },
        SessionRisk {
            id: 2,
            ip: "198.51.100.27",
            failed_logins: 8,
            binaries_executed: 0,
            country: "India",
            city: "MP",
            last_activity: "15:39:18",
            risk_score: 78,
        },
        SessionRisk {
            id: 3,
            ip: "172.16.0.89",
            failed_logins: 2,
            binaries_executed: 12,
            country: "India",
            city: "MH",
            last_activity: "15:38:44",
            risk_score: 62,
        },
    ]
}

pub fn login_failures() -> Vec<LoginFailurePoint> {
    vec![
        LoginFailurePoint { time: "15:35", failures: 2 },
        LoginFailurePoint { time: "15:40", failures: 8 },
        LoginFailurePoint { time: "15:45", failures: 15 },
        LoginFailurePoint { time: "15:50", failures: 12 },
        LoginFailurePoint { time: "15:55", failures: 6 },
        LoginFailurePoint { time: "16:00", failures: 3 },
    ]
}

pub fn port_usage() -> Vec<PortUsage> {
    vec![
        PortUsage { port: "22", connections: 45, label: "SSH" },
        PortUsage { port: "80", connections: 234, label: "HTTP" },
        PortUsage { port: "443", connections: 189, label: "HTTPS" },
        PortUsage { port: "3389", connections: 12, label: "RDP" },
        PortUsage { port: "8080", connections: 67, label: "Proxy" },
        PortUsage { port: "9999", connections: 8, label: "Unknown" },
    ]
}

pub fn ai_analysis() -> AiAnalysis {
    AiAnalysis {
        hypothesis: "A coordinated brute force attack is currently in progress from multiple IP \
            addresses, likely originating from a botnet. The attack pattern shows sophisticated \
            evasion techniques including IP rotation and timing variations to avoid simple rate \
            limiting.",
        confidence: 87,
        explanation: "The analysis reveals several concerning indicators: (1) Multiple failed \
            authentication attempts from geographically distributed IPs within a short \
            timeframe, (2) Consistent targeting of administrative accounts, (3) Use of common \
            password patterns, and (4) Correlation with known threat intelligence feeds showing \
            these IPs in previous attack campaigns.",
        recommended_actions: vec![
            "Immediately block all source IPs involved in the attack pattern",
            "Temporarily disable the targeted administrative accounts",
            "Enable additional MFA requirements for all admin logins",
            "Increase monitoring sensitivity for authentication events",
            "Review and update password policies organization-wide",
        ],
        evidence_lines: vec![
            "203.0.113.42: 15 failed logins for 'admin' account in 2 minutes",
            "198.51.100.27: 8 failed logins for 'administrator' account in 3 minutes",
            "172.16.254.100: 12 failed logins for 'root' account in 1.5 minutes",
            "Pattern match: IPs found in Emerging Threats IP reputation feed",
            "Temporal correlation: Attack timing matches known APT28 campaign patterns",
        ],
        threat_actors: vec!["APT28", "Unknown Botnet"],
        tactics: vec!["Credential Access", "Initial Access"],
        severity: Severity::High,
    }
}

pub fn detection_summary() -> DetectionSummary {
    DetectionSummary {
        overall_risk: 89,
        ml_score: 92,
        llm_confidence: 87,
        rule_based_checks: 85,
        severity: Severity::High,
        detection_engines: vec![
            DetectionEngine {
                name: "Machine Learning",
                score: 92,
                status: "Active",
                model: "Anomaly Detection v2.1",
                confidence: Severity::High,
            },
            DetectionEngine {
                name: "LLM Analysis",
                score: 87,
                status: "Active",
                model: "GPT-4 Security Assistant",
                confidence: Severity::High,
            },
            DetectionEngine {
                name: "Rule-Based",
                score: 85,
                status: "Active",
                model: "YARA + Sigma Rules",
                confidence: Severity::Medium,
            },
            DetectionEngine {
                name: "Behavioral Analysis",
                score: 78,
                status: "Active",
                model: "User Behavior Analytics",
                confidence: Severity::Medium,
            },
        ],
        risk_factors: vec![
            RiskFactor { factor: "Geographic Anomaly", weight: 25, triggered: true },
            RiskFactor { factor: "Failed Authentication", weight: 30, triggered: true },
            RiskFactor { factor: "Unusual Time Activity", weight: 15, triggered: false },
            RiskFactor { factor: "Known Bad IP", weight: 20, triggered: true },
            RiskFactor { factor: "Privilege Escalation", weight: 10, triggered: false },
        ],
    }
}

pub fn prevention_actions() -> Vec<PreventionAction> {
    vec![
        PreventionAction {
            id: 1,
            name: "Block Source IPs",
            description: "Block all traffic from identified malicious IP addresses",
            severity: Severity::High,
            auto_execute: true,
            target: "203.0.113.42, 198.51.100.27",
            estimated_impact: Impact::Low,
            status: ActionStatus::Ready,
        },
        PreventionAction {
            id: 2,
            name: "Kill Suspicious Processes",
            description: "Terminate processes showing malicious behavior patterns",
            severity: Severity::Critical,
            auto_execute: false,
            target: "PID 4521, 4522 on web-01",
            estimated_impact: Impact::Medium,
            status: ActionStatus::Pending,
        },
        PreventionAction {
            id: 3,
            name: "Quarantine Affected Host",
            description: "Isolate compromised system from network",
            severity: Severity::High,
            auto_execute: false,
            target: "web-01.company.local",
            estimated_impact: Impact::High,
            status: ActionStatus::Ready,
        },
        PreventionAction {
            id: 4,
            name: "Notify Security Team",
            description: "Send immediate alert to on-call security personnel",
            severity: Severity::Medium,
            auto_execute: true,
            target: "SOC Team, CISO",
            estimated_impact: Impact::None,
            status: ActionStatus::Executed,
        },
        PreventionAction {
            id: 5,
            name: "Disable User Accounts",
            description: "Temporarily disable compromised user accounts",
            severity: Severity::High,
            auto_execute: false,
            target: "admin, administrator",
            estimated_impact: Impact::Medium,
            status: ActionStatus::Ready,
        },
    ]
}

pub fn incident() -> Incident {
    Incident {
        id: "INC-2024-001247",
        title: "Coordinated Brute Force Attack Campaign",
        status: IncidentStatus::Active,
        severity: Severity::High,
        assignee: "Sarah Chen",
        created: "2024-12-19 15:35:42",
        last_updated: "2024-12-19 15:43:12",
        summary: "Multiple IP addresses conducting coordinated brute force attacks against \
            administrative accounts. Pattern suggests botnet involvement with sophisticated \
            evasion techniques.",
        confidence: 87,
        timeline: vec![
            TimelineEntry {
                timestamp: "15:35:42",
                event: "Initial detection triggered",
                actor: "Automated System",
                details: "Anomaly detected in authentication patterns",
            },
            TimelineEntry {
                timestamp: "15:36:15",
                event: "IP reputation check completed",
                actor: "SIEM Integration",
                details: "Source IPs found in threat intelligence feeds",
            },
            TimelineEntry {
                timestamp: "15:37:03",
                event: "AI analysis initiated",
                actor: "LLM Assistant",
                details: "GPT-4 analysis started for threat assessment",
            },
            TimelineEntry {
                timestamp: "15:38:21",
                event: "Threat confirmed",
                actor: "ML Engine",
                details: "Machine learning model confidence: 92%",
            },
            TimelineEntry {
                timestamp: "15:39:45",
                event: "Automatic IP blocking initiated",
                actor: "Prevention Engine",
                details: "Blocked 3 malicious IP addresses",
            },
            TimelineEntry {
                timestamp: "15:41:12",
                event: "Security team notified",
                actor: "Automated System",
                details: "Alert sent to SOC team and CISO",
            },
            TimelineEntry {
                timestamp: "15:43:12",
                event: "Manual investigation started",
                actor: "Sarah Chen",
                details: "Security analyst assigned to incident",
            },
        ],
        evidence: vec![
            "Failed authentication logs from multiple sources",
            "IP geolocation data showing distributed attack sources",
            "Threat intelligence correlation with known APT campaigns",
            "Network traffic analysis showing coordinated timing",
            "User account targeting patterns indicating reconnaissance",
        ],
        actions_taken: vec![
            "Blocked malicious IP addresses at firewall level",
            "Temporarily disabled targeted administrative accounts",
            "Increased monitoring sensitivity for authentication events",
            "Initiated threat intelligence sharing with partners",
            "Escalated to incident response team",
        ],
    }
}

pub fn pending_feedback() -> Vec<FeedbackAlert> {
    vec![
        FeedbackAlert {
            id: 1,
            timestamp: "2024-12-19 15:43:12",
            description: "Brute force attack from 203.0.113.42",
            confidence: 92,
            ai_decision: "Threat Detected",
        },
        FeedbackAlert {
            id: 2,
            timestamp: "2024-12-19 15:41:55",
            description: "Unusual outbound traffic pattern",
            confidence: 68,
            ai_decision: "Suspicious Activity",
        },
        FeedbackAlert {
            id: 3,
            timestamp: "2024-12-19 15:40:33",
            description: "Failed login from internal IP",
            confidence: 45,
            ai_decision: "Low Risk",
        },
    ]
}

pub fn feedback_history() -> Vec<FeedbackRecord> {
    vec![
        FeedbackRecord {
            id: 4,
            timestamp: "2024-12-19 15:38:21",
            description: "Port scan from external source",
            verdict: Verdict::TruePositive,
            confidence: 87,
            notes: "Confirmed malicious activity, good detection",
        },
        FeedbackRecord {
            id: 5,
            timestamp: "2024-12-19 15:36:14",
            description: "Large file download during off-hours",
            verdict: Verdict::FalsePositive,
            confidence: 72,
            notes: "Legitimate backup operation, update rules",
        },
        FeedbackRecord {
            id: 6,
            timestamp: "2024-12-19 15:34:05",
            description: "Multiple failed SSH attempts",
            verdict: Verdict::TruePositive,
            confidence: 94,
            notes: "Confirmed attack, excellent detection",
        },
    ]
}

pub fn model_stats() -> ModelStats {
    ModelStats {
        accuracy: 89,
        precision: 85,
        recall: 92,
        f1_score: 88,
        last_training: "2024-12-18 02:30:00",
        training_status: "Completed",
        next_training: "2024-12-25 02:30:00",
        feedback_count: 1247,
        pending_feedback: 3,
    }
}

pub fn top_bar_status() -> TopBarStatus {
    TopBarStatus {
        system_health: "Operational",
        api_status: "Connected",
        active_threats: 3,
        notifications: 7,
        user: "Security Admin",
    }
}
