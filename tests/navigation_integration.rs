//! Navigation integration tests
//!
//! Every section id must route to the panel registered for it, and ids the
//! dashboard does not know must land on the default section.

mod common;

use common::{app_on, content_heading, key, type_keys};
use crossterm::event::KeyCode;
use cyberwatch_core::{App, DashboardConfig, SectionId};

#[test]
fn test_each_section_renders_its_panel() {
    for section in SectionId::all() {
        let app = app_on(section);
        assert_eq!(app.active_panel().section(), section);
        assert!(
            content_heading(&app).contains(section.label()),
            "heading for {} should name it",
            section.id()
        );
    }
}

#[test]
fn test_section_specific_content() {
    let cases = [
        (SectionId::EventLogs, "Search logs..."),
        (SectionId::SiemAlerts, "SIEM Integration (Wazuh)"),
        (SectionId::EventAnalysis, "Session Analysis"),
        (SectionId::AiReasoning, "AI Reasoning Assistant (GPT-4)"),
        (SectionId::ThreatDetection, "Threat Detection Engine"),
        (SectionId::ThreatPrevention, "Automated Threat Prevention"),
        (SectionId::IncidentReports, "INC-2024-001247"),
        (SectionId::AdminFeedback, "Model Performance"),
    ];

    for (section, marker) in cases {
        let frame = app_on(section).snapshot(160, 50).unwrap();
        assert!(frame.contains(marker), "{} missing {:?}", section.id(), marker);
    }
}

#[test]
fn test_unknown_id_renders_default_panel() {
    let mut config = DashboardConfig::default();
    config.dashboard.initial_section = "does-not-exist".to_string();

    let app = App::new(&config);
    assert_eq!(app.current_section(), SectionId::EventLogs);
    assert_eq!(app.active_panel().section(), SectionId::EventLogs);
}

#[test]
fn test_keyboard_walk_through_all_sections() {
    let mut app = app_on(SectionId::EventLogs);
    let mut seen = vec![app.current_section()];
    for _ in 0..7 {
        app.handle_key(key(KeyCode::Tab));
        seen.push(app.current_section());
    }
    assert_eq!(seen, SectionId::all().to_vec());

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.current_section(), SectionId::EventLogs);
}

#[test]
fn test_shortcut_keys_match_sidebar_order() {
    let mut app = app_on(SectionId::EventLogs);
    for section in SectionId::all() {
        type_keys(&mut app, &section.shortcut_key().to_string());
        assert_eq!(app.current_section(), section);
    }
}
