//! Panel state integration tests
//!
//! Drives the stateful panels through the app's key handling, the same path
//! a user takes.

mod common;

use common::{app_on, key, type_keys};
use crossterm::event::KeyCode;
use cyberwatch_core::{sample_data, ActionStatus, SectionId, Verdict};

#[test]
fn test_execute_ready_action_changes_nothing_else() {
    let mut app = app_on(SectionId::ThreatPrevention);
    let before = app.threat_prevention().actions().to_vec();

    // Cursor starts on action 1 (Ready)
    app.handle_key(key(KeyCode::Enter));

    let after = app.threat_prevention().actions();
    for (old, new) in before.iter().zip(after) {
        if old.id == 1 {
            assert_eq!(old.status, ActionStatus::Ready);
            assert_eq!(new.status, ActionStatus::Executed);
            assert_eq!(new.auto_execute, old.auto_execute);
            assert_eq!(new.name, old.name);
        } else {
            assert_eq!(new, old);
        }
    }
    assert!(app.threat_prevention().is_auto_mode());
}

#[test]
fn test_execute_pending_action_is_noop() {
    let mut app = app_on(SectionId::ThreatPrevention);
    let before = app.threat_prevention().actions().to_vec();

    app.handle_key(key(KeyCode::Down)); // action 2, Pending
    type_keys(&mut app, "x");

    assert_eq!(app.threat_prevention().actions(), before.as_slice());
}

#[test]
fn test_manual_mode_still_executes() {
    let mut app = app_on(SectionId::ThreatPrevention);
    type_keys(&mut app, "m");
    assert!(!app.threat_prevention().is_auto_mode());

    type_keys(&mut app, "x");
    assert_eq!(
        app.threat_prevention().action(1).map(|a| a.status),
        Some(ActionStatus::Executed)
    );
}

#[test]
fn test_feedback_submit_keeps_remaining_order() {
    let mut app = app_on(SectionId::AdminFeedback);

    app.handle_key(key(KeyCode::Enter)); // select id 1
    assert_eq!(app.admin_feedback().selected(), Some(1));

    type_keys(&mut app, "t");
    assert_eq!(app.admin_feedback().verdict(), Some(Verdict::TruePositive));
    assert!(app.admin_feedback().submit_enabled());

    type_keys(&mut app, "s");
    assert_eq!(app.admin_feedback().pending_ids(), vec![2, 3]);
    assert_eq!(app.admin_feedback().selected(), None);
    assert!(!app.admin_feedback().submit_enabled());
}

#[test]
fn test_feedback_submit_disabled_for_every_selection_without_verdict() {
    for index in 0..sample_data::pending_feedback().len() {
        let mut app = app_on(SectionId::AdminFeedback);
        for _ in 0..index {
            app.handle_key(key(KeyCode::Down));
        }
        app.handle_key(key(KeyCode::Enter));
        assert!(app.admin_feedback().selected().is_some());
        assert!(!app.admin_feedback().submit_enabled());

        type_keys(&mut app, "s");
        assert_eq!(app.admin_feedback().pending_ids(), vec![1, 2, 3]);
    }
}

#[test]
fn test_feedback_notes_capture_global_keys() {
    let mut app = app_on(SectionId::AdminFeedback);
    app.handle_key(key(KeyCode::Enter));
    type_keys(&mut app, "n");
    assert!(app.active_panel().captures_input());

    // Digits and 'q' are note text while editing
    type_keys(&mut app, "q1");
    assert_eq!(app.current_section(), SectionId::AdminFeedback);
    assert_eq!(app.admin_feedback().notes(), "q1");

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.active_panel().captures_input());
    assert!(app.handle_key(key(KeyCode::Char('q'))));
}

#[test]
fn test_log_controls_never_change_the_list() {
    let mut app = app_on(SectionId::EventLogs);
    let expected = sample_data::event_logs();

    type_keys(&mut app, " sst/");
    type_keys(&mut app, "ssh");
    app.handle_key(key(KeyCode::Enter));

    let logs = app.event_logs();
    assert!(!logs.is_streaming());
    assert_eq!(logs.server_filter(), "db-02");
    assert_eq!(logs.type_filter(), "System");
    assert_eq!(logs.search(), "ssh");
    assert_eq!(logs.visible_entries(), expected.as_slice());
}
