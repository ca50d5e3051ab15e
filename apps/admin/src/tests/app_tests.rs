use super::*;
use crate::controller::events::{UiError, UiErrorContext};
use client_core::FetchError;
use crossbeam_channel::bounded;
use shared::domain::{Member, MemberId};

fn members() -> Vec<Member> {
    vec![
        Member::new(1, "Aaron Miles", "aaron@mailinator.com", "member"),
        Member::new(2, "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
        Member::new(3, "Arvind Kumar", "arvind@mailinator.com", "admin"),
    ]
}

fn loaded_app() -> AdminApp {
    let mut app = AdminApp::new(10);
    app.handle_ui_event(UiEvent::MembersLoaded {
        origin: "test".to_string(),
        members: members(),
    });
    app
}

#[test]
fn members_loaded_event_populates_table() {
    let app = loaded_app();
    assert_eq!(app.status, "Loaded 3 members from test");
    assert!(app.render().contains("Arvind Kumar"));
}

#[test]
fn fetch_error_renders_empty_table() {
    let mut app = AdminApp::new(10);
    app.handle_ui_event(UiEvent::Error(UiError::from_fetch_error(
        UiErrorContext::FetchMembers,
        &FetchError::Io {
            origin: "members.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        },
    )));

    assert!(app.loaded);
    assert_eq!(app.controller.store().len(), 0);
    let text = app.render();
    assert!(text.contains("(no members)"), "{text}");
    assert!(text.contains("Member source unreachable"), "{text}");
}

#[test]
fn wait_for_members_skips_info_events() {
    let (ui_tx, ui_rx) = bounded(4);
    ui_tx
        .send(UiEvent::Info("Backend worker starting...".to_string()))
        .expect("send info");
    ui_tx
        .send(UiEvent::MembersLoaded {
            origin: "test".to_string(),
            members: members(),
        })
        .expect("send members");

    let mut app = AdminApp::new(10);
    app.wait_for_members(&ui_rx);

    assert_eq!(app.controller.store().len(), 3);
}

#[test]
fn wait_for_members_survives_backend_exit() {
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1);
    drop(ui_tx);

    let mut app = AdminApp::new(10);
    app.wait_for_members(&ui_rx);

    assert!(app.controller.load_error().is_some());
}

#[test]
fn command_lines_drive_the_controller() {
    let mut app = loaded_app();

    for line in ["search admin", "select 3", "search", "edit 1", "set 1 role admin", "save 1"] {
        assert_eq!(app.handle_line(line), LoopControl::Continue);
    }
    assert_eq!(
        app.controller.store().get(MemberId(1)).expect("member").role,
        "admin"
    );
    assert!(app.controller.selection().contains(MemberId(3)));

    app.handle_line("delete-selected");
    assert!(!app.controller.store().contains(MemberId(3)));
    assert_eq!(app.handle_line("quit"), LoopControl::Quit);
}

#[test]
fn bad_input_sets_status_without_touching_state() {
    let mut app = loaded_app();

    app.handle_line("delete nine");
    assert_eq!(app.status, "'nine' is not a member id");

    app.handle_line("delete 9");
    assert_eq!(app.controller.store().len(), 3);
    assert!(app.render().contains("error: member 9 not found"));

    app.handle_line("help");
    assert!(app.status.starts_with("commands:"));
}
