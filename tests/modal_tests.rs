// Host-side tests for the modal state machine and its configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}
mod modal {
    include!("../src/modal.rs");
}

use config::ModalConfig;
use modal::*;

fn cfg() -> ModalConfig {
    ModalConfig::default()
}

#[test]
fn open_click_makes_modal_visible() {
    let c = cfg();
    assert_eq!(action_for(&ModalEvent::OpenClicked, &c), ModalAction::Show);
    assert_eq!(
        next_visibility(Visibility::Hidden, &ModalEvent::OpenClicked, &c),
        Visibility::Visible
    );
}

#[test]
fn close_click_hides_modal() {
    let c = cfg();
    assert_eq!(action_for(&ModalEvent::CloseClicked, &c), ModalAction::Hide);
    assert_eq!(
        next_visibility(Visibility::Visible, &ModalEvent::CloseClicked, &c),
        Visibility::Hidden
    );
}

#[test]
fn backdrop_click_hides_modal() {
    let c = cfg();
    let ev = ModalEvent::WindowClicked { on_backdrop: true };
    assert_eq!(next_visibility(Visibility::Visible, &ev, &c), Visibility::Hidden);
}

#[test]
fn click_inside_content_keeps_modal_open() {
    let c = cfg();
    let ev = ModalEvent::WindowClicked { on_backdrop: false };
    assert_eq!(action_for(&ev, &c), ModalAction::Ignore);
    assert_eq!(next_visibility(Visibility::Visible, &ev, &c), Visibility::Visible);
    assert_eq!(next_visibility(Visibility::Hidden, &ev, &c), Visibility::Hidden);
}

#[test]
fn transitions_have_no_guards() {
    let c = cfg();
    // opening twice stays open, closing a closed modal stays closed
    assert_eq!(
        next_visibility(Visibility::Visible, &ModalEvent::OpenClicked, &c),
        Visibility::Visible
    );
    assert_eq!(
        next_visibility(Visibility::Hidden, &ModalEvent::CloseClicked, &c),
        Visibility::Hidden
    );
    assert_eq!(
        next_visibility(
            Visibility::Hidden,
            &ModalEvent::WindowClicked { on_backdrop: true },
            &c
        ),
        Visibility::Hidden
    );
}

#[test]
fn escape_hides_only_when_enabled() {
    let esc = ModalEvent::KeyPressed("Escape".to_string());
    assert_eq!(action_for(&esc, &cfg()), ModalAction::Hide);

    let off = cfg().with_close_on_escape(false);
    assert_eq!(action_for(&esc, &off), ModalAction::Ignore);
    assert_eq!(next_visibility(Visibility::Visible, &esc, &off), Visibility::Visible);
}

#[test]
fn other_keys_are_ignored() {
    let c = cfg();
    for key in ["Enter", "esc", "escape", "x", " "] {
        let ev = ModalEvent::KeyPressed(key.to_string());
        assert_eq!(action_for(&ev, &c), ModalAction::Ignore, "key {:?}", key);
    }
}

#[test]
fn a_click_sequence_folds_to_expected_state() {
    let c = cfg();
    let events = [
        ModalEvent::OpenClicked,
        ModalEvent::WindowClicked { on_backdrop: false },
        ModalEvent::WindowClicked { on_backdrop: true },
        ModalEvent::OpenClicked,
        ModalEvent::CloseClicked,
        ModalEvent::OpenClicked,
    ];
    let states: Vec<Visibility> = events
        .iter()
        .scan(Visibility::default(), |v, e| {
            *v = next_visibility(*v, e, &c);
            Some(*v)
        })
        .collect();
    assert_eq!(
        states,
        vec![
            Visibility::Visible,
            Visibility::Visible,
            Visibility::Hidden,
            Visibility::Visible,
            Visibility::Hidden,
            Visibility::Visible,
        ]
    );
}

#[test]
fn starts_hidden_and_toggles() {
    assert_eq!(Visibility::default(), Visibility::Hidden);
    assert_eq!(Visibility::Hidden.toggled(), Visibility::Visible);
    assert_eq!(Visibility::Visible.toggled(), Visibility::Hidden);
    assert!(Visibility::Visible.is_visible());
    assert!(!Visibility::Hidden.is_visible());
}

#[test]
fn display_values_decode_to_visibility() {
    let c = cfg();
    assert_eq!(Visibility::from_display("none", &c), Visibility::Hidden);
    assert_eq!(Visibility::from_display(" NONE ", &c), Visibility::Hidden);
    // no inline value: stylesheet default, which is hidden
    assert_eq!(Visibility::from_display("", &c), Visibility::Hidden);
    assert_eq!(Visibility::from_display("flex", &c), Visibility::Visible);
    assert_eq!(Visibility::from_display("block", &c), Visibility::Visible);
}

#[test]
fn config_defaults_follow_page_markup() {
    let c = cfg();
    assert_eq!(c.trigger_id, "login-btn");
    assert_eq!(c.modal_id, "login-modal");
    assert_eq!(c.close_selector, ".close-btn");
    assert_eq!(c.display_for(Visibility::Visible), "flex");
    assert_eq!(c.display_for(Visibility::Hidden), "none");
    assert!(c.close_on_escape);
    assert_eq!(c.modal_selector(), "#login-modal");
    assert_eq!(c.trigger_selector(), "#login-btn");
}

#[test]
fn config_builder_overrides_fields() {
    let c = cfg()
        .with_trigger_id("signin")
        .with_modal_id("signin-dialog")
        .with_close_selector("#signin-close")
        .with_open_display("block");
    assert_eq!(c.trigger_id, "signin");
    assert_eq!(c.modal_selector(), "#signin-dialog");
    assert_eq!(c.close_selector, "#signin-close");
    assert_eq!(c.display_for(Visibility::Visible), "block");
    // hidden value is unchanged
    assert_eq!(c.display_for(Visibility::Hidden), "none");
    assert_eq!(Visibility::from_display("block", &c), Visibility::Visible);
}
