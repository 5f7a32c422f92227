// Host-side tests for mount error messages.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod error {
    include!("../src/error.rs");
}

use error::ModalError;

#[test]
fn missing_element_names_the_selector() {
    let e = ModalError::missing("#login-btn");
    assert_eq!(
        e,
        ModalError::MissingElement {
            selector: "#login-btn".to_string()
        }
    );
    assert_eq!(e.to_string(), "missing #login-btn");
}

#[test]
fn messages_are_short_and_specific() {
    assert_eq!(ModalError::NoWindow.to_string(), "no window");
    assert_eq!(ModalError::NoDocument.to_string(), "no document");
    assert_eq!(
        ModalError::InvalidSelector {
            selector: "[[".to_string()
        }
        .to_string(),
        "invalid selector [["
    );
    assert_eq!(
        ModalError::Dom("JsValue(TypeError)".to_string()).to_string(),
        "dom error: JsValue(TypeError)"
    );
}

#[test]
fn converts_into_anyhow() {
    let e: anyhow::Error = ModalError::missing(".close-btn").into();
    assert_eq!(e.to_string(), "missing .close-btn");
    assert!(e.downcast_ref::<ModalError>().is_some());
}
