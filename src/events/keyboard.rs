use super::{dispatch, ModalWiring};
use crate::dom;
use crate::error::ModalError;
use crate::modal::ModalEvent;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &ModalWiring) {
    dispatch(w, ModalEvent::KeyPressed(ev.key()));
}

pub fn wire_escape(document: &web::Document, w: &ModalWiring) -> Result<(), ModalError> {
    let w = w.clone();
    dom::add_keydown_listener(document, move |ev| handle_global_keydown(&ev, &w))
}
