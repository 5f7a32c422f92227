pub mod keyboard;
pub mod pointer;

use crate::config::ModalConfig;
use crate::modal::{action_for, ModalAction, ModalEvent, Visibility};
use crate::overlay;
use std::rc::Rc;
use web_sys as web;

/// Handles shared by every listener of one mounted modal.
#[derive(Clone)]
pub struct ModalWiring {
    pub modal: web::HtmlElement,
    pub config: Rc<ModalConfig>,
}

/// Apply one input event to the modal and return the resulting visibility.
pub fn dispatch(w: &ModalWiring, event: ModalEvent) -> Visibility {
    let current = overlay::visibility(&w.modal, &w.config);
    let action = action_for(&event, &w.config);
    if action == ModalAction::Ignore {
        return current;
    }
    let next = current.apply(action);
    overlay::set_visibility(&w.modal, next, &w.config);
    log::info!("[modal] {:?}: {:?} -> {:?}", event, current, next);
    next
}
