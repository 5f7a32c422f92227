use super::{dispatch, ModalWiring};
use crate::dom;
use crate::error::ModalError;
use crate::modal::ModalEvent;
use web_sys as web;

/// True only when the click landed on the modal element itself (its backdrop),
/// not on any descendant.
#[inline]
pub fn is_backdrop_click(ev: &web::Event, modal: &web::HtmlElement) -> bool {
    ev.target()
        .map(|t| js_sys::Object::is(t.as_ref(), modal.as_ref()))
        .unwrap_or(false)
}

pub fn wire_open(trigger: &web::HtmlElement, w: &ModalWiring) -> Result<(), ModalError> {
    let w = w.clone();
    dom::add_click_listener(trigger, move |_ev| {
        dispatch(&w, ModalEvent::OpenClicked);
    })
}

pub fn wire_close(close: &web::HtmlElement, w: &ModalWiring) -> Result<(), ModalError> {
    let w = w.clone();
    dom::add_click_listener(close, move |_ev| {
        dispatch(&w, ModalEvent::CloseClicked);
    })
}

pub fn wire_backdrop(window: &web::Window, w: &ModalWiring) -> Result<(), ModalError> {
    let w = w.clone();
    dom::add_click_listener(window, move |ev| {
        let on_backdrop = is_backdrop_click(&ev, &w.modal);
        dispatch(&w, ModalEvent::WindowClicked { on_backdrop });
    })
}

pub fn wire_pointer_handlers(
    window: &web::Window,
    trigger: &web::HtmlElement,
    close: &web::HtmlElement,
    w: &ModalWiring,
) -> Result<(), ModalError> {
    wire_open(trigger, w)?;
    wire_close(close, w)?;
    wire_backdrop(window, w)
}
