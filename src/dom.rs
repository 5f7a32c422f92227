use crate::constants::{CLICK_EVENT, DOM_CONTENT_LOADED_EVENT, KEYDOWN_EVENT};
use crate::error::ModalError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window() -> Result<web::Window, ModalError> {
    web::window().ok_or(ModalError::NoWindow)
}

#[inline]
pub fn window_document() -> Result<web::Document, ModalError> {
    window()?.document().ok_or(ModalError::NoDocument)
}

#[inline]
fn dom_error(e: JsValue) -> ModalError {
    ModalError::Dom(format!("{:?}", e))
}

pub fn element_by_id(document: &web::Document, id: &str) -> Result<web::HtmlElement, ModalError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ModalError::missing(format!("#{}", id)))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| ModalError::Dom(format!("#{} is not an HTML element", id)))
}

/// First element matching `selector`, as `querySelector` does.
pub fn query_selector(
    document: &web::Document,
    selector: &str,
) -> Result<web::HtmlElement, ModalError> {
    let el = document
        .query_selector(selector)
        .map_err(|_| ModalError::InvalidSelector {
            selector: selector.to_string(),
        })?
        .ok_or_else(|| ModalError::missing(selector))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|_| ModalError::Dom(format!("{} is not an HTML element", selector)))
}

// Listeners below live for the lifetime of the page, so their closures are leaked.

pub fn add_click_listener(
    target: &web::EventTarget,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) -> Result<(), ModalError> {
    let closure = Closure::wrap(
        Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(web::MouseEvent)>
    );
    target
        .add_event_listener_with_callback(CLICK_EVENT, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}

pub fn add_keydown_listener(
    target: &web::EventTarget,
    mut handler: impl FnMut(web::KeyboardEvent) + 'static,
) -> Result<(), ModalError> {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| handler(ev))
        as Box<dyn FnMut(web::KeyboardEvent)>);
    target
        .add_event_listener_with_callback(KEYDOWN_EVENT, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}

pub fn on_dom_content_loaded(
    document: &web::Document,
    mut handler: impl FnMut() + 'static,
) -> Result<(), ModalError> {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    document
        .add_event_listener_with_callback(DOM_CONTENT_LOADED_EVENT, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}
