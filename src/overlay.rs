use crate::config::ModalConfig;
use crate::constants::DISPLAY_PROPERTY;
use crate::modal::Visibility;
use web_sys as web;

/// Current visibility as encoded in the modal's inline `display` value.
#[inline]
pub fn visibility(modal: &web::HtmlElement, config: &ModalConfig) -> Visibility {
    let value = modal
        .style()
        .get_property_value(DISPLAY_PROPERTY)
        .unwrap_or_default();
    Visibility::from_display(&value, config)
}

pub fn set_visibility(modal: &web::HtmlElement, visibility: Visibility, config: &ModalConfig) {
    let display = config.display_for(visibility);
    if let Err(e) = modal.style().set_property(DISPLAY_PROPERTY, display) {
        log::warn!("[modal] failed to set display:{}: {:?}", display, e);
    }
}

#[inline]
pub fn show(modal: &web::HtmlElement, config: &ModalConfig) {
    set_visibility(modal, Visibility::Visible, config);
}

#[inline]
pub fn hide(modal: &web::HtmlElement, config: &ModalConfig) {
    set_visibility(modal, Visibility::Hidden, config);
}

#[inline]
pub fn toggle(modal: &web::HtmlElement, config: &ModalConfig) {
    let next = visibility(modal, config).toggled();
    set_visibility(modal, next, config);
}
