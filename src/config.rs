// Mount configuration for the modal bindings. Defaults reproduce the site's
// markup contract.

use super::constants::{
    CLOSE_BUTTON_SELECTOR, DISPLAY_HIDDEN, DISPLAY_VISIBLE, LOGIN_BUTTON_ID, LOGIN_MODAL_ID,
};
use super::modal::Visibility;

/// Selectors and display values used by one mounted modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalConfig {
    /// Id of the control that opens the modal.
    pub trigger_id: String,
    /// Id of the modal container; its own box is the backdrop.
    pub modal_id: String,
    /// CSS selector of the control that closes the modal.
    pub close_selector: String,
    /// `display` value written when the modal is shown.
    pub open_display: String,
    /// `display` value written when the modal is hidden.
    pub hidden_display: String,
    /// Whether the Escape key hides the modal.
    pub close_on_escape: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            trigger_id: LOGIN_BUTTON_ID.to_string(),
            modal_id: LOGIN_MODAL_ID.to_string(),
            close_selector: CLOSE_BUTTON_SELECTOR.to_string(),
            open_display: DISPLAY_VISIBLE.to_string(),
            hidden_display: DISPLAY_HIDDEN.to_string(),
            close_on_escape: true,
        }
    }
}

impl ModalConfig {
    pub fn with_trigger_id(mut self, id: impl Into<String>) -> Self {
        self.trigger_id = id.into();
        self
    }

    pub fn with_modal_id(mut self, id: impl Into<String>) -> Self {
        self.modal_id = id.into();
        self
    }

    pub fn with_close_selector(mut self, selector: impl Into<String>) -> Self {
        self.close_selector = selector.into();
        self
    }

    /// Use a different layout when shown, e.g. `block` or `grid`.
    pub fn with_open_display(mut self, display: impl Into<String>) -> Self {
        self.open_display = display.into();
        self
    }

    pub fn with_close_on_escape(mut self, enabled: bool) -> Self {
        self.close_on_escape = enabled;
        self
    }

    /// The `display` value that encodes `visibility`.
    #[inline]
    pub fn display_for(&self, visibility: Visibility) -> &str {
        match visibility {
            Visibility::Visible => &self.open_display,
            Visibility::Hidden => &self.hidden_display,
        }
    }

    /// Selector form of the modal id, used in error messages.
    pub fn modal_selector(&self) -> String {
        format!("#{}", self.modal_id)
    }

    pub fn trigger_selector(&self) -> String {
        format!("#{}", self.trigger_id)
    }
}
