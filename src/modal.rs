// Visibility state machine for the login modal. Pure Rust so it can be
// exercised on the host; the DOM side lives in `overlay` and `events`.

use super::config::ModalConfig;
use super::constants::ESCAPE_KEY;

/// Whether the modal is on screen. The DOM `display` value is the only store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Input the bindings translate browser events into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    OpenClicked,
    CloseClicked,
    /// Any click that bubbled to the window. `on_backdrop` is true only when the
    /// click target is the modal element itself, not something inside it.
    WindowClicked { on_backdrop: bool },
    KeyPressed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Show,
    Hide,
    Ignore,
}

impl Visibility {
    #[inline]
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }

    /// No guards: showing a visible modal keeps it visible, and so on.
    #[inline]
    pub fn apply(self, action: ModalAction) -> Visibility {
        match action {
            ModalAction::Show => Visibility::Visible,
            ModalAction::Hide => Visibility::Hidden,
            ModalAction::Ignore => self,
        }
    }

    #[inline]
    pub fn toggled(self) -> Visibility {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }

    /// Decode an inline `display` value. An empty value means the stylesheet
    /// decides, and the site's stylesheet starts the modal hidden.
    pub fn from_display(value: &str, config: &ModalConfig) -> Visibility {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(config.hidden_display.trim()) {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }
}

/// Map an input event to what should happen to the modal.
pub fn action_for(event: &ModalEvent, config: &ModalConfig) -> ModalAction {
    match event {
        ModalEvent::OpenClicked => ModalAction::Show,
        ModalEvent::CloseClicked => ModalAction::Hide,
        ModalEvent::WindowClicked { on_backdrop: true } => ModalAction::Hide,
        ModalEvent::WindowClicked { on_backdrop: false } => ModalAction::Ignore,
        ModalEvent::KeyPressed(key) if config.close_on_escape && key == ESCAPE_KEY => {
            ModalAction::Hide
        }
        ModalEvent::KeyPressed(_) => ModalAction::Ignore,
    }
}

/// Fold an event into the current visibility.
#[inline]
pub fn next_visibility(current: Visibility, event: &ModalEvent, config: &ModalConfig) -> Visibility {
    current.apply(action_for(event, config))
}
