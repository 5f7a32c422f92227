/// DOM contract between the page markup and the modal bindings.
///
/// The page owns these elements; the bindings only look them up and write the
/// modal's `display` style property.
// Element ids
pub const LOGIN_BUTTON_ID: &str = "login-btn";
pub const LOGIN_MODAL_ID: &str = "login-modal";

// Close control is matched by class, not id
pub const CLOSE_BUTTON_SELECTOR: &str = ".close-btn";

// Values written to `style.display`
pub const DISPLAY_VISIBLE: &str = "flex";
pub const DISPLAY_HIDDEN: &str = "none";

// Style property the visibility is encoded in
pub const DISPLAY_PROPERTY: &str = "display";

pub const ESCAPE_KEY: &str = "Escape";

// Event names
pub const CLICK_EVENT: &str = "click";
pub const KEYDOWN_EVENT: &str = "keydown";
pub const DOM_CONTENT_LOADED_EVENT: &str = "DOMContentLoaded";

// `document.readyState` before DOMContentLoaded
pub const DOCUMENT_LOADING: &str = "loading";
