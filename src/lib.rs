#![cfg(target_arch = "wasm32")]
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use constants::DOCUMENT_LOADING;
use web_sys as web;

pub mod config;
pub mod constants;
mod dom;
pub mod error;
mod events;
pub mod modal;
mod overlay;

pub use config::ModalConfig;
pub use error::ModalError;
pub use modal::{action_for, next_visibility, ModalAction, ModalEvent, Visibility};

impl From<ModalError> for JsValue {
    fn from(e: ModalError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Handle to a modal on the page. Listeners bound by `mount` keep working
/// whether or not the handle is kept.
#[wasm_bindgen]
pub struct LoginModal {
    modal: web::HtmlElement,
    config: Rc<ModalConfig>,
}

#[wasm_bindgen]
impl LoginModal {
    pub fn open(&self) {
        overlay::show(&self.modal, &self.config);
    }

    pub fn close(&self) {
        overlay::hide(&self.modal, &self.config);
    }

    pub fn toggle(&self) {
        overlay::toggle(&self.modal, &self.config);
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.visibility().is_visible()
    }
}

impl LoginModal {
    pub fn visibility(&self) -> Visibility {
        overlay::visibility(&self.modal, &self.config)
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// Attach to an existing modal without binding any listener.
    pub fn attach(document: &web::Document, config: ModalConfig) -> Result<Self, ModalError> {
        let modal = dom::element_by_id(document, &config.modal_id)?;
        Ok(Self {
            modal,
            config: Rc::new(config),
        })
    }
}

/// Look up the trigger, modal and close control and bind their listeners.
///
/// All three elements must exist; otherwise nothing is bound and the missing
/// selector is reported.
pub fn mount(document: &web::Document, config: ModalConfig) -> Result<LoginModal, ModalError> {
    let window = dom::window()?;
    let trigger = dom::element_by_id(document, &config.trigger_id)?;
    let modal = dom::element_by_id(document, &config.modal_id)?;
    let close = dom::query_selector(document, &config.close_selector)?;

    let wiring = events::ModalWiring {
        modal: modal.clone(),
        config: Rc::new(config),
    };
    events::pointer::wire_pointer_handlers(&window, &trigger, &close, &wiring)?;
    if wiring.config.close_on_escape {
        events::keyboard::wire_escape(document, &wiring)?;
    }
    log::info!(
        "[modal] bound {} -> {} (close: {})",
        wiring.config.trigger_selector(),
        wiring.config.modal_selector(),
        wiring.config.close_selector
    );
    Ok(LoginModal {
        modal,
        config: wiring.config,
    })
}

#[wasm_bindgen(js_name = mountLoginModal)]
pub fn mount_login_modal(
    trigger_id: String,
    modal_id: String,
    close_selector: String,
) -> Result<LoginModal, JsValue> {
    let document = dom::window_document()?;
    let config = ModalConfig::default()
        .with_trigger_id(trigger_id)
        .with_modal_id(modal_id)
        .with_close_selector(close_selector);
    Ok(mount(&document, config)?)
}

/// Handle to the default modal, for page scripts that open it themselves.
#[wasm_bindgen(js_name = loginModal)]
pub fn login_modal() -> Result<LoginModal, JsValue> {
    let document = dom::window_document()?;
    Ok(LoginModal::attach(&document, ModalConfig::default())?)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("login-modal starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document()?;
    let ready_state = document.ready_state();
    mount_when_ready(&document, &ready_state, ModalConfig::default())?;
    Ok(())
}

/// Mount now, or on `DOMContentLoaded` while `ready_state` is `loading`.
///
/// Returns `true` when the mount was deferred. A deferred mount that fails is
/// logged, since there is no caller left to report to.
pub fn mount_when_ready(
    document: &web::Document,
    ready_state: &str,
    config: ModalConfig,
) -> Result<bool, ModalError> {
    if ready_state == DOCUMENT_LOADING {
        let doc = document.clone();
        dom::on_dom_content_loaded(document, move || {
            if let Err(e) = mount(&doc, config.clone()) {
                log::error!("init error: {:?}", e);
            }
        })?;
        return Ok(true);
    }
    mount(document, config)?;
    Ok(false)
}
