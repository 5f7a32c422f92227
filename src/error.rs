use thiserror::Error;

/// Failures while attaching the modal bindings to a page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModalError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing {selector}")]
    MissingElement { selector: String },
    #[error("invalid selector {selector}")]
    InvalidSelector { selector: String },
    #[error("dom error: {0}")]
    Dom(String),
}

impl ModalError {
    pub fn missing(selector: impl Into<String>) -> Self {
        ModalError::MissingElement {
            selector: selector.into(),
        }
    }
}
