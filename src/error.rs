use thiserror::Error;

/// Failures that can stop the controller from binding or a handler from
/// finishing its work.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    #[error("dom: {0}")]
    Dom(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid deep link: {0}")]
    DeepLink(#[from] url::ParseError),
}

impl SiteError {
    pub fn missing(selector: &str) -> Self {
        SiteError::MissingElement {
            selector: selector.to_string(),
        }
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        SiteError::Dom(msg.into())
    }
}
