use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring page effects into the browser.
///
/// None of these are fatal for rendering: the caller logs them and the page
/// carries on without the affected effect.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("local storage is not available")]
    NoStorage,

    #[error("unknown theme {0:?}")]
    UnknownTheme(String),

    #[error("element is not a {expected}")]
    ElementType { expected: &'static str },

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(SiteError::NoBody.to_string(), "document has no body");
        assert_eq!(
            SiteError::ElementType { expected: "HtmlElement" }.to_string(),
            "element is not a HtmlElement"
        );
        assert_eq!(
            SiteError::Dom("NotFoundError".into()).to_string(),
            "DOM call failed: NotFoundError"
        );
    }
}
