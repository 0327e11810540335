//! Small helpers around `web_sys` DOM lookups

use super::config::ConfigError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum MountError {
    #[error("document is unavailable")]
    NoDocument,
    #[error("element not found: {0}")]
    ElementNotFound(String),
    #[error("element is not an HtmlElement: {0}")]
    NotHtmlElement(String),
    #[error("invalid selector {selector}: {reason}")]
    Selector { selector: String, reason: String },
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub fn document() -> Result<web_sys::Document, MountError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::NoDocument)
}

/// First element matching `selector`
pub fn query_html_element(selector: &str) -> Result<web_sys::HtmlElement, MountError> {
    document()?
        .query_selector(selector)
        .map_err(|e| MountError::Selector {
            selector: selector.to_string(),
            reason: format!("{e:?}"),
        })?
        .ok_or_else(|| MountError::ElementNotFound(selector.to_string()))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(selector.to_string()))
}

/// All elements matching `selector`, skipping non-HTML nodes
pub fn query_all_html_elements(selector: &str) -> Result<Vec<web_sys::HtmlElement>, MountError> {
    let nodes = document()?
        .query_selector_all(selector)
        .map_err(|e| MountError::Selector {
            selector: selector.to_string(),
            reason: format!("{e:?}"),
        })?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect())
}

/// Non-empty attribute value
pub fn attribute(element: &web_sys::Element, name: &str) -> Option<String> {
    element
        .get_attribute(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
