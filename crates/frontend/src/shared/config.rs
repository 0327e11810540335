//! Widget configuration
//!
//! Each widget reads an optional JSON document from a `data-*` attribute of
//! its host element. Fields missing from that document fall back to the
//! `Default` impls below.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Attribute holding the upload widget configuration
pub const UPLOAD_CONFIG_ATTR: &str = "data-upload-config";
/// Attribute holding the display width editor configuration
pub const EDITOR_CONFIG_ATTR: &str = "data-editor-config";

const DEFAULT_LAYOUT_SELECTOR: &str = "#task-landing .row > div:first-child";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid widget configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UploadConfig {
    /// Endpoint receiving the multipart POST
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    /// Multipart field name the file is sent under
    #[serde(rename = "fileIdKey")]
    pub file_id_key: String,
    /// Largest accepted file, in bytes
    #[serde(rename = "maxFileSize")]
    pub max_file_size: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// CSS selector of the layout column whose class follows the width
    #[serde(rename = "layoutSelector")]
    pub layout_selector: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            file_url: "/upload".to_string(),
            file_id_key: "file".to_string(),
            max_file_size: 10 * 1024 * 1024,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            layout_selector: DEFAULT_LAYOUT_SELECTOR.to_string(),
        }
    }
}

impl UploadConfig {
    /// Parse the attribute value, if any, on top of the defaults
    pub fn from_attribute(value: Option<&str>) -> Result<Self, ConfigError> {
        parse_or_default(value)
    }
}

impl EditorConfig {
    pub fn from_attribute(value: Option<&str>) -> Result<Self, ConfigError> {
        parse_or_default(value)
    }
}

fn parse_or_default<T>(value: Option<&str>) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    match value.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => Ok(serde_json::from_str(raw)?),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = UploadConfig::from_attribute(None).unwrap();
        assert_eq!(config, UploadConfig::default());
        assert_eq!(config.max_file_size, 10485760);

        let config = EditorConfig::from_attribute(None).unwrap();
        assert_eq!(config.layout_selector, "#task-landing .row > div:first-child");
    }

    #[test]
    fn test_empty_document_equals_defaults() {
        assert_eq!(UploadConfig::from_attribute(Some("{}")).unwrap(), UploadConfig::default());
        assert_eq!(EditorConfig::from_attribute(Some("{}")).unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            UploadConfig::from_attribute(Some(r#"{"maxFileSize": 2048, "fileIdKey": "attachment"}"#))
                .unwrap();
        assert_eq!(config.max_file_size, 2048);
        assert_eq!(config.file_id_key, "attachment");
        assert_eq!(config.file_url, "/upload");
    }

    #[test]
    fn test_selector_override() {
        let config =
            EditorConfig::from_attribute(Some(r##"{"layoutSelector": "#main > .col"}"##)).unwrap();
        assert_eq!(config.layout_selector, "#main > .col");
    }

    #[test]
    fn test_blank_attribute_is_ignored() {
        let config = UploadConfig::from_attribute(Some("   ")).unwrap();
        assert_eq!(config, UploadConfig::default());
    }

    #[test]
    fn test_invalid_attribute_is_an_error() {
        assert!(UploadConfig::from_attribute(Some("{not json")).is_err());
        assert!(UploadConfig::from_attribute(Some(r#"{"maxFileSize": "big"}"#)).is_err());
        assert!(EditorConfig::from_attribute(Some("42")).is_err());
    }
}
