//! Runtime feature detection for the enhanced upload flow

use wasm_bindgen::JsValue;

/// Browser capabilities the upload widget depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub file: bool,
    pub file_list: bool,
    pub form_data: bool,
}

impl Capabilities {
    /// Query the global object once. Without a window nothing is supported.
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let has = |name: &str| js_sys::Reflect::has(&window, &JsValue::from_str(name)).unwrap_or(false);
        Self {
            file: has("File"),
            file_list: has("FileList"),
            form_data: has("FormData"),
        }
    }

    /// File selection, file lists and multipart bodies are all required
    pub fn supports_enhanced_upload(&self) -> bool {
        self.file && self.file_list && self.form_data
    }
}
