//! Messages exchanged between the content script and the extension
//! background script.

use crate::domain::a001_form_template::{FormTemplatePart, UpdateFormTemplateData};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message kinds understood by the background router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    UpdateFormTemplate,
}

/// Envelope sent to the background script for a form template patch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub host: String,
    pub kind: MessageKind,
    #[serde(rename = "formTemplateId")]
    pub form_template_id: String,
    pub data: UpdateFormTemplateData,
}

impl UpdateRequest {
    pub fn update_form_template(host: impl Into<String>, part: FormTemplatePart) -> Self {
        Self {
            host: host.into(),
            kind: MessageKind::UpdateFormTemplate,
            form_template_id: part.id.clone(),
            data: UpdateFormTemplateData {
                form_template: part,
            },
        }
    }
}

/// Response of the background script.
///
/// Usually `{ ok, error? }`, but any JSON value is tolerated: whatever came
/// back is kept in `raw` so a failure can still be shown to the user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct ApiResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub raw: Value,
}

impl ApiResponse {
    /// Failure that never reached the background script
    pub fn transport_failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            ok: false,
            raw: serde_json::json!({ "ok": false, "error": message }),
            error: Some(message),
        }
    }

    /// Text to show for a failed response, `None` on success
    pub fn failure_message(&self) -> Option<String> {
        if self.ok {
            return None;
        }
        Some(
            self.error
                .clone()
                .unwrap_or_else(|| self.raw.to_string()),
        )
    }
}

impl From<Value> for ApiResponse {
    fn from(raw: Value) -> Self {
        let ok = raw.get("ok").and_then(Value::as_bool).unwrap_or(false);
        let error = raw
            .get("error")
            .and_then(Value::as_str)
            .filter(|e| !e.is_empty())
            .map(str::to_owned);
        Self { ok, error, raw }
    }
}
