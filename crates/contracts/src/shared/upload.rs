use serde::{Deserialize, Serialize};

/// Error body returned by the upload endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadErrorBody {
    pub message: String,
}

/// Optional success body of the upload endpoint. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
