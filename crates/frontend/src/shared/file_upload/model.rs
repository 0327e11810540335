//! Upload API call

use super::state::UploadError;
use contracts::shared::upload::{UploadErrorBody, UploadReceipt};
use gloo_net::http::Request;
use web_sys::FormData;

/// POST `file` as multipart form data under `field`.
///
/// No `Content-Type` header is set: the browser adds the multipart boundary
/// itself when the body is a `FormData`.
pub async fn upload_file(url: &str, field: &str, file: web_sys::File) -> Result<UploadReceipt, UploadError> {
    let form_data = FormData::new().map_err(|e| UploadError::Request(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename(field, &file, &file.name())
        .map_err(|e| UploadError::Request(format!("{e:?}")))?;

    let response = Request::post(url)
        .body(form_data)
        .map_err(|e| UploadError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Request(e.to_string()))?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if !response.ok() {
        return Err(parse_error_body(status, &text));
    }

    Ok(parse_receipt(&text))
}

fn parse_error_body(status: u16, text: &str) -> UploadError {
    match serde_json::from_str::<UploadErrorBody>(text) {
        Ok(body) if !body.message.trim().is_empty() => UploadError::Server(body.message),
        _ => UploadError::Server(format!("HTTP {}", status)),
    }
}

/// Success bodies carry no enforced schema; anything unreadable is an empty receipt
fn parse_receipt(text: &str) -> UploadReceipt {
    serde_json::from_str(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_message() {
        assert_eq!(
            parse_error_body(422, r#"{"message":"Unsupported file type"}"#),
            UploadError::Server("Unsupported file type".to_string())
        );
    }

    #[test]
    fn test_error_body_fallback_to_status() {
        assert_eq!(
            parse_error_body(502, "<html>Bad gateway</html>"),
            UploadError::Server("HTTP 502".to_string())
        );
        assert_eq!(
            parse_error_body(400, r#"{"message":""}"#),
            UploadError::Server("HTTP 400".to_string())
        );
    }

    #[test]
    fn test_receipt_tolerates_any_body() {
        assert!(parse_receipt("").file_name.is_none());
        assert!(parse_receipt("OK").file_name.is_none());
        assert_eq!(
            parse_receipt(r#"{"fileName":"a.txt"}"#).file_name.as_deref(),
            Some("a.txt")
        );
    }
}
