//! Upload widget state and the submission decision

use thiserror::Error;

pub const CHOOSE_FILE_LABEL: &str = "Choose file";
pub const CHANGE_FILE_LABEL: &str = "Change file";
/// Shown in place of a file name when nothing usable is attached
pub const NO_FILE_LABEL: &str = "No file chosen";
const UPLOADED_FILE_LABEL: &str = "Uploaded file";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("File is too large ({}). Maximum size is {}.", format_size(*.size), format_size(*.max))]
    FileTooLarge { size: u64, max: u64 },
    /// The request never produced a response
    #[error("Upload failed: {0}")]
    Request(String),
    /// Message reported by the upload endpoint
    #[error("{0}")]
    Server(String),
}

/// What the user picked in the file input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

/// Outcome of a change event on the file input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPlan {
    /// Selection was cleared, nothing to do
    Skip,
    Reject(UploadError),
    /// Send `file` under `field`
    Submit { field: String, file: SelectedFile },
}

pub fn plan_upload(file: Option<SelectedFile>, field: &str, max_file_size: u64) -> UploadPlan {
    match file {
        None => UploadPlan::Skip,
        Some(file) if file.size > max_file_size => UploadPlan::Reject(UploadError::FileTooLarge {
            size: file.size,
            max: max_file_size,
        }),
        Some(file) => UploadPlan::Submit {
            field: field.to_string(),
            file,
        },
    }
}

/// Markup state rendered by the server before the widget took over
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialRender {
    pub file_name: Option<String>,
    pub file_link: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
}

/// Link to a file already stored on the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLink {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadState {
    pub button_label: &'static str,
    pub file_label: String,
    /// Previously uploaded file, if the server rendered one
    pub file_link: Option<FileLink>,
    /// Render the link as plain text instead of an anchor
    pub link_as_text: bool,
    pub errors: Vec<String>,
    pub disabled: bool,
}

impl UploadState {
    /// Take over the server-rendered markup. A page that came back with an
    /// error must not offer a clickable link to a stale upload, and its file
    /// name is replaced with the prompt.
    pub fn from_render(initial: InitialRender) -> Self {
        let has_error = initial.error.is_some();
        let file_label = match (&initial.file_name, has_error) {
            (Some(name), false) => name.clone(),
            _ => NO_FILE_LABEL.to_string(),
        };
        let button_label = if initial.file_name.is_some() && !has_error {
            CHANGE_FILE_LABEL
        } else {
            CHOOSE_FILE_LABEL
        };

        Self {
            button_label,
            file_label,
            link_as_text: has_error && initial.file_link.is_some(),
            file_link: initial.file_link.map(|href| FileLink {
                href,
                text: initial
                    .file_name
                    .clone()
                    .unwrap_or_else(|| UPLOADED_FILE_LABEL.to_string()),
            }),
            errors: initial.error.into_iter().collect(),
            disabled: initial.disabled,
        }
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn reject(&mut self, error: &UploadError) {
        self.errors = vec![error.to_string()];
    }

    pub fn apply_success(&mut self, file_name: String, file_link: Option<String>) {
        self.button_label = CHANGE_FILE_LABEL;
        self.errors.clear();
        // Without a new url any previous link points at the replaced file
        self.file_link = file_link.map(|href| FileLink {
            href,
            text: file_name.clone(),
        });
        self.link_as_text = false;
        self.file_label = file_name;
        self.disabled = false;
    }

    pub fn apply_failure(&mut self, error: &UploadError) {
        self.errors = vec![error.to_string()];
    }
}

/// Format byte counts as B, KB or MB with one decimal
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let value = bytes as f64;
    if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{} B", bytes)
    }
}
