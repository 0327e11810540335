pub mod model;
pub mod state;
pub mod widget;

pub use state::{InitialRender, UploadError, UploadState};
pub use widget::FileUpload;
