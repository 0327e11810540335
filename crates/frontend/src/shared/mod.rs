pub mod capabilities;
pub mod components;
pub mod config;
pub mod dom;
pub mod file_upload;
