pub mod messaging;
pub mod upload;
