//! Wire types shared between the landing widgets and their collaborators
//! (upload endpoint, extension background script).

pub mod domain;
pub mod enums;
pub mod shared;
