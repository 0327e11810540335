pub mod aggregate;

pub use aggregate::{FormTemplatePart, UpdateFormTemplateData};
