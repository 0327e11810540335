//! Live layout column that follows the display width

use crate::shared::dom::{query_html_element, MountError};

pub const TWO_THIRDS_CLASS: &str = "col-md-8";
pub const THREE_QUARTERS_CLASS: &str = "col-md-9";
pub const FULL_WIDTH_CLASS: &str = "col-md-12";

/// Grid class for a stored width value; unknown values map to nothing
pub fn layout_class(width: &str) -> Option<&'static str> {
    match width {
        "" | "m" => Some(TWO_THIRDS_CLASS),
        "l" => Some(THREE_QUARTERS_CLASS),
        "xl" => Some(FULL_WIDTH_CLASS),
        _ => None,
    }
}

/// Replace the single class of the layout column
pub fn apply_layout_class(selector: &str, class: &str) -> Result<(), MountError> {
    let element = query_html_element(selector)?;
    element.set_class_name(class);
    Ok(())
}
