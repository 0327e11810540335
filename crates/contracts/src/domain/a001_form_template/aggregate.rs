use crate::enums::DisplayWidth;
use serde::{Deserialize, Serialize};

/// Sparse patch of a form template. Only `_id` is mandatory; every other
/// field is sent only when the user is actually editing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormTemplatePart {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "displayWidth", default, skip_serializing_if = "Option::is_none")]
    pub display_width: Option<DisplayWidth>,
}

impl FormTemplatePart {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_width: None,
        }
    }

    pub fn with_display_width(mut self, width: DisplayWidth) -> Self {
        self.display_width = Some(width);
        self
    }
}

/// Payload of an `UpdateFormTemplate` message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFormTemplateData {
    #[serde(rename = "formTemplate")]
    pub form_template: FormTemplatePart,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_part_without_width_omits_field() {
        let part = FormTemplatePart::new("tpl-1");
        assert_eq!(serde_json::to_value(&part).unwrap(), json!({ "_id": "tpl-1" }));
    }

    #[test]
    fn test_part_with_width() {
        let part = FormTemplatePart::new("tpl-1").with_display_width(DisplayWidth::Large);
        assert_eq!(
            serde_json::to_value(&part).unwrap(),
            json!({ "_id": "tpl-1", "displayWidth": "l" })
        );
    }

    #[test]
    fn test_part_deserializes_without_width() {
        let part: FormTemplatePart = serde_json::from_value(json!({ "_id": "a" })).unwrap();
        assert_eq!(part, FormTemplatePart::new("a"));
    }
}
