use serde::{Deserialize, Serialize};

/// Width of the task landing page content column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayWidth {
    /// No explicit choice, rendered like `Medium`
    #[default]
    #[serde(rename = "")]
    Default,
    #[serde(rename = "m")]
    Medium,
    #[serde(rename = "l")]
    Large,
    #[serde(rename = "xl")]
    ExtraLarge,
}

impl DisplayWidth {
    /// Value as stored on the form template
    pub fn code(&self) -> &'static str {
        match self {
            DisplayWidth::Default => "",
            DisplayWidth::Medium => "m",
            DisplayWidth::Large => "l",
            DisplayWidth::ExtraLarge => "xl",
        }
    }

    /// Label shown in the width selector
    pub fn display_name(&self) -> &'static str {
        match self {
            DisplayWidth::Default => "Default",
            DisplayWidth::Medium => "Medium",
            DisplayWidth::Large => "Large",
            DisplayWidth::ExtraLarge => "Extra large",
        }
    }

    pub fn all() -> Vec<DisplayWidth> {
        vec![
            DisplayWidth::Default,
            DisplayWidth::Medium,
            DisplayWidth::Large,
            DisplayWidth::ExtraLarge,
        ]
    }

    /// Parse a stored value. Anything outside the four codes is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "" => Some(DisplayWidth::Default),
            "m" => Some(DisplayWidth::Medium),
            "l" => Some(DisplayWidth::Large),
            "xl" => Some(DisplayWidth::ExtraLarge),
            _ => None,
        }
    }
}

impl std::fmt::Display for DisplayWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
