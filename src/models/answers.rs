use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashMap;

/// Number of questions in the Quick Peek quiz
pub const QUICK_ANSWER_COUNT: usize = 6;

/// Positions of the Quick Peek axes in the answer sequence
pub mod quick_axis {
    pub const FEELING: usize = 0;
    pub const STORY: usize = 1;
    pub const PACE: usize = 2;
    pub const FAMILIARITY: usize = 3;
    pub const ACCLAIM: usize = 4;
    pub const RESTRICTIONS: usize = 5;
}

/// Deep Down responses keyed by conversation step
pub type DeepResponses = HashMap<String, ResponseValue>;

/// A single Deep Down answer
///
/// Multi-select steps (e.g. themes) arrive as arrays; everything else is
/// free text. Matching always operates on the flattened text form.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ResponseValue {
    Text(String),
    Many(Vec<String>),
}

impl ResponseValue {
    /// Flattens the value to matchable text; selections join with commas
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            ResponseValue::Text(text) => Cow::Borrowed(text),
            ResponseValue::Many(items) => Cow::Owned(items.join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_value_passes_through() {
        let value = ResponseValue::Text("feeling great".to_string());
        assert_eq!(value.as_text(), "feeling great");
    }

    #[test]
    fn test_multi_select_joins_with_commas() {
        let value = ResponseValue::Many(vec![
            "redemption".to_string(),
            "transformation".to_string(),
        ]);
        assert_eq!(value.as_text(), "redemption,transformation");
    }

    #[test]
    fn test_deserializes_both_shapes() {
        let responses: DeepResponses = serde_json::from_str(
            r#"{"welcome": "stressed", "themes": ["adventure", "identity"]}"#,
        )
        .unwrap();
        assert_eq!(
            responses["welcome"],
            ResponseValue::Text("stressed".to_string())
        );
        assert_eq!(
            responses["themes"],
            ResponseValue::Many(vec!["adventure".to_string(), "identity".to_string()])
        );
    }
}
