use crate::Operator;
use std::fmt;

/// A filter name split into its normalized field key and operator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ParsedFilterName {
    /// The field key, after key formatting.
    pub field_name: String,
    pub operator: Operator,
}

impl ParsedFilterName {
    #[must_use]
    pub fn new(field_name: impl Into<String>, operator: Operator) -> Self {
        Self {
            field_name: field_name.into(),
            operator,
        }
    }
}

impl fmt::Display for ParsedFilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field_name, self.operator)
    }
}
