//! Query operators recognised as filter name suffixes.

use std::{fmt, str::FromStr};

/// The error type used by [`Operator`].
#[derive(Debug, Eq, thiserror::Error, PartialEq)]
pub enum Error {
    /// The token is not one of the operator tokens.
    #[error("unknown operator '{0}'")]
    Unknown(String),
}

/// A query operator.
///
/// The declaration order is also the matching precedence: when several
/// suffixes fit a filter name, the one declared first wins. See
/// [`Operator::ALL`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Operator {
    /// `q`. Free-text search.
    #[default]
    Q,
    /// `q_int`. Free-text search over integer fields.
    QInt,
    /// `neq`
    Neq,
    /// `eq`
    Eq,
    /// `lte`
    Lte,
    /// `lt`
    Lt,
    /// `gte`
    Gte,
    /// `gt`
    Gt,
    /// `eq_any`. Equal to any of a list of values.
    EqAny,
    /// `neq_any`. Equal to none of a list of values.
    NeqAny,
    /// `boolean`
    Boolean,
    /// `inc`. Collection includes the value.
    Inc,
    /// `inc_any`. Collection includes any of the values.
    IncAny,
    /// `ninc_any`. Collection includes none of the values.
    NincAny,
    /// `custom`. Handled by the caller's own query logic.
    Custom,
}

impl Operator {
    /// Every operator, in precedence order.
    pub const ALL: [Operator; 15] = [
        Operator::Q,
        Operator::QInt,
        Operator::Neq,
        Operator::Eq,
        Operator::Lte,
        Operator::Lt,
        Operator::Gte,
        Operator::Gt,
        Operator::EqAny,
        Operator::NeqAny,
        Operator::Boolean,
        Operator::Inc,
        Operator::IncAny,
        Operator::NincAny,
        Operator::Custom,
    ];

    /// The operator used for filter names without an operator suffix.
    pub const DEFAULT: Operator = Operator::Q;

    /// Returns the operator token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Q => "q",
            Operator::QInt => "q_int",
            Operator::Neq => "neq",
            Operator::Eq => "eq",
            Operator::Lte => "lte",
            Operator::Lt => "lt",
            Operator::Gte => "gte",
            Operator::Gt => "gt",
            Operator::EqAny => "eq_any",
            Operator::NeqAny => "neq_any",
            Operator::Boolean => "boolean",
            Operator::Inc => "inc",
            Operator::IncAny => "inc_any",
            Operator::NincAny => "ninc_any",
            Operator::Custom => "custom",
        }
    }

    /// Returns the operator token with its `_` separator, as it appears at the
    /// end of a filter name.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Operator::Q => "_q",
            Operator::QInt => "_q_int",
            Operator::Neq => "_neq",
            Operator::Eq => "_eq",
            Operator::Lte => "_lte",
            Operator::Lt => "_lt",
            Operator::Gte => "_gte",
            Operator::Gt => "_gt",
            Operator::EqAny => "_eq_any",
            Operator::NeqAny => "_neq_any",
            Operator::Boolean => "_boolean",
            Operator::Inc => "_inc",
            Operator::IncAny => "_inc_any",
            Operator::NincAny => "_ninc_any",
            Operator::Custom => "_custom",
        }
    }

    /// Returns `true` for the free-text search operators.
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Operator::Q | Operator::QInt)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| Error::Unknown(s.to_string()))
    }
}
