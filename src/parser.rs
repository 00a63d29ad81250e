use super::{
    Error, Result,
    key_format::{KeyFormat, ODataKeyFormat},
    operator::Operator,
};
use log::{debug, trace};

mod filter_name;

pub use filter_name::ParsedFilterName;

/// Parses `filter_name` with the default [`FilterNameParser`].
///
/// ```
/// use filter_name_parser::{Operator, parse_filter_name};
///
/// let parsed = parse_filter_name("city.name_eq").unwrap();
/// assert_eq!(parsed.field_name, "CityName");
/// assert_eq!(parsed.operator, Operator::Eq);
/// ```
///
/// # Errors
///
/// See [`FilterNameParser::parse`].
pub fn parse_filter_name(filter_name: &str) -> Result<ParsedFilterName> {
    FilterNameParser::new().parse(filter_name)
}

/// Splits the first `_<operator>` suffix, in [`Operator::ALL`] order, off the
/// end of `filter_name`. The field path is returned as is, without key
/// formatting.
#[must_use]
pub fn split_operator(filter_name: &str) -> Option<(&str, Operator)> {
    Operator::ALL.into_iter().find_map(|op| {
        filter_name
            .strip_suffix(op.suffix())
            .map(|field_name| (field_name, op))
    })
}

/// What to do with a filter name that ends in an operator token which is not
/// preceded by `_`, like `freq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum UnmatchedSuffix {
    /// Treat the whole name as a field searched with [`Operator::Q`].
    #[default]
    Search,
    /// Fail with [`Error::InvalidFilterName`].
    Reject,
}

/// Splits filter names into a field key and an [`Operator`].
#[derive(Clone, Debug, Default)]
pub struct FilterNameParser<K = ODataKeyFormat> {
    key_format: K,
    unmatched_suffix: UnmatchedSuffix,
}

impl FilterNameParser {
    /// Creates a parser using [`ODataKeyFormat`] keys.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: KeyFormat> FilterNameParser<K> {
    /// Replaces the key format applied to field names.
    #[must_use]
    pub fn with_key_format<F: KeyFormat>(self, key_format: F) -> FilterNameParser<F> {
        FilterNameParser {
            key_format,
            unmatched_suffix: self.unmatched_suffix,
        }
    }

    #[must_use]
    pub fn unmatched_suffix(mut self, policy: UnmatchedSuffix) -> Self {
        self.unmatched_suffix = policy;
        self
    }

    #[must_use]
    pub fn key_format(&self) -> &K {
        &self.key_format
    }

    /// Splits `filter_name` into a formatted field key and an operator.
    ///
    /// Names that do not end in any operator token are searched with
    /// [`Operator::Q`] over the whole name. Otherwise the first
    /// `_<operator>` suffix in [`Operator::ALL`] order is split off, so
    /// `age_neq` yields `neq` rather than `eq`.
    ///
    /// # Errors
    ///
    /// With [`UnmatchedSuffix::Reject`], a name that ends in an operator token
    /// without a `_` separator returns [`Error::InvalidFilterName`].
    pub fn parse(&self, filter_name: &str) -> Result<ParsedFilterName> {
        let ends_with_operator = Operator::ALL
            .iter()
            .any(|op| filter_name.ends_with(op.as_str()));

        if !ends_with_operator {
            trace!("filter name {filter_name:?} has no operator suffix, using search");
            return Ok(self.resolve(filter_name, Operator::DEFAULT));
        }

        if let Some((field_name, operator)) = split_operator(filter_name) {
            trace!("filter name {filter_name:?} split into {field_name:?} and {operator}");
            return Ok(self.resolve(field_name, operator));
        }

        debug!("filter name {filter_name:?} ends in an operator token without a separator");
        match self.unmatched_suffix {
            UnmatchedSuffix::Search => Ok(self.resolve(filter_name, Operator::DEFAULT)),
            UnmatchedSuffix::Reject => Err(Error::InvalidFilterName {
                name: filter_name.to_string(),
            }),
        }
    }

    fn resolve(&self, field_name: &str, operator: Operator) -> ParsedFilterName {
        ParsedFilterName {
            field_name: self.key_format.format_key(field_name),
            operator,
        }
    }
}
