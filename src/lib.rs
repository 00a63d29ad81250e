//! Parser for compound filter names such as `city.name_eq`.
//!
//! A filter name is a field path followed by an optional operator suffix. The
//! parser splits the two apart and normalizes the field path into the key
//! format expected by the query layer.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]

pub mod key_format;
pub mod operator;
pub mod parser;

pub use self::{
    key_format::{KeyFormat, ODataKeyFormat, Verbatim},
    operator::Operator,
    parser::{FilterNameParser, ParsedFilterName, UnmatchedSuffix, parse_filter_name},
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The name ends in an operator token, but no `_<operator>` suffix could
    /// be split off it.
    #[error(
        "invalid filter name '{name}': operator suffix detected but no field name and operator could be split"
    )]
    InvalidFilterName { name: String },

    /// An operator token was not recognised.
    #[error(transparent)]
    Operator(#[from] operator::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
