//! Field key normalization.

/// Converts a raw field path into the key format of the target query system.
///
/// Implementations must be pure: the same input always yields the same key.
pub trait KeyFormat {
    fn format_key(&self, raw: &str) -> String;
}

impl<F> KeyFormat for F
where
    F: Fn(&str) -> String,
{
    fn format_key(&self, raw: &str) -> String {
        self(raw)
    }
}

/// OData-like keys: each `.`-separated segment gets an upper-case first
/// character, and the segments are joined without a separator.
///
/// `city.name` becomes `CityName`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ODataKeyFormat;

impl KeyFormat for ODataKeyFormat {
    fn format_key(&self, raw: &str) -> String {
        let mut key = String::with_capacity(raw.len());
        for segment in raw.split('.') {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                key.extend(first.to_uppercase());
                key.push_str(chars.as_str());
            }
        }
        key
    }
}

/// Leaves keys untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Verbatim;

impl KeyFormat for Verbatim {
    fn format_key(&self, raw: &str) -> String {
        raw.to_string()
    }
}
