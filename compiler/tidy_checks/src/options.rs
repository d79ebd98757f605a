//! Check options.
//!
//! Options are flat string pairs keyed `"<check-name>.<Option>"`, the way
//! they appear in a configuration file:
//!
//! ```text
//! performance-unnecessary-value-param.IncludeStyle: google
//! ```
//!
//! Checks read their options when constructed and write the effective
//! values back through [`Check::store_options`](crate::Check::store_options).

use std::collections::BTreeMap;

use thiserror::Error;

/// Configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionError {
    /// A check name that no registered check answers to.
    #[error("unknown check `{0}`")]
    UnknownCheck(String),
    /// A value outside the option's accepted set.
    #[error("invalid value `{value}` for option `{option}`")]
    InvalidValue { option: String, value: String },
    /// A configuration line without a `key: value` shape.
    #[error("malformed option line {line}: `{text}`")]
    Malformed { line: usize, text: String },
}

/// String options for all checks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    values: BTreeMap<String, String>,
}

impl CheckOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        CheckOptions::default()
    }

    /// Parse `key: value` lines. Blank lines and lines starting with `#`
    /// are skipped.
    ///
    /// # Errors
    /// Returns [`OptionError::Malformed`] for a line without a `:` or with
    /// an empty key.
    pub fn parse(text: &str) -> Result<Self, OptionError> {
        let mut options = CheckOptions::new();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let malformed = || OptionError::Malformed {
                line: i + 1,
                text: line.to_owned(),
            };
            let (key, value) = line.split_once(':').ok_or_else(malformed)?;
            let key = key.trim();
            if key.is_empty() {
                return Err(malformed());
            }
            options.values.insert(key.to_owned(), value.trim().to_owned());
        }
        Ok(options)
    }

    fn key(check: &str, option: &str) -> String {
        format!("{check}.{option}")
    }

    /// Look up `option` of `check`.
    pub fn get(&self, check: &str, option: &str) -> Option<&str> {
        self.values.get(&Self::key(check, option)).map(String::as_str)
    }

    /// Look up `option` of `check`, falling back to `default`.
    pub fn get_or<'a>(&'a self, check: &str, option: &str, default: &'a str) -> &'a str {
        self.get(check, option).unwrap_or(default)
    }

    /// Set `option` of `check`, replacing any previous value.
    pub fn store(&mut self, check: &str, option: &str, value: impl Into<String>) {
        self.values.insert(Self::key(check, option), value.into());
    }

    /// All options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests;
