use std::fmt;

/// Stable identifiers of the implemented checks.
///
/// The string form is what users put in configuration files and what
/// appears in brackets after a warning.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckCode {
    /// Expensive parameter copied by value where a const reference or a
    /// move would do.
    #[cfg_attr(feature = "serde", serde(rename = "performance-unnecessary-value-param"))]
    UnnecessaryValueParam,
    /// `if (p) delete p;` guard around a delete.
    #[cfg_attr(feature = "serde", serde(rename = "readability-delete-null-pointer"))]
    DeleteNullPointer,
}

impl CheckCode {
    /// Every check code, in registration order.
    pub const ALL: [CheckCode; 2] = [CheckCode::UnnecessaryValueParam, CheckCode::DeleteNullPointer];

    /// Get the check name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckCode::UnnecessaryValueParam => "performance-unnecessary-value-param",
            CheckCode::DeleteNullPointer => "readability-delete-null-pointer",
        }
    }

    /// Look up a check by its configured name.
    pub fn from_name(name: &str) -> Option<CheckCode> {
        CheckCode::ALL.into_iter().find(|code| code.as_str() == name)
    }

    /// The category prefix (`performance`, `readability`, ...).
    pub fn category(&self) -> &'static str {
        let name = self.as_str();
        name.split_once('-').map_or(name, |(category, _)| category)
    }
}

impl fmt::Display for CheckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
