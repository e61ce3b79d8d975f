use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::initialism::is_initialism;
use crate::split::split;

/// Output case supported by the converters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    /// snake_case
    Snake,
    /// UpperCamelCase
    UpperCamel,
    /// lowerCamelCase
    #[default]
    LowerCamel,
}

impl Case {
    /// All cases, in the order they are listed to users
    pub const ALL: [Case; 3] = [Case::Snake, Case::UpperCamel, Case::LowerCamel];

    /// Convert `s` into this case
    pub fn apply(self, s: &str) -> String {
        match self {
            Case::Snake => to_snake(s),
            Case::UpperCamel => to_upper_camel(s),
            Case::LowerCamel => to_lower_camel(s),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Case::Snake => "snake",
            Case::UpperCamel => "upper_camel",
            Case::LowerCamel => "lower_camel",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = String;

    /// Accepts the snake_case names as well as their kebab-case spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "snake" => Ok(Case::Snake),
            "upper_camel" | "pascal" => Ok(Case::UpperCamel),
            "lower_camel" | "camel" => Ok(Case::LowerCamel),
            other => Err(format!(
                "unknown case '{}', expected one of: snake, upper_camel, lower_camel",
                other
            )),
        }
    }
}

/// Convert an identifier to snake_case.
///
/// Every word is lowercased, initialisms included:
/// `"HelloHTTPSConnectionID"` → `"hello_https_connection_id"`.
/// Empty words from stray underscores are kept, so `"a__b"` stays `"a__b"`.
pub fn to_snake(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for (i, word) in split(s).into_iter().enumerate() {
        if i > 0 {
            result.push('_');
        }
        result.push_str(&word.to_lowercase());
    }

    result
}

/// Convert an identifier to camel case.
///
/// Known initialisms are written in full uppercase. With `lower_first` the
/// first word is lowercased entirely; otherwise every word only gets its
/// first character uppercased and keeps the rest as is.
pub fn to_camel(s: &str, lower_first: bool) -> String {
    let mut result = String::with_capacity(s.len());

    for (i, word) in split(s).into_iter().enumerate() {
        let lower = lower_first && i == 0;

        let upper = word.to_uppercase();
        if is_initialism(&upper) {
            if lower {
                result.push_str(&upper.to_lowercase());
            } else {
                result.push_str(&upper);
            }
            continue;
        }

        if lower {
            result.push_str(&word.to_lowercase());
            continue;
        }

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}

/// Convert an identifier to UpperCamelCase: `"project_id"` → `"ProjectID"`
pub fn to_upper_camel(s: &str) -> String {
    to_camel(s, false)
}

/// Convert an identifier to lowerCamelCase: `"project_id"` → `"projectID"`
pub fn to_lower_camel(s: &str) -> String {
    to_camel(s, true)
}
