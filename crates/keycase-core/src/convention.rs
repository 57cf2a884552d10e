// Keycase Conventions
// The naming styles a key can be rewritten into

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::inflection;

/// Target naming convention for a key transform
///
/// Exactly one convention is active per transform call. The textual names
/// (`"camel_lower"`, `"dash"`, ...) are what settings files and the CLI use.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Convention {
    /// Keys are left as they are
    #[default]
    Unaltered,
    /// snake_case: `some_key`
    Underscore,
    /// UpperCamelCase: `SomeKey`
    Camel,
    /// lowerCamelCase: `someKey`
    CamelLower,
    /// dash-case: `some-key`
    Dash,
}

impl Convention {
    /// Convert a single identifier without consulting any cache
    pub fn apply(self, identifier: &str) -> String {
        match self {
            Convention::Unaltered => inflection::unaltered(identifier),
            Convention::Underscore => inflection::underscore(identifier),
            Convention::Camel => inflection::camelize(identifier),
            Convention::CamelLower => inflection::camelize_lower(identifier),
            Convention::Dash => inflection::dasherize(identifier),
        }
    }

    /// Whether this convention leaves every key untouched
    pub fn is_unaltered(self) -> bool {
        self == Convention::Unaltered
    }
}
