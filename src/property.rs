//! Properties and the values EditorConfig knows about

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Keys whose values are case-insensitive and therefore stored lowercase.
pub const KNOWN_PROPERTIES: &[&str] = &[
    "root",
    "indent_style",
    "indent_size",
    "tab_width",
    "end_of_line",
    "charset",
    "trim_trailing_whitespace",
    "insert_final_newline",
];

/// A single `name=value` pair.
///
/// The name is always lowercase. Values of [`KNOWN_PROPERTIES`] are lowercase
/// too; other values keep their original case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    /// Build a property, normalizing case the same way the parser does.
    pub fn new(name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim().to_lowercase();
        let value = normalize_value(&name, value.as_ref().trim());
        Self { name, value }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Lowercase `value` if `name` is one of the known properties.
pub fn normalize_value(name: &str, value: &str) -> String {
    if KNOWN_PROPERTIES.contains(&name) {
        value.to_lowercase()
    } else {
        value.to_string()
    }
}

/// Error returned when a property value is not one of the accepted spellings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized value {0:?}")]
pub struct UnknownValue(pub String);

/// Value of `indent_style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    Tab,
    Space,
}

impl FromStr for IndentStyle {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" => Ok(IndentStyle::Tab),
            "space" => Ok(IndentStyle::Space),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IndentStyle::Tab => "tab",
            IndentStyle::Space => "space",
        })
    }
}

/// Value of `end_of_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    Lf,
    Crlf,
    Cr,
}

impl EndOfLine {
    /// The line terminator this value stands for.
    pub fn as_str(&self) -> &'static str {
        match self {
            EndOfLine::Lf => "\n",
            EndOfLine::Crlf => "\r\n",
            EndOfLine::Cr => "\r",
        }
    }
}

impl FromStr for EndOfLine {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lf" => Ok(EndOfLine::Lf),
            "crlf" => Ok(EndOfLine::Crlf),
            "cr" => Ok(EndOfLine::Cr),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

impl fmt::Display for EndOfLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EndOfLine::Lf => "lf",
            EndOfLine::Crlf => "crlf",
            EndOfLine::Cr => "cr",
        })
    }
}
