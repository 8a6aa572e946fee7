//! Sections: named groups of properties

use std::fmt;
use std::sync::OnceLock;

use crate::error::Result;
use crate::pattern::Matcher;
use crate::property::{EndOfLine, IndentStyle, Property};

/// A single EditorConfig section, applying its properties to the file names
/// matching its name.
///
/// Property names are unique within a section; see [`Section::add`].
#[derive(Debug, Clone, Default)]
pub struct Section {
    name: String,
    properties: Vec<Property>,
    matcher: OnceLock<Matcher>,
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.properties == other.properties
    }
}

impl Eq for Section {}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The section's glob. Empty for a resolved property set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the section, dropping any matcher compiled for the old name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.matcher = OnceLock::new();
    }

    /// Properties in insertion order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Add properties, dropping any whose name is already present.
    pub fn add(&mut self, properties: impl IntoIterator<Item = Property>) {
        for prop in properties {
            if self.lookup(&prop.name).is_none() {
                self.properties.push(prop);
            }
        }
    }

    /// Find a property by name.
    ///
    /// Most callers want [`Section::get`] instead.
    pub fn lookup(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|prop| prop.name == name)
    }

    /// Value of a property, or `""` if it is not set.
    pub fn get(&self, name: &str) -> &str {
        self.lookup(name).map_or("", |prop| prop.value.as_str())
    }

    /// `indent_size` as a number. `None` when unset, `tab`, or not numeric.
    pub fn indent_size(&self) -> Option<u32> {
        self.get("indent_size").parse().ok()
    }

    /// Width of a tab: `indent_size`, or `tab_width` when `indent_size=tab`.
    pub fn tab_width(&self) -> Option<u32> {
        let value = match self.get("indent_size") {
            "tab" => self.get("tab_width"),
            value => value,
        };
        value.parse().ok()
    }

    pub fn indent_style(&self) -> Option<IndentStyle> {
        self.get("indent_style").parse().ok()
    }

    pub fn end_of_line(&self) -> Option<EndOfLine> {
        self.get("end_of_line").parse().ok()
    }

    pub fn trim_trailing_whitespace(&self) -> bool {
        self.get("trim_trailing_whitespace") == "true"
    }

    pub fn insert_final_newline(&self) -> bool {
        self.get("insert_final_newline") == "true"
    }

    /// Whether `relative_path` matches this section's name.
    ///
    /// The path is relative to the directory holding the EditorConfig file and
    /// uses `/` as separator. The matcher is compiled on first use and kept.
    pub fn matches(&self, relative_path: &str) -> Result<bool> {
        let matcher = match self.matcher.get() {
            Some(matcher) => matcher,
            None => {
                let compiled = Matcher::new(&self.name)?;
                self.matcher.get_or_init(|| compiled)
            }
        };
        Ok(matcher.is_match(relative_path))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            writeln!(f, "[{}]", self.name)?;
        }
        for prop in &self.properties {
            writeln!(f, "{prop}")?;
        }
        Ok(())
    }
}
