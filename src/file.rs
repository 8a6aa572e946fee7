//! A parsed EditorConfig file

use std::fmt;
use std::io::{self, BufRead};

use crate::error::Result;
use crate::section::Section;

/// An EditorConfig file: a `root` flag and its sections in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    pub root: bool,
    pub sections: Vec<Section>,
}

impl File {
    /// Parse a file from a reader. See [`crate::parse::parse`].
    pub fn parse<R: BufRead>(reader: R) -> io::Result<File> {
        crate::parse::parse(reader)
    }

    /// Parse a file already held in memory.
    pub fn parse_str(text: &str) -> File {
        // reading from a &str cannot fail
        crate::parse::parse(text.as_bytes()).unwrap_or_default()
    }

    /// The properties of this file that apply to `relative_path`.
    ///
    /// The path is relative to the directory holding the file and uses `/` as
    /// separator. When several sections set the same property, the one declared
    /// last wins. Defaults are not applied; see [`crate::Query::find`].
    pub fn filter(&self, relative_path: &str) -> Result<Section> {
        let mut result = Section::default();
        for section in self.sections.iter().rev() {
            if section.matches(relative_path)? {
                result.add(section.properties().iter().cloned());
            }
        }
        Ok(result)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root {
            writeln!(f, "root=true")?;
            writeln!(f)?;
        }
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{section}")?;
        }
        Ok(())
    }
}
