//! EditorConfig file parsing
//!
//! Parsing is lenient: lines that cannot be understood, and keys, values or
//! section names that are too long, are skipped rather than reported.

use std::io::{self, BufRead};

use crate::file::File;
use crate::property::Property;
use crate::section::Section;

pub const MAX_KEY_LEN: usize = 50;
pub const MAX_VALUE_LEN: usize = 255;
pub const MAX_SECTION_NAME_LEN: usize = 4096;

/// Where key/value lines currently go.
enum Target {
    /// Before the first section header; only `root` is honored.
    Preamble,
    /// The last section pushed to the file.
    Section,
    /// An oversized section header; its properties are dropped.
    Ignored,
}

/// Parse an EditorConfig file.
///
/// Only read errors are reported, including invalid UTF-8.
pub fn parse<R: BufRead>(reader: R) -> io::Result<File> {
    let mut file = File::default();
    let mut target = Target::Preamble;

    for line in reader.lines() {
        let line = line?;
        let line = strip_comment(&line).trim();

        if line.is_empty() {
            continue;
        }

        if line.len() > 2 && line.starts_with('[') && line.ends_with(']') {
            let name = &line[1..line.len() - 1];
            if name.chars().count() > MAX_SECTION_NAME_LEN {
                target = Target::Ignored;
            } else {
                file.sections.push(Section::new(name));
                target = Target::Section;
            }
            continue;
        }

        let Some((key, value)) = line.split_once(['=', ':']) else {
            continue;
        };
        let prop = Property::new(key, value);
        if prop.name.chars().count() > MAX_KEY_LEN || prop.value.chars().count() > MAX_VALUE_LEN {
            continue;
        }

        match target {
            Target::Preamble => {
                if prop.name == "root" {
                    file.root = prop.value == "true";
                }
            }
            Target::Section => {
                if let Some(section) = file.sections.last_mut() {
                    section.add([prop]);
                }
            }
            Target::Ignored => {}
        }
    }

    Ok(file)
}

/// Cut the line at the first ` #` or ` ;`.
fn strip_comment(line: &str) -> &str {
    let cut = line
        .as_bytes()
        .windows(2)
        .position(|pair| pair[0] == b' ' && (pair[1] == b'#' || pair[1] == b';'));
    match cut {
        Some(i) => &line[..i],
        None => line,
    }
}
