//! Section name matching
//!
//! A section name is a glob. It is translated once into an anchored regular
//! expression that runs against a path relative to the directory holding the
//! EditorConfig file, always using `/` as separator.
//!
//! | Glob          | Matches                                         |
//! |---------------|-------------------------------------------------|
//! | `*`           | any run of characters except `/`                |
//! | `**`          | any run of characters, `/` included             |
//! | `?`           | exactly one character except `/`                |
//! | `[abc]`       | one character of the class (`[!abc]` negates)   |
//! | `{a,b}`       | any of the comma-separated sub-patterns         |
//! | `{n1..n2}`    | any integer between `n1` and `n2`               |
//! | `\c`          | the literal character `c`                       |

use regex::Regex;
use tracing::trace;

use crate::error::{Error, Result};

/// Numeric brace ranges are expanded into alternations; wider ranges are refused.
const RANGE_LIMIT: i128 = 10_000;

/// Reasons a glob cannot be turned into a matcher.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error(transparent)]
    Regex(#[from] regex::Error),

    #[error("numeric range {0}..{1} spans too many values")]
    RangeTooLarge(i64, i64),
}

/// A compiled section name.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile a section name.
    ///
    /// A leading `/` anchors the pattern to the EditorConfig's directory. A name
    /// without any `/` matches at any depth below it.
    pub fn new(section_name: &str) -> Result<Self> {
        let glob = match section_name.find('/') {
            Some(0) => section_name[1..].to_string(),
            Some(_) => section_name.to_string(),
            None => format!("**/{section_name}"),
        };

        let pattern_error = |source: PatternError| Error::Pattern {
            pattern: section_name.to_string(),
            source,
        };

        let mut rx = String::from("^");
        let chars: Vec<char> = glob.chars().collect();
        translate(&chars, &mut rx).map_err(pattern_error)?;
        rx.push('$');

        trace!(section = section_name, regex = %rx, "compiled section pattern");
        let regex = Regex::new(&rx).map_err(|e| pattern_error(e.into()))?;
        Ok(Self { regex })
    }

    /// Whether `relative_path` (forward slashes) matches the whole pattern.
    pub fn is_match(&self, relative_path: &str) -> bool {
        self.regex.is_match(relative_path)
    }

    /// The regular expression the glob was translated into.
    pub fn as_regex_str(&self) -> &str {
        self.regex.as_str()
    }
}

fn translate(chars: &[char], out: &mut String) -> Result<(), PatternError> {
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => match chars.get(i + 1) {
                Some(&next) => {
                    push_literal(out, next);
                    i += 2;
                    continue;
                }
                None => push_literal(out, '\\'),
            },
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    if chars.get(i + 2) == Some(&'/') {
                        // zero or more whole directories
                        out.push_str("(?:.*/)?");
                        i += 3;
                    } else {
                        out.push_str(".*");
                        i += 2;
                    }
                } else {
                    out.push_str("[^/]*");
                    i += 1;
                }
                continue;
            }
            '?' => out.push_str("[^/]"),
            '[' => match translate_class(chars, i, out) {
                Some(end) => {
                    i = end + 1;
                    continue;
                }
                None => push_literal(out, '['),
            },
            '{' => match find_closing_brace(chars, i) {
                Some(end) => {
                    translate_braces(&chars[i + 1..end], out)?;
                    i = end + 1;
                    continue;
                }
                None => push_literal(out, '{'),
            },
            c => push_literal(out, c),
        }
        i += 1;
    }
    Ok(())
}

/// Translate a `[...]` class starting at `open`, returning the index of its `]`.
///
/// Returns `None` without writing anything when the class is unterminated or
/// contains a `/`, in which case the `[` is literal.
fn translate_class(chars: &[char], open: usize, out: &mut String) -> Option<usize> {
    let mut j = open + 1;
    let negated = matches!(chars.get(j), Some('!') | Some('^'));
    if negated {
        j += 1;
    }
    let start = j;

    let end = loop {
        match chars.get(j)? {
            '\\' => j += 2,
            '/' => return None,
            ']' if j > start => break j,
            _ => j += 1,
        }
    };

    out.push('[');
    if negated {
        out.push_str("^/");
    }
    let mut k = start;
    while k < end {
        let c = chars[k];
        match c {
            '\\' if k + 1 < end => {
                push_class_literal(out, chars[k + 1]);
                k += 2;
                continue;
            }
            '-' if k > start && k + 1 < end && chars[k - 1] != '-' && chars[k + 1] != '-' => {
                out.push('-')
            }
            c => push_class_literal(out, c),
        }
        k += 1;
    }
    out.push(']');
    Some(end)
}

fn find_closing_brace(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut j = open;
    while j < chars.len() {
        match chars[j] {
            '\\' => j += 1,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
        j += 1;
    }
    None
}

fn translate_braces(inner: &[char], out: &mut String) -> Result<(), PatternError> {
    let alternatives = split_alternatives(inner);
    if alternatives.len() > 1 {
        out.push_str("(?:");
        for (n, alternative) in alternatives.iter().enumerate() {
            if n > 0 {
                out.push('|');
            }
            translate(alternative, out)?;
        }
        out.push(')');
        return Ok(());
    }

    if let Some((lo, hi)) = numeric_range(inner) {
        if i128::from(hi) - i128::from(lo) >= RANGE_LIMIT {
            return Err(PatternError::RangeTooLarge(lo, hi));
        }
        out.push_str("(?:");
        for (n, value) in (lo..=hi).enumerate() {
            if n > 0 {
                out.push('|');
            }
            out.push_str(&value.to_string());
        }
        out.push(')');
        return Ok(());
    }

    // `{single}` and `{}` have nothing to choose between
    push_literal(out, '{');
    translate(inner, out)?;
    push_literal(out, '}');
    Ok(())
}

/// Split on commas that are neither escaped nor nested in inner braces.
fn split_alternatives(inner: &[char]) -> Vec<&[char]> {
    let mut alternatives = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut j = 0;
    while j < inner.len() {
        match inner[j] {
            '\\' => j += 1,
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                alternatives.push(&inner[start..j]);
                start = j + 1;
            }
            _ => {}
        }
        j += 1;
    }
    alternatives.push(&inner[start.min(inner.len())..]);
    alternatives
}

fn numeric_range(inner: &[char]) -> Option<(i64, i64)> {
    let text: String = inner.iter().collect();
    let (lo, hi) = text.split_once("..")?;
    let lo: i64 = lo.parse().ok()?;
    let hi: i64 = hi.parse().ok()?;
    Some(if lo <= hi { (lo, hi) } else { (hi, lo) })
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

fn push_class_literal(out: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '^' | '-' | '&' | '~') {
        out.push('\\');
    }
    out.push(c);
}
