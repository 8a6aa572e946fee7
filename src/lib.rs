//! Find the EditorConfig properties that apply to a file.
//!
//! ```no_run
//! let props = editorconf::find("src/main.rs")?;
//! println!("{props}");
//! if let Some(size) = props.indent_size() {
//!     println!("indent by {size}");
//! }
//! # Ok::<(), editorconf::Error>(())
//! ```
//!
//! See <https://editorconfig.org/> for the file format.

pub mod cache;
pub mod defaults;
pub mod error;
pub mod file;
pub mod parse;
pub mod pattern;
pub mod property;
pub mod query;
pub mod section;

pub use cache::{CacheEntry, DirCache};
pub use defaults::apply_defaults;
pub use error::{Error, Result};
pub use file::File;
pub use parse::parse;
pub use pattern::{Matcher, PatternError};
pub use property::{EndOfLine, IndentStyle, Property, UnknownValue, KNOWN_PROPERTIES};
pub use query::{find, Query, DEFAULT_NAME};
pub use section::Section;
