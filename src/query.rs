//! Resolving the properties that apply to a file on disk

use std::env;
use std::fs;
use std::io::{self, BufReader};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, DirCache};
use crate::defaults::apply_defaults;
use crate::error::{Error, Result};
use crate::parse::parse;
use crate::section::Section;

/// File name searched for in each directory unless configured otherwise.
pub const DEFAULT_NAME: &str = ".editorconfig";

/// Resolve the properties for `name` with the default [`Query`].
pub fn find(name: impl AsRef<Path>) -> Result<Section> {
    Query::default().find(name)
}

/// Controls how EditorConfig files are found and applied.
#[derive(Debug, Clone)]
pub struct Query {
    config_name: String,
    version: Option<String>,
    cache: Option<Arc<DirCache>>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            config_name: DEFAULT_NAME.to_string(),
            version: None,
            cache: None,
        }
    }
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// File name to look for in each directory. Empty means [`DEFAULT_NAME`].
    pub fn with_config_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.config_name = if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name
        };
        self
    }

    /// EditorConfig spec version to emulate. Empty means the latest.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.version = (!version.is_empty()).then_some(version);
        self
    }

    /// Share parsed files between queries.
    pub fn with_cache(mut self, cache: Arc<DirCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn config_name(&self) -> &str {
        &self.config_name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn cache(&self) -> Option<&Arc<DirCache>> {
        self.cache.as_ref()
    }

    /// The properties that apply to the file `name`, defaults included.
    ///
    /// `name` need not exist and may be relative to the current directory.
    /// EditorConfig files are read from every ancestor directory up to the
    /// filesystem root or the first file declaring `root=true`. Properties
    /// from closer directories take precedence.
    pub fn find(&self, name: impl AsRef<Path>) -> Result<Section> {
        let path = absolute(name.as_ref())?;
        let mut result = Section::default();

        let mut dir = path.parent();
        while let Some(current) = dir {
            dir = current.parent();

            let entry = self.load(current)?;
            let Some(file) = entry.file() else {
                continue;
            };

            let Some(relative) = relative_path(&path, current) else {
                continue;
            };
            result.add(file.filter(&relative)?.properties().iter().cloned());

            if file.root {
                debug!(dir = %current.display(), "stopping at root editorconfig");
                break;
            }
        }

        apply_defaults(&mut result, self.version());
        Ok(result)
    }

    fn load(&self, dir: &Path) -> Result<CacheEntry> {
        match &self.cache {
            Some(cache) => cache.get_or_load(dir, || self.read_config(dir)),
            None => self.read_config(dir),
        }
    }

    fn read_config(&self, dir: &Path) -> Result<CacheEntry> {
        let path = dir.join(&self.config_name);
        let handle = match fs::File::open(&path) {
            Ok(handle) => handle,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                trace!(path = %path.display(), "no editorconfig");
                return Ok(CacheEntry::Missing);
            }
            Err(source) => return Err(Error::Io { path, source }),
        };

        let file = match parse(BufReader::new(handle)) {
            Ok(file) => file,
            Err(source) => return Err(Error::Io { path, source }),
        };
        debug!(
            path = %path.display(),
            sections = file.sections.len(),
            root = file.root,
            "parsed editorconfig"
        );
        Ok(CacheEntry::Present(Arc::new(file)))
    }
}

/// Make `path` absolute against the current directory and drop `.` and `..`.
fn absolute(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|source| Error::AbsolutePath {
            path: path.to_path_buf(),
            source,
        })?;
        cwd.join(path)
    };
    Ok(clean(&joined))
}

fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

/// `path` relative to `dir`, joined with `/` whatever the platform separator.
fn relative_path(path: &Path, dir: &Path) -> Option<String> {
    let relative = path.strip_prefix(dir).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}
