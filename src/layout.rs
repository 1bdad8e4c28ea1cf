//! Defines the [`LayoutRegistry`] trait. The expander needs exactly one
//! thing from the host's layout system: the file extension of the
//! template backing a layout identifier, since that extension names the
//! output file (`news.html` vs. `news.xml`).

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// The one capability the expander requires of a layout system.
pub trait LayoutRegistry {
    /// Returns the file extension (including the leading dot, e.g.
    /// `.html`) of the template backing `layout`, or `None` if no such
    /// layout is registered.
    fn extension_of(&self, layout: &str) -> Option<&str>;
}

/// Lets hosts that already hold layouts in memory pass a plain map of
/// layout identifier to extension.
impl LayoutRegistry for HashMap<String, String> {
    fn extension_of(&self, layout: &str) -> Option<&str> {
        self.get(layout).map(|extension| extension.as_str())
    }
}

/// A [`LayoutRegistry`] backed by a directory of template files. Each
/// file registers its stem as a layout identifier and its extension as
/// that layout's extension (`category.html` registers layout `category`
/// with extension `.html`). Files without an extension are skipped,
/// since they couldn't name an output file.
pub struct TemplateDir {
    extensions: HashMap<String, String>,
}

impl TemplateDir {
    /// Walks `dir` and registers every template file found, including
    /// files in subdirectories. When two files share a stem, the one
    /// visited last wins.
    pub fn scan(dir: &Path) -> Result<TemplateDir> {
        let mut extensions = HashMap::new();
        for result in walkdir::WalkDir::new(dir) {
            let entry = result?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry
                .file_name()
                .to_str()
                .ok_or_else(|| Error::InvalidFileName(entry.path().to_owned()))?;
            if let Some(i) = file_name.rfind('.').filter(|&i| i > 0) {
                extensions.insert(file_name[..i].to_owned(), file_name[i..].to_owned());
            }
        }
        Ok(TemplateDir { extensions })
    }
}

impl LayoutRegistry for TemplateDir {
    fn extension_of(&self, layout: &str) -> Option<&str> {
        self.extensions.extension_of(layout)
    }
}

/// The result of a fallible registry-building operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error building a [`TemplateDir`] registry.
#[derive(Debug)]
pub enum Error {
    /// Returned for I/O problems while walking the template directory.
    WalkDir(walkdir::Error),

    /// Returned when a template file name isn't valid UTF-8.
    InvalidFileName(PathBuf),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::WalkDir(err) => err.fmt(f),
            Error::InvalidFileName(path) => {
                write!(f, "invalid template file name: {:?}", path)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::WalkDir(err) => Some(err),
            Error::InvalidFileName(_) => None,
        }
    }
}

impl From<walkdir::Error> for Error {
    /// Converts a [`walkdir::Error`] into an [`Error`]. It allows us to
    /// use the `?` operator while walking the template directory.
    fn from(err: walkdir::Error) -> Error {
        Error::WalkDir(err)
    }
}
