use serde::Deserialize;
use serde_yaml::Value as Yaml;
use std::collections::HashMap;
use std::fmt;
use std::io::Read;

/// The fixed set of artifact kinds generated per category: a browsing
/// page and a syndication feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputType {
    Page,
    Feed,
}

impl OutputType {
    pub const ALL: [OutputType; 2] = [OutputType::Page, OutputType::Feed];

    /// The configuration key fragment for this type
    /// (`category_page_layout`, `category_feed_dir`, ...).
    pub fn key(self) -> &'static str {
        match self {
            OutputType::Page => "page",
            OutputType::Feed => "feed",
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The knobs for one [`OutputType`]. A type without a `layout` is
/// skipped by the expander; a `layout` without a `dir` is a
/// configuration error.
#[derive(Clone, Debug, Default)]
pub struct TypeConfig {
    pub layout: Option<String>,
    pub dir: Option<String>,
    pub data: HashMap<String, Yaml>,
}

/// Category page configuration, passed explicitly to the expander. No
/// process-wide state: hosts construct one per build, either directly or
/// from the site's YAML configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub page: TypeConfig,
    pub feed: TypeConfig,
    pub pretty_urls: bool,
}

// The raw site-configuration keys as they appear in the YAML file.
#[derive(Deserialize)]
struct RawConfig {
    category_page_layout: Option<String>,
    category_page_dir: Option<String>,
    #[serde(default)]
    category_page_data: HashMap<String, Yaml>,
    category_feed_layout: Option<String>,
    category_feed_dir: Option<String>,
    #[serde(default)]
    category_feed_data: HashMap<String, Yaml>,
    #[serde(default)]
    pretty_urls: bool,
}

impl Config {
    /// Returns the [`TypeConfig`] for `kind`.
    pub fn for_type(&self, kind: OutputType) -> &TypeConfig {
        match kind {
            OutputType::Page => &self.page,
            OutputType::Feed => &self.feed,
        }
    }

    /// Reads a [`Config`] out of a site configuration document. Fails if
    /// any type configures a layout without a dir, so a broken
    /// configuration stops the build instead of producing broken paths.
    pub fn from_reader<R: Read>(r: R) -> Result<Config> {
        Config::from_raw(serde_yaml::from_reader(r)?)
    }

    /// Checks that every type with a layout also has a dir. Hosts that
    /// build a [`Config`] directly can call this to fail fast; the
    /// loaders call it on every parse.
    pub fn validate(&self) -> Result<()> {
        for &kind in OutputType::ALL.iter() {
            let type_config = self.for_type(kind);
            if type_config.layout.is_some() && type_config.dir.is_none() {
                return Err(Error::MissingDir(kind));
            }
        }
        Ok(())
    }

    fn from_raw(raw: RawConfig) -> Result<Config> {
        let config = Config {
            page: TypeConfig {
                layout: raw.category_page_layout,
                dir: raw.category_page_dir,
                data: raw.category_page_data,
            },
            feed: TypeConfig {
                layout: raw.category_feed_layout,
                dir: raw.category_feed_dir,
                data: raw.category_feed_data,
            },
            pretty_urls: raw.pretty_urls,
        };
        config.validate()?;
        Ok(config)
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Config> {
        Config::from_raw(serde_yaml::from_str(s)?)
    }
}

/// The result of a fallible configuration-loading operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading or validating category configuration.
#[derive(Debug)]
pub enum Error {
    /// Returned when there was an error parsing the configuration as
    /// YAML.
    DeserializeYaml(serde_yaml::Error),

    /// Returned when `category_<type>_layout` is set but
    /// `category_<type>_dir` is not.
    MissingDir(OutputType),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DeserializeYaml(err) => err.fmt(f),
            Error::MissingDir(kind) => write!(
                f,
                "category_{}_layout is set but category_{}_dir is missing",
                kind, kind
            ),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DeserializeYaml(err) => Some(err),
            Error::MissingDir(_) => None,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts a [`serde_yaml::Error`] into an [`Error`]. It allows us
    /// to use the `?` operator for [`serde_yaml`] deserialization
    /// functions.
    fn from(err: serde_yaml::Error) -> Error {
        Error::DeserializeYaml(err)
    }
}
