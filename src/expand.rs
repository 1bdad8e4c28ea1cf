//! The category page expander. Takes a site's category→posts mapping and
//! fans it out into [`PageDescriptor`]s, one per (category, output type)
//! pair whose layout is configured. Rendering the descriptors is the
//! host's job; this module only decides what pages exist, where they go,
//! and what data they carry.

use crate::config::{Config, OutputType, TypeConfig};
use crate::layout::LayoutRegistry;
use crate::post::{sort_newest_first, Post};
use crate::slug::slugify;
use crate::value;
use gtmpl::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The data payload attached to a [`PageDescriptor`], mapping template
/// variable names to values. Ordered, so that descriptor sequences are
/// reproducible run to run.
pub type Payload = BTreeMap<String, Value>;

/// An optional callback for naming a category's pages. It receives the
/// assembled payload and returns a display name; `None` or an empty
/// result falls back to the category identifier. The name is slugified
/// either way.
pub type Namer<'a> = &'a dyn Fn(&Payload) -> Option<String>;

/// Describes one page for the host to render: where it goes, which
/// layout renders it, and the data it carries. Descriptors are created
/// fresh per build and never mutated afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct PageDescriptor {
    /// The target directory. Always starts with `/`, relative to the
    /// site's output root.
    pub dir: String,

    /// The target file name (`index.html` in pretty mode, `<slug>.html`
    /// otherwise, modulo the layout's extension).
    pub name: String,

    /// The identifier of the layout that renders the page.
    pub layout: String,

    /// The page's content body. Empty unless the type's extra data
    /// carried a `content` entry.
    pub content: String,

    /// The template payload: at least `layout`, `posts` (newest first),
    /// and `category`, plus the type's extra static data.
    pub data: Payload,
}

impl PageDescriptor {
    /// The descriptor's full target path (`{dir}/{name}`).
    pub fn path(&self) -> String {
        format!("{}/{}", self.dir, self.name)
    }

    /// Converts the descriptor's payload (plus its `content`) into a
    /// [`Value`] for rendering.
    pub fn to_value(&self) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        for (key, val) in &self.data {
            m.insert(key.clone(), val.clone());
        }
        m.insert("content".to_owned(), (&self.content).into());
        Value::Object(m)
    }
}

/// Expands a category→posts mapping into page descriptors.
///
/// For each category and each [`OutputType`], a descriptor is produced
/// iff the configuration exposes a layout for that type; a type without
/// a layout is skipped silently. The mapping is ordered so that the
/// output sequence is deterministic: two runs over identical inputs
/// yield element-wise identical descriptors.
///
/// Misconfiguration surfaces as an error rather than a broken page: a
/// layout without a dir, a layout the registry doesn't know, a category
/// with no posts, a category whose name slugifies to nothing, and two
/// categories claiming the same slug for the same type are all rejected.
pub fn expand(
    categories: &BTreeMap<String, Vec<Post>>,
    config: &Config,
    layouts: &dyn LayoutRegistry,
    namer: Option<Namer>,
) -> Result<Vec<PageDescriptor>> {
    let mut descriptors = Vec::new();
    let mut claimed: HashMap<(OutputType, String), String> = HashMap::new();

    for (category, posts) in categories {
        if posts.is_empty() {
            return Err(Error::EmptyCategory {
                category: category.clone(),
            });
        }
        for &kind in OutputType::ALL.iter() {
            let type_config = config.for_type(kind);
            let layout = match &type_config.layout {
                None => continue,
                Some(layout) => layout,
            };
            descriptors.push(expand_one(
                category,
                posts,
                kind,
                layout,
                type_config,
                config.pretty_urls,
                layouts,
                namer,
                &mut claimed,
            )?);
        }
    }

    Ok(descriptors)
}

/// Builds the descriptor for a single (category, type) pair. `claimed`
/// tracks which category owns each (type, slug) so collisions fail
/// instead of silently overwriting a page.
fn expand_one(
    category: &str,
    posts: &[Post],
    kind: OutputType,
    layout: &str,
    type_config: &TypeConfig,
    pretty_urls: bool,
    layouts: &dyn LayoutRegistry,
    namer: Option<Namer>,
    claimed: &mut HashMap<(OutputType, String), String>,
) -> Result<PageDescriptor> {
    let dir = type_config
        .dir
        .as_ref()
        .ok_or_else(|| Error::MissingDir(kind))?;

    let (payload, content) = build_payload(category, posts, kind, layout, type_config)?;

    let name = namer
        .and_then(|name| name(&payload))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| category.to_owned());
    let slug = slugify(&name);
    if slug.is_empty() {
        return Err(Error::EmptySlug {
            category: category.to_owned(),
        });
    }
    if let Some(first) = claimed.insert((kind, slug.clone()), category.to_owned()) {
        if first != category {
            return Err(Error::SlugCollision {
                slug,
                first,
                second: category.to_owned(),
            });
        }
    }

    let extension = layouts
        .extension_of(layout)
        .ok_or_else(|| Error::UnknownLayout {
            layout: layout.to_owned(),
        })?;

    let (dir, file_name) = match pretty_urls {
        true => (format!("{}/{}", dir, slug), format!("index{}", extension)),
        false => (dir.clone(), format!("{}{}", slug, extension)),
    };

    Ok(PageDescriptor {
        dir: rooted(&dir),
        name: file_name,
        layout: layout.to_owned(),
        content,
        data: payload,
    })
}

// The extra static data goes in first and the computed keys go in last,
// so `layout`, `posts`, and `category` always survive a key collision.
// A `content` entry in the extra data is not template data; it's pulled
// out to become the page body.
fn build_payload(
    category: &str,
    posts: &[Post],
    kind: OutputType,
    layout: &str,
    type_config: &TypeConfig,
) -> Result<(Payload, String)> {
    let mut payload = Payload::new();
    for (key, val) in &type_config.data {
        payload.insert(key.clone(), value::from_yaml(val));
    }

    let content = match payload.remove("content") {
        None => String::new(),
        Some(Value::String(content)) => content,
        Some(_) => return Err(Error::ContentNotText(kind)),
    };

    let posts = sort_newest_first(posts);
    payload.insert("layout".to_owned(), layout.into());
    payload.insert(
        "posts".to_owned(),
        Value::Array(posts.iter().map(Value::from).collect()),
    );
    payload.insert("category".to_owned(), category.into());

    Ok((payload, content))
}

/// Prefixes `dir` with `/` unless it already starts with one.
fn rooted(dir: &str) -> String {
    match dir.starts_with('/') {
        true => dir.to_owned(),
        false => format!("/{}", dir),
    }
}

/// The result of a fallible expansion operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error expanding categories into page descriptors. Every
/// variant is a misconfiguration or an inconsistent input; expansion
/// itself performs no I/O.
#[derive(Debug)]
pub enum Error {
    /// Returned when a type configures a layout but no dir.
    MissingDir(OutputType),

    /// Returned when a configured layout isn't in the registry.
    UnknownLayout { layout: String },

    /// Returned when a category has no posts.
    EmptyCategory { category: String },

    /// Returned when a category's display name slugifies to the empty
    /// string.
    EmptySlug { category: String },

    /// Returned when two categories claim the same slug for the same
    /// output type.
    SlugCollision {
        slug: String,
        first: String,
        second: String,
    },

    /// Returned when a type's extra data carries a non-textual `content`
    /// entry.
    ContentNotText(OutputType),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingDir(kind) => write!(
                f,
                "category_{}_layout is set but category_{}_dir is missing",
                kind, kind
            ),
            Error::UnknownLayout { layout } => {
                write!(f, "no template registered for layout `{}`", layout)
            }
            Error::EmptyCategory { category } => {
                write!(f, "category `{}` has no posts", category)
            }
            Error::EmptySlug { category } => {
                write!(f, "category `{}` slugifies to an empty string", category)
            }
            Error::SlugCollision {
                slug,
                first,
                second,
            } => write!(
                f,
                "categories `{}` and `{}` both slugify to `{}`",
                first, second, slug
            ),
            Error::ContentNotText(kind) => {
                write!(f, "category_{}_data `content` must be text", kind)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
