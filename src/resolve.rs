//! Post URL resolution: converting a post's source path into its public
//! URL. Hosts provide the capability behind the [`PostUrlResolver`]
//! trait; [`Resolver`] is the stock implementation for sites whose posts
//! render from `{posts_root}/{id}.md` to `{posts_root}/{id}.html`.

use url::{ParseError, Url};

const MARKDOWN_EXTENSION: &str = ".md";
const HTML_EXTENSION: &str = ".html";

/// The host-provided "content path to public URL" capability that the
/// post-link filter ([`crate::filter`]) delegates to.
pub trait PostUrlResolver {
    /// Resolves `target` (a post source path, relative or absolute) to
    /// its public URL.
    fn post_url(&self, target: &str) -> Result<String>;
}

/// Resolves post source paths against a posts root URL. Markdown targets
/// under the root resolve to their rendered `.html` URLs; anything else
/// (assets, remote URLs) resolves without rewriting.
pub struct Resolver<'a> {
    posts_root: &'a Url,
    base: Url,
}

impl<'a> Resolver<'a> {
    /// Constructs a new `Resolver`.
    ///
    /// # Arguments
    ///
    /// * `posts_root` - the URL prefix for rendered posts. This should
    ///   end in a trailing slash.
    /// * `base` - the path, relative to `posts_root`, of the page whose
    ///   links are being resolved.
    pub fn new(posts_root: &'a Url, base: &str) -> Result<Resolver<'a>> {
        Ok(Resolver {
            posts_root,
            base: posts_root.join(base)?,
        })
    }

    fn resolve_absolute(&self, absolute: Url) -> Url {
        if let Some(relative) = self.posts_root.make_relative(&absolute) {
            if !relative.starts_with("../") && relative.ends_with(MARKDOWN_EXTENSION) {
                return self
                    .posts_root
                    .join(&format!(
                        "{}{}",
                        relative.trim_end_matches(MARKDOWN_EXTENSION),
                        HTML_EXTENSION,
                    ))
                    // joining a relative path we just unjoined can't fail
                    .unwrap();
            }
        }
        absolute
    }

    fn resolve(&self, target: &str) -> Result<Url> {
        match Url::parse(target) {
            Ok(absolute) => Ok(self.resolve_absolute(absolute)),
            Err(ParseError::RelativeUrlWithoutBase) => {
                Ok(self.resolve_absolute(self.base.join(target)?))
            }
            Err(e) => Err(e),
        }
    }
}

impl PostUrlResolver for Resolver<'_> {
    fn post_url(&self, target: &str) -> Result<String> {
        Ok(self.resolve(target)?.to_string())
    }
}

/// The result of a fallible resolution operation.
pub type Result<T> = std::result::Result<T, ParseError>;
