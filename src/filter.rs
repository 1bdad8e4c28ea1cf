//! The post-link template filter: turns a post source path into its
//! public URL by delegating to a [`PostUrlResolver`]. One behavior, two
//! names: templates written against either `to_post_link` or `post_link`
//! resolve identically.

use crate::resolve::{PostUrlResolver, Result};

/// Resolves `target` to its public URL via `resolver`.
pub fn to_post_link(resolver: &dyn PostUrlResolver, target: &str) -> Result<String> {
    resolver.post_url(target)
}

/// Alias for [`to_post_link`].
pub fn post_link(resolver: &dyn PostUrlResolver, target: &str) -> Result<String> {
    to_post_link(resolver, target)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::resolve::Resolver;
    use url::Url;

    #[test]
    fn test_filter_aliases_agree() -> Result<()> {
        let posts_root = Url::parse("https://example.org/posts/")?;
        let resolver = Resolver::new(&posts_root, "index.html")?;

        assert_eq!(
            "https://example.org/posts/hello.html",
            to_post_link(&resolver, "hello.md")?,
        );
        assert_eq!(
            to_post_link(&resolver, "hello.md")?,
            post_link(&resolver, "hello.md")?,
        );
        Ok(())
    }
}
