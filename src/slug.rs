//! Slug normalization for category display names.

/// Normalizes a display name into a URL-safe slug: diacritics are
/// stripped, letters are lowercased, and whitespace runs collapse into
/// single hyphens (e.g., `Café Life` becomes `cafe-life`). The result is
/// safe to drop into a path or a URL.
pub fn slugify(name: &str) -> String {
    slug::slugify(name)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_slugify_strips_diacritics() {
        assert_eq!("cafe-life", slugify("Café Life"));
    }

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!("late-night-links", slugify("Late   Night\tLinks"));
    }

    #[test]
    fn test_slugify_passes_through_slugs() {
        assert_eq!("already-a-slug", slugify("already-a-slug"));
    }

    #[test]
    fn test_slugify_whitespace_only_is_empty() {
        assert_eq!("", slugify("   "));
    }

    #[test]
    fn test_slugify_empty_is_empty() {
        assert_eq!("", slugify(""));
    }
}
