/// Local asset served when the catalog has no image for an item.
pub const PLACEHOLDER: &str = "/placeholder.svg";

pub const POSTER_SIZE: &str = "w500";
pub const BACKDROP_SIZE: &str = "original";

/// Builds image URLs from the catalog's opaque path fragments.
///
/// Pure string concatenation, no network access. Every screen agrees on
/// sizing and placeholder behavior by going through this one type.
#[derive(Debug, Clone)]
pub struct ImageUrls {
    base_url: String,
}

impl ImageUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL for a path fragment at the given size token, or the
    /// placeholder when the catalog sent no path. Path fragments arrive
    /// with a leading slash.
    pub fn url(&self, path: Option<&str>, size: &str) -> String {
        match path {
            Some(p) => format!("{}/{}{}", self.base_url, size, p),
            None => PLACEHOLDER.to_string(),
        }
    }

    pub fn poster(&self, path: Option<&str>) -> String {
        self.url(path, POSTER_SIZE)
    }

    pub fn backdrop(&self, path: Option<&str>) -> String {
        self.url(path, BACKDROP_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> ImageUrls {
        ImageUrls::new("https://image.tmdb.org/t/p")
    }

    #[test]
    fn test_missing_path_returns_placeholder_for_any_size() {
        let urls = urls();
        assert_eq!(urls.url(None, "w500"), PLACEHOLDER);
        assert_eq!(urls.url(None, "original"), PLACEHOLDER);
        assert_eq!(urls.url(None, "w92"), PLACEHOLDER);
    }

    #[test]
    fn test_url_is_deterministic_concatenation() {
        let urls = urls();
        let first = urls.url(Some("/abc123.jpg"), "w500");
        let second = urls.url(Some("/abc123.jpg"), "w500");
        assert_eq!(first, "https://image.tmdb.org/t/p/w500/abc123.jpg");
        assert_eq!(first, second);
    }

    #[test]
    fn test_poster_and_backdrop_are_fixed_size_specializations() {
        let urls = urls();
        for path in [Some("/poster.jpg"), None] {
            assert_eq!(urls.poster(path), urls.url(path, "w500"));
            assert_eq!(urls.backdrop(path), urls.url(path, "original"));
        }
    }
}
