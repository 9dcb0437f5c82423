/// How a link's `href` relates to the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorHref<'a> {
    /// Exactly `#`: never scrolls
    Bare,
    /// `#id`: scrolls to the element with that id
    Fragment(&'a str),
    /// Anything else is left to the browser
    Other,
}

impl<'a> AnchorHref<'a> {
    pub fn classify(href: &'a str) -> Self {
        match href.strip_prefix('#') {
            Some("") => Self::Bare,
            Some(id) => Self::Fragment(id),
            None => Self::Other,
        }
    }
}

/// Selector for every in-page link, bare `#` included
pub const IN_PAGE_LINK_SELECTOR: &str = "a[href^=\"#\"]";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash() {
        assert_eq!(AnchorHref::classify("#"), AnchorHref::Bare);
    }

    #[test]
    fn fragment() {
        assert_eq!(AnchorHref::classify("#pricing"), AnchorHref::Fragment("pricing"));
    }

    #[test]
    fn other_links() {
        assert_eq!(AnchorHref::classify("/about#team"), AnchorHref::Other);
        assert_eq!(AnchorHref::classify("https://example.com"), AnchorHref::Other);
        assert_eq!(AnchorHref::classify(""), AnchorHref::Other);
    }
}
