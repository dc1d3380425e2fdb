/// Last path segment, e.g. `"/site/projects.html"` -> `"projects.html"`.
pub fn current_page(pathname: &str) -> &str {
    pathname.rsplit('/').next().unwrap_or_default()
}

/// Whether the nav link with `href` points at `page`; `""` and `index.html`
/// are the same page.
pub fn is_active(page: &str, href: &str) -> bool {
    page == href
        || (page.is_empty() && href == "index.html")
        || (page == "index.html" && href.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{current_page, is_active};

    #[test]
    fn current_page_is_the_last_segment() {
        assert_eq!(current_page("/portfolio/projects.html"), "projects.html");
        assert_eq!(current_page("/"), "");
        assert_eq!(current_page(""), "");
    }

    #[test]
    fn root_and_index_are_equivalent() {
        assert!(is_active("", "index.html"));
        assert!(is_active("index.html", ""));
        assert!(is_active("contact.html", "contact.html"));
        assert!(!is_active("contact.html", "index.html"));
        assert!(!is_active("", "contact.html"));
    }
}
