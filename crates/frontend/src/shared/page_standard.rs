//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a004_goal--list"`) and a
//! `data-page-category` with one of the constants below.

/// List of records with summary, filters and grid/table layouts.
pub const PAGE_CAT_LIST: &str = "list";

/// Shown for a tab key without a registered page.
pub const PAGE_CAT_PLACEHOLDER: &str = "placeholder";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_page_id() {
        assert!(is_valid_page_id("a006_branch--list"));
        assert!(!is_valid_page_id("a006_branch"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a006_branch--"));
    }
}
