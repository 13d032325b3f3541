//! HTML pages served by the site.
//!
//! Each page is a self-contained document (markup, styles, script) compiled
//! into the binary. Admin pages carry no data; their scripts fetch it from
//! the admin API after the page gate has passed.

use thinklab_core::gallery::SEARCH_DEBOUNCE_MS;

/// Public marketing page.
pub const HOME_HTML: &str = include_str!("../../assets/home.html");

/// Admin sign-in form.
pub const LOGIN_HTML: &str = include_str!("../../assets/login.html");

/// Admin dashboard.
pub const DASHBOARD_HTML: &str = include_str!("../../assets/dashboard.html");

/// Image management: gallery and upload tabs. The search debounce is
/// filled in by [`images_page`].
pub const IMAGES_HTML: &str = include_str!("../../assets/images.html");

const DEBOUNCE_PLACEHOLDER: &str = "{{SEARCH_DEBOUNCE_MS}}";

/// The image management page with the search debounce rendered in.
pub fn images_page() -> String {
    IMAGES_HTML.replace(DEBOUNCE_PLACEHOLDER, &SEARCH_DEBOUNCE_MS.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_page_carries_search_debounce() {
        assert!(IMAGES_HTML.contains(DEBOUNCE_PLACEHOLDER));

        let page = images_page();
        assert!(page.contains(&format!("var DEBOUNCE_MS = {SEARCH_DEBOUNCE_MS};")));
        assert!(!page.contains("{{"));
    }
}
