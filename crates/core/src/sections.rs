//! Website section labels.
//!
//! Sections are an open-ended set of strings: any non-blank label is valid.
//! The built-ins below are always offered in the upload form, followed by
//! whatever other labels already exist in the row store, then `other`.

use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Hero banner imagery.
pub const SECTION_HERO: &str = "hero";

/// Portfolio grid imagery.
pub const SECTION_PORTFOLIO: &str = "portfolio";

/// About section imagery.
pub const SECTION_ABOUT: &str = "about";

/// Services section imagery.
pub const SECTION_SERVICES: &str = "services";

/// Decorative page backgrounds.
pub const SECTION_BACKGROUND: &str = "background";

/// Catch-all section, always offered last.
pub const SECTION_OTHER: &str = "other";

/// Built-in sections in the order the upload form lists them.
pub const BUILTIN_SECTIONS: &[&str] = &[
    SECTION_HERO,
    SECTION_PORTFOLIO,
    SECTION_ABOUT,
    SECTION_SERVICES,
    SECTION_BACKGROUND,
];

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Human-readable label for a section.
///
/// `hero` reads as "Hero Section"; everything else is the label with its
/// first character upper-cased.
pub fn section_label(section: &str) -> String {
    if section == SECTION_HERO {
        return "Hero Section".to_string();
    }
    let mut chars = section.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Sorted, deduplicated set of sections present in a row set.
pub fn distinct_sections<'a, I>(sections: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    sections
        .into_iter()
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Options offered by the upload form.
///
/// Built-ins first (in their fixed order), then any existing section that is
/// not a built-in or `other`, then `other`.
pub fn section_options(existing: &[String]) -> Vec<String> {
    let mut options: Vec<String> = BUILTIN_SECTIONS.iter().map(|s| s.to_string()).collect();

    let extra: BTreeSet<&str> = existing
        .iter()
        .map(String::as_str)
        .filter(|s| !s.trim().is_empty())
        .filter(|s| !BUILTIN_SECTIONS.contains(s) && *s != SECTION_OTHER)
        .collect();
    options.extend(extra.into_iter().map(str::to_string));

    options.push(SECTION_OTHER.to_string());
    options
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
