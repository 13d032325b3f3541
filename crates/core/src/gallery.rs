//! Admin gallery filtering.
//!
//! The filtered view is a pure function of the full image list, the search
//! term and the section selection. Both predicates are evaluated together on
//! every call, always against the full list, so the result never depends on
//! which input changed last. Debouncing belongs to whatever triggers the
//! call (the gallery page waits [`SEARCH_DEBOUNCE_MS`] after the last
//! keystroke), never to the predicate itself.

use serde::Deserialize;

/// Delay the gallery page waits after the last input change before
/// re-querying.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Value of the section dropdown that disables section filtering.
pub const ALL_SECTIONS: &str = "all";

/// Fields the gallery filter reads from a row.
pub trait GalleryEntry {
    fn section(&self) -> &str;
    fn title(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn alt_text(&self) -> &str;
}

/// Section predicate of the gallery filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SectionFilter {
    #[default]
    All,
    Only(String),
}

impl SectionFilter {
    /// Parse the dropdown value. `"all"`, blank and missing all mean no
    /// section filtering.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL_SECTIONS) => Self::All,
            Some(section) => Self::Only(section.to_string()),
        }
    }

    fn accepts(&self, section: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == section,
        }
    }
}

/// Combined gallery filter: section selection plus free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    pub search: String,
    pub section: SectionFilter,
}

/// Raw query-string shape (`?search=&section=`).
#[derive(Debug, Default, Deserialize)]
pub struct GalleryFilterParams {
    pub search: Option<String>,
    pub section: Option<String>,
}

impl From<GalleryFilterParams> for GalleryFilter {
    fn from(params: GalleryFilterParams) -> Self {
        Self {
            search: params.search.unwrap_or_default(),
            section: SectionFilter::parse(params.section.as_deref()),
        }
    }
}

impl GalleryFilter {
    pub fn new(search: impl Into<String>, section: SectionFilter) -> Self {
        Self {
            search: search.into(),
            section,
        }
    }

    /// Lower-cased search term, or `None` when the term is blank.
    fn needle(&self) -> Option<String> {
        let term = self.search.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        }
    }
}

/// Whether a single row passes both predicates.
pub fn matches<T: GalleryEntry>(entry: &T, filter: &GalleryFilter) -> bool {
    filter.section.accepts(entry.section()) && matches_search(entry, filter.needle().as_deref())
}

/// Restrict `images` to the rows passing both predicates, preserving order.
pub fn filter_images<T: GalleryEntry + Clone>(images: &[T], filter: &GalleryFilter) -> Vec<T> {
    let needle = filter.needle();
    images
        .iter()
        .filter(|img| filter.section.accepts(img.section()))
        .filter(|img| matches_search(*img, needle.as_deref()))
        .cloned()
        .collect()
}

fn matches_search<T: GalleryEntry>(entry: &T, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    entry.title().to_lowercase().contains(needle)
        || entry
            .description()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || entry.alt_text().to_lowercase().contains(needle)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        section: &'static str,
        title: &'static str,
        description: Option<&'static str>,
        alt_text: &'static str,
    }

    impl GalleryEntry for Row {
        fn section(&self) -> &str {
            self.section
        }
        fn title(&self) -> &str {
            self.title
        }
        fn description(&self) -> Option<&str> {
            self.description
        }
        fn alt_text(&self) -> &str {
            self.alt_text
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                section: "portfolio",
                title: "Fashion Editorial",
                description: Some("Spring lookbook shoot"),
                alt_text: "Model in red coat",
            },
            Row {
                section: "events",
                title: "Corporate Gala",
                description: None,
                alt_text: "Guests at the gala",
            },
            Row {
                section: "portfolio",
                title: "Urban Portrait",
                description: None,
                alt_text: "Portrait on a rooftop",
            },
        ]
    }

    fn titles(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.title).collect()
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let all = rows();
        let out = filter_images(&all, &GalleryFilter::default());
        assert_eq!(out, all);
    }

    #[test]
    fn section_filter_is_exact_match() {
        let filter = GalleryFilter::new("", SectionFilter::Only("portfolio".into()));
        let out = filter_images(&rows(), &filter);
        assert_eq!(titles(&out), vec!["Fashion Editorial", "Urban Portrait"]);

        let filter = GalleryFilter::new("", SectionFilter::Only("port".into()));
        assert!(filter_images(&rows(), &filter).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_title() {
        let filter = GalleryFilter::new("GALA", SectionFilter::All);
        assert_eq!(titles(&filter_images(&rows(), &filter)), vec!["Corporate Gala"]);
    }

    #[test]
    fn search_covers_description_and_alt_text() {
        let by_description = GalleryFilter::new("lookbook", SectionFilter::All);
        assert_eq!(
            titles(&filter_images(&rows(), &by_description)),
            vec!["Fashion Editorial"]
        );

        let by_alt = GalleryFilter::new("rooftop", SectionFilter::All);
        assert_eq!(
            titles(&filter_images(&rows(), &by_alt)),
            vec!["Urban Portrait"]
        );
    }

    #[test]
    fn both_predicates_apply_together() {
        let filter = GalleryFilter::new("portrait", SectionFilter::Only("events".into()));
        assert!(filter_images(&rows(), &filter).is_empty());

        let filter = GalleryFilter::new("portrait", SectionFilter::Only("portfolio".into()));
        assert_eq!(titles(&filter_images(&rows(), &filter)), vec!["Urban Portrait"]);
    }

    #[test]
    fn blank_search_term_matches_everything() {
        let filter = GalleryFilter::new("   ", SectionFilter::All);
        assert_eq!(filter_images(&rows(), &filter).len(), 3);
    }

    #[test]
    fn filtered_view_equals_rows_passing_matches() {
        let all = rows();
        let terms = ["", "a", "por", "GALA", "zzz", "red"];
        let sections = [
            SectionFilter::All,
            SectionFilter::Only("portfolio".into()),
            SectionFilter::Only("events".into()),
            SectionFilter::Only("missing".into()),
        ];
        for term in terms {
            for section in &sections {
                let filter = GalleryFilter::new(term, section.clone());
                let expected: Vec<Row> =
                    all.iter().filter(|r| matches(*r, &filter)).cloned().collect();
                assert_eq!(filter_images(&all, &filter), expected, "term={term:?}");
            }
        }
    }

    #[test]
    fn section_filter_parses_all_and_blank() {
        assert_eq!(SectionFilter::parse(None), SectionFilter::All);
        assert_eq!(SectionFilter::parse(Some("all")), SectionFilter::All);
        assert_eq!(SectionFilter::parse(Some(" ")), SectionFilter::All);
        assert_eq!(
            SectionFilter::parse(Some("hero")),
            SectionFilter::Only("hero".into())
        );
    }

    #[test]
    fn params_convert_into_filter() {
        let params = GalleryFilterParams {
            search: Some("gala".into()),
            section: Some("events".into()),
        };
        let filter = GalleryFilter::from(params);
        assert_eq!(filter.search, "gala");
        assert_eq!(filter.section, SectionFilter::Only("events".into()));
    }
}
