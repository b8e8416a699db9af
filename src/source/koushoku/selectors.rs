//! Selector strings for the site's two page shapes.
//!
//! These strings match the live markup and must not be reworded. The site's
//! `:contains(..)` and `:has(..)` tests have no CSS counterpart, so those
//! steps are split into a plain selector plus a check done in code.

use scraper::Selector;

/// Repeated work entries on browse, search and popular pages.
pub mod listing {
    pub static ENTRY: &str = "#galleries > main > article";
    pub static LINK: &str = "a";
    pub static THUMBNAIL: &str = "figure img";
    pub static SCANLATOR: &str = "strong";

    /// `footer nav li:has(a.active) + li:not(:last-child) > a`
    pub static PAGINATION_ITEM: &str = "footer nav li";
    pub static ACTIVE_PAGE: &str = "a.active";
}

/// A single work's view page. Where a field has a listing equivalent, the
/// listing half of the selector lets the same extractor read both shapes.
pub mod detail {
    pub static METADATA: &str = "#metadata";
    pub static TITLE: &str = "#metadata h1, main > article > a h3 > span:last-child";
    pub static HEADING: &str = "#metadata h1";
    pub static ARTISTS: &str =
        "#metadata a[href^='/artists/'] > span:first-child, main > article > a h3 > span:first-child";
    pub static CIRCLES: &str = "#metadata a[href^='/circles/'] > span:first-child";
    pub static PARODIES: &str = "#metadata a[href^='/parodies/'] > span:first-child";
    pub static MAGAZINES: &str = "#metadata a[href^='/magazines/'] > span:first-child";
    pub static TAGS: &str = "#metadata a[href^='/tags/'] > span:first-child, #metadata a[href^='/out/'] > span:first-child, #metadata a[href^='/browse?cat='] > span:first-child, main > article > a > footer > span";
    pub static SOURCES: &str = "#metadata a[href^='/out/'] > span:first-child";
    pub static THUMBNAIL: &str = "figure img";
    pub static PAGE_COUNT: &str = "#metadata  a[href^='/browse?ps='] > span";
    pub static TIMESTAMPS: &str = "#metadata time";
    pub static COVER: &str = "#cover img";
    pub static PREVIEWS: &str = "#previews img";

    /// `#metadata a span:contains(Pages)`
    pub static LINK_SPANS: &str = "#metadata a span";
    pub static PAGES_LABEL: &str = "Pages";

    /// `#metadata strong:contains(Size) + div > span:first-child`
    pub static FIELD_NAMES: &str = "#metadata strong";
    pub static SIZE_LABEL: &str = "Size";
}

/// Compiled selectors, built once per source.
#[derive(Debug)]
pub struct Selectors {
    pub entry: Selector,
    pub link: Selector,
    pub listing_thumbnail: Selector,
    pub scanlator: Selector,
    pub pagination_item: Selector,
    pub active_page: Selector,

    pub metadata: Selector,
    pub title: Selector,
    pub heading: Selector,
    pub artists: Selector,
    pub circles: Selector,
    pub parodies: Selector,
    pub magazines: Selector,
    pub tags: Selector,
    pub sources: Selector,
    pub thumbnail: Selector,
    pub page_count: Selector,
    pub timestamps: Selector,
    pub cover: Selector,
    pub previews: Selector,
    pub link_spans: Selector,
    pub field_names: Selector,
}

impl Selectors {
    pub fn new() -> Self {
        Self {
            entry: compile(listing::ENTRY),
            link: compile(listing::LINK),
            listing_thumbnail: compile(listing::THUMBNAIL),
            scanlator: compile(listing::SCANLATOR),
            pagination_item: compile(listing::PAGINATION_ITEM),
            active_page: compile(listing::ACTIVE_PAGE),

            metadata: compile(detail::METADATA),
            title: compile(detail::TITLE),
            heading: compile(detail::HEADING),
            artists: compile(detail::ARTISTS),
            circles: compile(detail::CIRCLES),
            parodies: compile(detail::PARODIES),
            magazines: compile(detail::MAGAZINES),
            tags: compile(detail::TAGS),
            sources: compile(detail::SOURCES),
            thumbnail: compile(detail::THUMBNAIL),
            page_count: compile(detail::PAGE_COUNT),
            timestamps: compile(detail::TIMESTAMPS),
            cover: compile(detail::COVER),
            previews: compile(detail::PREVIEWS),
            link_spans: compile(detail::LINK_SPANS),
            field_names: compile(detail::FIELD_NAMES),
        }
    }
}

// Panics on a malformed catalog entry.
fn compile(selector: &str) -> Selector {
    Selector::parse(selector).unwrap()
}
