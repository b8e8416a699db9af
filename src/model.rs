//! Records handed back to the caller.
//!
//! Every record is built fresh from a parsed document and never modified
//! afterward. Synthetic results (bundles, lookups by id) are built from a base
//! record with [`Work::with_overrides`].

use serde::Serialize;

use crate::tags::Tags;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Only seen through a listing entry.
    Ongoing,
    /// Read from a full detail page.
    Complete,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStrategy {
    /// Works never change after upload.
    OnlyFetchOnce,
}

#[derive(Clone, Debug, Serialize)]
pub struct Work {
    /// Path relative to the site root, e.g. `/view/42/my-title`.
    pub url: String,
    pub title: String,
    pub artists: Vec<String>,
    /// Circles, or the artists when the work lists no circle.
    pub authors: Vec<String>,
    pub tags: Tags,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub status: Status,
    pub update_strategy: UpdateStrategy,
}

/// Fields a synthetic result replaces on its base record.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Work {
    pub fn with_overrides(base: Work, overrides: Overrides) -> Work {
        let Overrides {
            url,
            title,
            description,
        } = overrides;

        Work {
            url: url.unwrap_or(base.url),
            title: title.unwrap_or(base.title),
            description: description.or(base.description),
            ..base
        }
    }

    pub fn artist(&self) -> String {
        self.artists.join(", ")
    }

    pub fn author(&self) -> String {
        self.authors.join(", ")
    }
}

/// One page of a listing.
#[derive(Clone, Debug, Serialize)]
pub struct Listing {
    pub works: Vec<Work>,
    pub has_next_page: bool,
}

impl Listing {
    /// A single result with no further pages.
    pub fn single(work: Work) -> Self {
        Self {
            works: vec![work],
            has_next_page: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChapterInfo {
    /// Path relative to the site root.
    pub url: String,
    /// `"{number}. {title}"`
    pub name: String,
    pub number: f32,
    pub scanlator: String,
}

/// A chapter, before or after its upload time is known.
///
/// Listing entries carry no timestamp; [`crate::source::Source::enrich`]
/// fetches the chapter's own page to fill it in.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Chapter {
    Unenriched(ChapterInfo),
    Enriched {
        #[serde(flatten)]
        info: ChapterInfo,
        /// Milliseconds since the epoch.
        uploaded_at: i64,
    },
}

impl Chapter {
    pub fn new(info: ChapterInfo, uploaded_at: Option<i64>) -> Self {
        match uploaded_at {
            Some(uploaded_at) => Chapter::Enriched { info, uploaded_at },
            None => Chapter::Unenriched(info),
        }
    }

    pub fn info(&self) -> &ChapterInfo {
        match self {
            Chapter::Unenriched(info) | Chapter::Enriched { info, .. } => info,
        }
    }

    /// Upload time in milliseconds; zero until enriched.
    pub fn uploaded_at(&self) -> i64 {
        match self {
            Chapter::Unenriched(_) => 0,
            Chapter::Enriched { uploaded_at, .. } => *uploaded_at,
        }
    }

    pub fn is_enriched(&self) -> bool {
        matches!(self, Chapter::Enriched { .. })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Page {
    pub index: usize,
    pub image_url: String,
}
