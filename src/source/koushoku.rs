/*!
Koushoku (ksk.moe) serves doujinshi as single-chapter works.

Searches arrive as a query string. Before anything is fetched the string is
sorted into one of three intents:

* `id:{id}/{slug}` looks up a single work and presents it as a one item
  listing.
* `bundle:{text} PARAMS:{k=v&...}`, or anything carrying `bundle=1`, replays a
  saved advanced search. The first page of that search is read as though it
  were a view page and handed back as one pseudo-work whose path is the search
  itself, so selecting it again replays the same search.
* Anything else is ordinary search text combined with the typed filters.
*/

mod extract;
#[cfg(test)]
mod fixtures;
mod intent;
mod query;
mod selectors;

use url::Url;

pub use self::{
    intent::{Bundle, SearchIntent},
    query::{FilterSet, SortField, SortOrder, FILTER_HELP},
};
use self::extract::Extractor;
use super::{Source, Transport};
use crate::{
    error::{Error, ExtractionFailure},
    model::{Chapter, Listing, Overrides, Page, Work},
};

pub struct Koushoku<T> {
    base: Url,
    transport: T,
    extractor: Extractor,
}

impl<T: Transport> Koushoku<T> {
    pub fn new(base_url: &str, transport: T) -> crate::Result<Self> {
        let base = Url::parse(base_url)?;
        Ok(Self {
            extractor: Extractor::new(base.clone()),
            base,
            transport,
        })
    }

    /// Follows a link into the site, the way a shared url would be opened.
    pub fn open(&self, link: &Url) -> crate::Result<Listing> {
        let query = SearchIntent::from_link(link)?;
        tracing::debug!(%link, query = %query, "routing link");
        self.search(1, &query, None)
    }

    fn url(&self, path: &str) -> crate::Result<Url> {
        Ok(self.base.join(path)?)
    }

    fn fetch(&self, url: &Url) -> crate::Result<String> {
        tracing::debug!(%url, "fetching");
        self.transport.get(url)
    }

    fn search_by_id(&self, id: &str) -> crate::Result<Listing> {
        let path = format!("/view/{}", id);
        let document = self.fetch(&self.url(&path)?)?;
        let work = self.extractor.details(&document, &path)?;

        Ok(Listing::single(Work::with_overrides(
            work,
            Overrides {
                url: Some(path),
                ..Default::default()
            },
        )))
    }

    fn search_bundle(&self, page: u32, bundle: &Bundle) -> crate::Result<Listing> {
        let mut url = self.url(&format!("/browse/page/{}", page))?;
        url.query_pairs_mut()
            .append_pair("adv", "1")
            .append_pair("s", &bundle.search)
            .extend_pairs(bundle.replay_params());

        tracing::info!(%url, "bundling up");
        let document = self.fetch(&url)?;
        let path = format!("{}?{}", url.path(), url.query().unwrap_or_default());

        // The first result stands in for a view page.
        let work = self.extractor.details(&document, &path)?;
        let name = &bundle.search;
        tracing::debug!(name = %name, "bundled");

        Ok(Listing::single(Work::with_overrides(
            work,
            Overrides {
                url: Some(path),
                title: Some(format!("[Bundle] {}", name)),
                description: Some(format!("Bundled from {}", name)),
            },
        )))
    }

    fn search_plain(&self, page: u32, text: &str, filters: &FilterSet) -> crate::Result<Listing> {
        let mut url = self.url(&format!("/browse/page/{}", page))?;
        url.query_pairs_mut().extend_pairs(query::build(text, filters));
        self.listing(&url)
    }

    fn listing(&self, url: &Url) -> crate::Result<Listing> {
        let document = self.fetch(url)?;
        self.extractor.listing(&document, url.as_str())
    }
}

impl<T: Transport> Source for Koushoku<T> {
    fn latest(&self, page: u32) -> crate::Result<Listing> {
        self.listing(&self.url(&format!("/browse/page/{}", page))?)
    }

    fn popular(&self, page: u32) -> crate::Result<Listing> {
        self.listing(&self.url(&format!("/popular/weekly/page/{}", page))?)
    }

    fn search(
        &self,
        page: u32,
        query: &str,
        filters: Option<&FilterSet>,
    ) -> crate::Result<Listing> {
        let intent = SearchIntent::parse(query);
        tracing::debug!(page, query, ?intent, "search");

        match intent {
            SearchIntent::ById(id) => self.search_by_id(&id),
            SearchIntent::Bundle(bundle) => self.search_bundle(page, &bundle),
            SearchIntent::Plain(text) => match filters {
                Some(filters) => self.search_plain(page, &text, filters),
                None => self.search_plain(page, &text, &FilterSet::site_default()),
            },
        }
    }

    fn details(&self, path: &str) -> crate::Result<Work> {
        let document = self.fetch(&self.url(path)?)?;
        self.extractor.details(&document, path)
    }

    fn chapters(&self, path: &str) -> crate::Result<Vec<Chapter>> {
        let document = self.fetch(&self.url(path)?)?;
        self.extractor.chapters(&document, path)
    }

    fn pages(&self, path: &str) -> crate::Result<Vec<Page>> {
        let document = self.fetch(&self.url(path)?)?;
        self.extractor.pages(&document, path)
    }

    fn enrich(&self, chapter: Chapter) -> crate::Result<Chapter> {
        let info = match chapter {
            Chapter::Unenriched(info) => info,
            enriched => return Ok(enriched),
        };

        tracing::debug!(chapter = %info.name, "fetching upload time");
        let document = self.fetch(&self.url(&info.url)?)?;
        let uploaded_at = self
            .extractor
            .upload_time_of(&document)
            .ok_or_else(|| Error::Extraction(ExtractionFailure::Metadata, info.url.clone()))?;

        Ok(Chapter::Enriched { info, uploaded_at })
    }
}
