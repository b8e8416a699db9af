pub mod koushoku;

use std::time::Duration;

use url::Url;

use crate::{
    model::{Chapter, Listing, Page, Work},
    waiter::Waiter,
};

pub static USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/106.0.0.0 Safari/537.36";

/// Fetches documents for a source.
///
/// Every call is one GET. Retries, timeouts and TLS belong to the
/// implementation, never to the source using it.
pub trait Transport {
    fn get(&self, url: &Url) -> crate::Result<String>;
}

/// A blocking HTTP transport with a fixed interval between requests.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    waiter: Waiter,
}

impl HttpTransport {
    pub fn new(user_agent: Option<&str>, wait: Duration) -> crate::Result<Self> {
        Ok(Self {
            client: build_client(user_agent.unwrap_or(USER_AGENT))?,
            waiter: Waiter::new(wait),
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> crate::Result<String> {
        self.waiter.wait();
        tracing::info!(%url, "GET");
        Ok(self
            .client
            .get(url.clone())
            .send()?
            .error_for_status()?
            .text()?)
    }
}

fn build_client(user_agent: &str) -> crate::Result<reqwest::blocking::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("text/html"));
    Ok(reqwest::blocking::Client::builder()
        .user_agent(user_agent)
        .default_headers(headers)
        .cookie_store(true)
        .build()?)
}

/// The surface a reader application drives.
///
/// Paths are relative to the source's base url, exactly as they appear on
/// the records the source hands out.
pub trait Source {
    /// Most recent uploads.
    fn latest(&self, page: u32) -> crate::Result<Listing>;

    /// This week's most popular works.
    fn popular(&self, page: u32) -> crate::Result<Listing>;

    /// Free-text search. The query may also carry `id:` or bundle markers;
    /// see [`koushoku::SearchIntent`].
    fn search(
        &self,
        page: u32,
        query: &str,
        filters: Option<&koushoku::FilterSet>,
    ) -> crate::Result<Listing>;

    fn details(&self, path: &str) -> crate::Result<Work>;

    fn chapters(&self, path: &str) -> crate::Result<Vec<Chapter>>;

    fn pages(&self, path: &str) -> crate::Result<Vec<Page>>;

    /// Fills in the upload time of a chapter that was read from a listing.
    ///
    /// Costs one request for an unenriched chapter and none otherwise.
    fn enrich(&self, chapter: Chapter) -> crate::Result<Chapter>;
}
