//! Classifies an incoming query by its shape alone.

use url::{form_urlencoded, Url};

use crate::error::{Error, UnsupportedError};

/// Separates a query's search text from a raw parameter block.
pub static PARAMS_PREFIX: &str = " PARAMS:";

static ID_PREFIX: &str = "id:";
static BUNDLE_PREFIX: &str = "bundle:";
static BUNDLE_FLAG: &str = "bundle=1";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SearchIntent {
    /// Ordinary search text.
    Plain(String),
    /// A single work by `{id}/{slug}`.
    ById(String),
    /// A saved advanced search replayed as one pseudo-work.
    Bundle(Bundle),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bundle {
    pub search: String,
    /// Already site-encoded values, replayed verbatim.
    pub params: Vec<(String, String)>,
}

impl SearchIntent {
    pub fn parse(query: &str) -> Self {
        if let Some(id) = query.strip_prefix(ID_PREFIX) {
            let id = id.strip_suffix(PARAMS_PREFIX).unwrap_or(id);
            return SearchIntent::ById(id.to_string());
        }

        if query.starts_with(BUNDLE_PREFIX) || query.contains(BUNDLE_FLAG) {
            let body = query.strip_prefix(BUNDLE_PREFIX).unwrap_or(query);
            return SearchIntent::Bundle(Bundle::parse(body));
        }

        let text = query.strip_suffix(PARAMS_PREFIX).unwrap_or(query);
        SearchIntent::Plain(text.to_string())
    }

    /// Maps a link into the site onto the query that finds the same thing.
    ///
    /// Work links become `id:` lookups. Artist, circle, magazine, tag and
    /// parody links become a search on that name carrying the link's own
    /// query string as a parameter block.
    pub fn from_link(link: &Url) -> crate::Result<String> {
        let unsupported = || Error::Unsupported(UnsupportedError::Route, link.to_string());
        let segments: Vec<_> = link
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        if segments.len() < 2 {
            return Err(unsupported());
        }

        let name = urlencoding::decode(segments[1]).map_err(|_| unsupported())?;
        match segments[0] {
            "view" | "read" => {
                let slug = segments.get(2).ok_or_else(unsupported)?;
                Ok(format!("{}{}/{}", ID_PREFIX, segments[1], slug))
            }

            kind @ ("artists" | "circles" | "magazines" | "tags" | "parodies") => {
                let initial = &kind[..1];
                let params = link.query().unwrap_or_default();
                Ok(format!("{}:\"{}\"{}{}", initial, name, PARAMS_PREFIX, params))
            }

            _ => Err(unsupported()),
        }
    }
}

impl Bundle {
    fn parse(body: &str) -> Self {
        if let Some((search, params)) = body.split_once(PARAMS_PREFIX) {
            return Bundle {
                search: search.to_string(),
                params: split_params(params),
            };
        }

        // A path this source synthesized for an earlier bundle.
        if let Some((_, query)) = body
            .strip_prefix('/')
            .and_then(|path| path.split_once('?'))
        {
            let mut search = String::new();
            let mut params = Vec::new();
            for (key, value) in form_urlencoded::parse(query.as_bytes()) {
                match &*key {
                    "s" => search = value.into_owned(),
                    "adv" => {}
                    _ => params.push((key.into_owned(), value.into_owned())),
                }
            }
            return Bundle { search, params };
        }

        Bundle {
            search: body.to_string(),
            params: Vec::new(),
        }
    }

    /// The parameters to replay, flagged so the resulting path reads back as
    /// a bundle.
    pub fn replay_params(&self) -> Vec<(String, String)> {
        let mut params = self.params.clone();
        if !params.iter().any(|(k, v)| k == "bundle" && v == "1") {
            params.push((String::from("bundle"), String::from("1")));
        }
        params
    }
}

/// Splits `k=v&k=v`. A pair without `=` keeps its key with an empty value.
fn split_params(block: &str) -> Vec<(String, String)> {
    block
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{Bundle, SearchIntent};
    use crate::error::{Error, UnsupportedError};

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn classifies_by_prefix() {
        assert_eq!(
            SearchIntent::ById("42/my-title".into()),
            SearchIntent::parse("id:42/my-title")
        );
        assert_eq!(
            SearchIntent::Plain("big tits".into()),
            SearchIntent::parse("big tits PARAMS:")
        );
        assert_eq!(
            SearchIntent::Bundle(Bundle {
                search: "a:\"foo\"".into(),
                params: vec![pair("t", "bar"), pair("sort", "4")],
            }),
            SearchIntent::parse("bundle:a:\"foo\" PARAMS:t=bar&sort=4")
        );
    }

    #[test]
    fn embedded_flag_marks_a_bundle() {
        let intent = SearchIntent::parse("series PARAMS:bundle=1&c=circle");
        assert_eq!(
            SearchIntent::Bundle(Bundle {
                search: "series".into(),
                params: vec![pair("bundle", "1"), pair("c", "circle")],
            }),
            intent
        );
    }

    #[test]
    fn malformed_pairs_keep_empty_values() {
        let intent = SearchIntent::parse("bundle:x PARAMS:t=a&broken&&p=");
        let SearchIntent::Bundle(bundle) = intent else {
            panic!("expected a bundle");
        };
        assert_eq!(
            vec![pair("t", "a"), pair("broken", ""), pair("p", "")],
            bundle.params
        );
    }

    #[test]
    fn synthesized_bundle_path_reads_back() {
        let intent = SearchIntent::parse("/browse/page/1?s=my+series&adv=1&t=x%2C+y&bundle=1");
        assert_eq!(
            SearchIntent::Bundle(Bundle {
                search: "my series".into(),
                params: vec![pair("t", "x, y"), pair("bundle", "1")],
            }),
            intent
        );
    }

    #[test]
    fn question_marks_in_bundle_text_are_kept() {
        assert_eq!(
            SearchIntent::Bundle(Bundle {
                search: "who am i?".into(),
                params: Vec::new(),
            }),
            SearchIntent::parse("bundle:who am i?")
        );
        assert_eq!(
            SearchIntent::Bundle(Bundle {
                search: "a=b? c".into(),
                params: Vec::new(),
            }),
            SearchIntent::parse("bundle:a=b? c")
        );
    }

    #[test]
    fn replay_flags_bundle_once() {
        let bundle = Bundle {
            search: String::new(),
            params: vec![pair("t", "x")],
        };
        assert_eq!(
            vec![pair("t", "x"), pair("bundle", "1")],
            bundle.replay_params()
        );

        let flagged = Bundle {
            search: String::new(),
            params: bundle.replay_params(),
        };
        assert_eq!(bundle.replay_params(), flagged.replay_params());
    }

    #[test]
    fn links_map_to_queries() {
        let link = Url::parse("https://ksk.moe/view/42/my-title").unwrap();
        assert_eq!("id:42/my-title", SearchIntent::from_link(&link).unwrap());

        let link = Url::parse("https://ksk.moe/read/42/my-title/3").unwrap();
        assert_eq!("id:42/my-title", SearchIntent::from_link(&link).unwrap());

        let link = Url::parse("https://ksk.moe/artists/Some%20One?sort=16").unwrap();
        assert_eq!(
            "a:\"Some One\" PARAMS:sort=16",
            SearchIntent::from_link(&link).unwrap()
        );

        let link = Url::parse("https://ksk.moe/parodies/original").unwrap();
        assert_eq!(
            "p:\"original\" PARAMS:",
            SearchIntent::from_link(&link).unwrap()
        );
    }

    #[test]
    fn unknown_links_are_unsupported() {
        for link in ["https://ksk.moe/", "https://ksk.moe/about/x", "https://ksk.moe/view/42"] {
            let link = Url::parse(link).unwrap();
            assert!(matches!(
                SearchIntent::from_link(&link),
                Err(Error::Unsupported(UnsupportedError::Route, _))
            ));
        }
    }
}
