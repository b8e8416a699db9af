//! Turns fetched documents into records.
//!
//! Listing pages repeat an `article` per work. View pages carry a
//! `#metadata` block instead. Where a field appears in both, the selector
//! covers both and the extractor reads whichever is present.

use regex::Regex;
use scraper::{ElementRef, Html};
use url::Url;

use super::selectors::{detail, Selectors};
use crate::{
    error::{Error, ExtractionFailure, UnsupportedError},
    model::{Chapter, ChapterInfo, Listing, Page, Status, UpdateStrategy, Work},
    tags::{Namespace, Tags},
};

pub struct Extractor {
    base: Url,
    selectors: Selectors,
    number_pattern: Regex,
    year_pattern: Regex,
}

impl Extractor {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            selectors: Selectors::new(),
            number_pattern: Regex::new(r"\b[\d.]{1,4}$").unwrap(),
            year_pattern: Regex::new(r"20\d\d-$").unwrap(),
        }
    }

    pub fn listing(&self, document: &str, url: &str) -> crate::Result<Listing> {
        let document = Html::parse_document(document);
        let works = document
            .select(&self.selectors.entry)
            .map(|entry| self.entry(entry, url))
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(Listing {
            works,
            has_next_page: self.has_next_page(&document),
        })
    }

    fn entry(&self, entry: ElementRef, url: &str) -> crate::Result<Work> {
        let s = &self.selectors;
        let link = entry
            .select(&s.link)
            .next()
            .ok_or_else(|| Error::Extraction(ExtractionFailure::Listing, url.into()))?;
        let href = link
            .value()
            .attr("href")
            .ok_or_else(|| Error::Extraction(ExtractionFailure::Listing, url.into()))?;
        let thumbnail = entry
            .select(&s.listing_thumbnail)
            .next()
            .and_then(|img| img.value().attr("src"))
            .ok_or_else(|| Error::Extraction(ExtractionFailure::Thumbnail, url.into()))?;

        Ok(Work {
            url: self.relative(href)?,
            title: link.value().attr("title").unwrap_or_default().to_string(),
            artists: Vec::new(),
            authors: Vec::new(),
            tags: Tags::default(),
            thumbnail_url: Some(self.absolute(thumbnail)?),
            description: None,
            status: Status::Ongoing,
            update_strategy: UpdateStrategy::OnlyFetchOnce,
        })
    }

    /// True when the active page marker has a successor that is not the
    /// trailing "last page" link.
    fn has_next_page(&self, document: &Html) -> bool {
        let s = &self.selectors;
        document
            .select(&s.pagination_item)
            .find(|item| item.select(&s.active_page).next().is_some())
            .and_then(|item| item.next_siblings().find_map(ElementRef::wrap))
            .filter(|next| next.value().name() == "li")
            .filter(|next| next.next_siblings().any(|node| node.value().is_element()))
            .map(|next| {
                next.children()
                    .filter_map(ElementRef::wrap)
                    .any(|child| child.value().name() == "a")
            })
            .unwrap_or_default()
    }

    /// Reads a work from either page shape; `path` becomes the work's url.
    pub fn details(&self, document: &str, path: &str) -> crate::Result<Work> {
        let document = Html::parse_document(document);
        let s = &self.selectors;
        let is_view = document.select(&s.metadata).next().is_some();

        let artists = distinct(document.select(&s.artists).map(text));
        let circles: Vec<_> = document.select(&s.circles).map(text).collect();
        let authors = if circles.iter().all(|circle| circle.trim().is_empty()) {
            artists.clone()
        } else {
            circles
        };

        let title = document
            .select(&s.title)
            .next()
            .map(text)
            .ok_or_else(|| Error::Extraction(ExtractionFailure::Title, path.into()))?;

        // The listing thumbnail, upscaled.
        let thumbnail = document
            .select(&s.thumbnail)
            .next()
            .and_then(|img| img.value().attr("src"))
            .ok_or_else(|| Error::Extraction(ExtractionFailure::Thumbnail, path.into()))?;
        let thumbnail = self.absolute(thumbnail)?.replace("/320/", "/896/");

        let description = if is_view {
            Some(self.description(&document, path)?)
        } else {
            None
        };

        Ok(Work {
            url: path.to_string(),
            title,
            tags: self.tags(&document),
            artists,
            authors,
            thumbnail_url: Some(thumbnail),
            description,
            status: if is_view {
                Status::Complete
            } else {
                Status::Ongoing
            },
            update_strategy: UpdateStrategy::OnlyFetchOnce,
        })
    }

    fn tags(&self, document: &Html) -> Tags {
        let s = &self.selectors;
        Tags::builder()
            .group(Namespace::Artist, document.select(&s.artists).map(text))
            .group(Namespace::Group, document.select(&s.circles).map(text))
            .group(Namespace::Parody, document.select(&s.parodies).map(text))
            .group(Namespace::Magazine, document.select(&s.magazines).map(text))
            .group(Namespace::Tag, document.select(&s.tags).map(text))
            .build()
    }

    fn description(&self, document: &Html, path: &str) -> crate::Result<String> {
        let s = &self.selectors;
        let pages = document
            .select(&s.link_spans)
            .map(text)
            .find(|span| contains_label(span, detail::PAGES_LABEL))
            .ok_or_else(|| Error::Extraction(ExtractionFailure::PageCount, path.into()))?;

        let size = document
            .select(&s.field_names)
            .find(|name| contains_label(&text(*name), detail::SIZE_LABEL))
            .and_then(|name| name.next_siblings().find_map(ElementRef::wrap))
            .filter(|value| value.value().name() == "div")
            .and_then(|value| value.children().find_map(ElementRef::wrap))
            .filter(|span| span.value().name() == "span")
            .map(text);

        let mut description = format!(
            "\u{1F4C4} Pages: {}\t\u{1F4BE} Size: {}\n",
            first_word(&pages),
            size.as_deref().unwrap_or("Unknown"),
        );

        let sources: Vec<_> = document.select(&s.sources).map(text).collect();
        if !sources.is_empty() {
            description += &format!("\u{1F310} Source: {}\t", sources.join(", "));
        }

        let parodies: Vec<_> = document.select(&s.parodies).map(text).collect();
        if !parodies.is_empty() {
            description += &format!("\u{1F465} Parody: {}\t", parodies.join(", "));
        }

        Ok(description)
    }

    /// A view page is one chapter; any other page lists one chapter per entry.
    pub fn chapters(&self, document: &str, path: &str) -> crate::Result<Vec<Chapter>> {
        let is_view = path.trim_start_matches('/').split('/').next() == Some("view");
        let document = Html::parse_document(document);

        if is_view {
            return Ok(vec![self.view_chapter(&document, path)?]);
        }

        document
            .select(&self.selectors.entry)
            .map(|entry| self.entry_chapter(entry, path))
            .collect()
    }

    fn view_chapter(&self, document: &Html, path: &str) -> crate::Result<Chapter> {
        let s = &self.selectors;
        let title = document
            .select(&s.heading)
            .next()
            .map(text)
            .ok_or_else(|| Error::Extraction(ExtractionFailure::Title, path.into()))?;
        let scanlator = document
            .select(&s.page_count)
            .next()
            .map(text)
            .ok_or_else(|| Error::Extraction(ExtractionFailure::PageCount, path.into()))?;

        let info = self.chapter_info(path.to_string(), &title, scanlator);
        Ok(Chapter::new(info, self.upload_time(document)))
    }

    fn entry_chapter(&self, entry: ElementRef, path: &str) -> crate::Result<Chapter> {
        let s = &self.selectors;
        let link = entry
            .select(&s.link)
            .next()
            .ok_or_else(|| Error::Extraction(ExtractionFailure::Listing, path.into()))?;
        let href = link.value().attr("href").unwrap_or_default();
        let title = link.value().attr("title").unwrap_or_default();
        let scanlator = entry
            .select(&s.scanlator)
            .map(text)
            .collect::<Vec<_>>()
            .join(" ");

        let info = self.chapter_info(self.relative(href)?, title, scanlator);
        Ok(Chapter::Unenriched(info))
    }

    fn chapter_info(&self, url: String, title: &str, scanlator: String) -> ChapterInfo {
        let number = self.chapter_number(title);
        tracing::debug!(title, %number, "chapter");

        ChapterInfo {
            url,
            name: format!("{}. {}", number, title),
            number: number.parse().unwrap_or(1.0),
            scanlator,
        }
    }

    /// The trailing number of a title, or `"1"`.
    ///
    /// A number directly after `20xx-` is the tail of a date, not a chapter.
    pub fn chapter_number(&self, title: &str) -> String {
        let mut start = 0;
        while let Some(candidate) = self.number_pattern.find_at(title, start) {
            if !self.year_pattern.is_match(&title[..candidate.start()]) {
                let number = candidate.as_str().trim_matches('.');
                if !number.is_empty() && number.parse::<f32>().is_ok() {
                    return number.to_string();
                }
                break;
            }

            start = candidate.start()
                + title[candidate.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
        }

        String::from("1")
    }

    /// Earliest `data-timestamp` on the page, in milliseconds.
    pub fn upload_time(&self, document: &Html) -> Option<i64> {
        document
            .select(&self.selectors.timestamps)
            .filter_map(|time| time.value().attr("data-timestamp"))
            .filter_map(|stamp| stamp.trim().parse::<i64>().ok()?.checked_mul(1000))
            .min()
    }

    pub fn upload_time_of(&self, document: &str) -> Option<i64> {
        self.upload_time(&Html::parse_document(document))
    }

    pub fn pages(&self, document: &str, path: &str) -> crate::Result<Vec<Page>> {
        let document = Html::parse_document(document);
        let s = &self.selectors;

        let label = document
            .select(&s.page_count)
            .next()
            .map(text)
            .ok_or_else(|| Error::Extraction(ExtractionFailure::PageCount, path.into()))?;
        let total: usize = first_word(&label).parse().map_err(|e| {
            Error::Other(format!("Unable to parse page count at {}", path), Box::new(e))
        })?;

        if total == 0 {
            return Err(Error::Unsupported(UnsupportedError::EmptyPages, path.into()));
        }

        let previews: Vec<_> = document.select(&s.previews).collect();
        let mut sources: Vec<String> = ["src", "data-src"]
            .iter()
            .flat_map(|attr| previews.iter().filter_map(move |img| img.value().attr(attr)))
            .filter(|src| !src.is_empty())
            .map(String::from)
            .collect();

        if sources.is_empty() {
            tracing::debug!(path, "no previews, guessing image urls");
            let cover = document
                .select(&s.cover)
                .next()
                .and_then(|img| img.value().attr("src"))
                .ok_or_else(|| Error::Extraction(ExtractionFailure::Cover, path.into()))?
                .replace("/896/", "/320/");
            sources = guess_pages(&cover, total)
                .ok_or_else(|| Error::Extraction(ExtractionFailure::Cover, path.into()))?;
        }

        tracing::debug!(count = sources.len(), ?sources, "page urls");
        sources
            .iter()
            .enumerate()
            .map(|(index, src)| -> crate::Result<Page> {
                Ok(Page {
                    index,
                    image_url: self.absolute(&full_resolution(src))?,
                })
            })
            .collect()
    }

    fn absolute(&self, src: &str) -> crate::Result<String> {
        Ok(self.base.join(src)?.into())
    }

    /// The path and query of a link, without scheme or host.
    fn relative(&self, href: &str) -> crate::Result<String> {
        let url = self.base.join(href)?;
        Ok(match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        })
    }
}

/// Numbers the cover's filename up to `total`, keeping its digit width and
/// extension: `.../001.jpg` gives `.../001.jpg`, `.../002.jpg`, and so on.
fn guess_pages(cover: &str, total: usize) -> Option<Vec<String>> {
    let filename = cover.rsplit('/').next()?;
    let (stem, extension) = filename.rsplit_once('.')?;
    let width = stem.len();

    Some(
        (1..=total)
            .map(|page| {
                cover.replace(
                    filename,
                    &format!("{:0width$}.{}", page, extension, width = width),
                )
            })
            .collect(),
    )
}

fn full_resolution(src: &str) -> String {
    src.replace("/t/", "/original/").replace("/320/", "/")
}

/// Case-insensitive, like the site's `:contains(..)`.
fn contains_label(text: &str, label: &str) -> bool {
    text.to_lowercase().contains(&label.to_lowercase())
}

fn first_word(s: &str) -> &str {
    s.split(' ').next().unwrap_or_default()
}

/// Element text with runs of whitespace collapsed.
fn text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
