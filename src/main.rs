mod config;
mod error;
mod format;
mod logging;
mod model;
mod options;
mod source;
mod tags;
mod waiter;

use std::time::Duration;

use config::Configuration;
use error::Error;
use format::{DurationFormat, UploadDate};
use model::{Chapter, Listing, Page, Work};
use options::{Command, Opt};
use serde::Serialize;
use source::{
    koushoku::{FilterSet, Koushoku, SortField, SortOrder, FILTER_HELP},
    HttpTransport, Source,
};
use url::Url;

pub type Result<T, E = error::Error> = std::result::Result<T, E>;

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("{}", e);
    }

    if let Err(e) = run(&Opt::parse()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(opt: &Opt) -> crate::Result<()> {
    let start_time = chrono::Local::now();
    let config = Configuration::init();

    let base_url = opt.base_url.as_deref().unwrap_or_else(|| config.base_url());
    let wait = opt.wait.map(Duration::from_secs).unwrap_or_else(|| config.wait());
    let transport = HttpTransport::new(config.user_agent(), wait)?;
    let source = Koushoku::new(base_url, transport)?;

    match &opt.command {
        Command::Latest { page } => print_listing(opt, &source.latest(*page)?)?,
        Command::Popular { page } => print_listing(opt, &source.popular(*page)?)?,
        Command::Search {
            query,
            page,
            filters,
        } => {
            let filters = filters.to_filter_set();
            print_listing(opt, &source.search(*page, query, filters.as_ref())?)?
        }
        Command::Details { path } => print_work(opt, &source.details(path)?)?,
        Command::Chapters { path, enrich } => {
            let mut chapters = source.chapters(path)?;
            if *enrich {
                chapters = chapters
                    .into_iter()
                    .map(|chapter| source.enrich(chapter))
                    .collect::<crate::Result<Vec<_>>>()?;
            }
            print_chapters(opt, &chapters)?
        }
        Command::Pages { path } => print_pages(opt, &source.pages(path)?)?,
        Command::Open { link } => print_listing(opt, &source.open(&Url::parse(link)?)?)?,
        Command::Filters => print_filters(),
    }

    let elapsed = chrono::Local::now().signed_duration_since(start_time);
    if !opt.json {
        println!("\n{} elapsed", elapsed.into_formatter());
    }

    Ok(())
}

fn print_json(value: &impl Serialize) -> crate::Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Other(String::from("Unable to serialize output"), Box::new(e)))?;
    println!("{}", text);
    Ok(())
}

fn print_listing(opt: &Opt, listing: &Listing) -> crate::Result<()> {
    if opt.json {
        return print_json(listing);
    }

    for (idx, work) in listing.works.iter().enumerate() {
        println!("{} {}\n  {}", idx + 1, work.title, work.url);
    }

    if listing.has_next_page {
        println!("\n(more pages)");
    }
    Ok(())
}

fn print_work(opt: &Opt, work: &Work) -> crate::Result<()> {
    if opt.json {
        return print_json(work);
    }

    println!("{}\n{}", work.title, work.url);
    println!("Artist: {}", work.artist());
    println!("Author: {}", work.author());
    println!("Status: {:?}", work.status);
    if let Some(thumbnail) = &work.thumbnail_url {
        println!("Thumbnail: {}", thumbnail);
    }
    if !work.tags.is_empty() {
        println!("Tags: {}", work.tags);
    }
    if let Some(description) = &work.description {
        println!("\n{}", description.trim_end());
    }
    Ok(())
}

fn print_chapters(opt: &Opt, chapters: &[Chapter]) -> crate::Result<()> {
    if opt.json {
        return print_json(&chapters);
    }

    for chapter in chapters {
        let info = chapter.info();
        let uploaded = if chapter.is_enriched() {
            UploadDate(chapter.uploaded_at()).to_string()
        } else {
            String::from("not fetched")
        };
        println!(
            "{}  [{}]  {}\n  {}",
            info.name, info.scanlator, uploaded, info.url
        );
    }
    Ok(())
}

fn print_pages(opt: &Opt, pages: &[Page]) -> crate::Result<()> {
    if opt.json {
        return print_json(&pages);
    }

    for page in pages {
        println!("{} {}", page.index + 1, page.image_url);
    }
    Ok(())
}

fn print_filters() {
    for line in FILTER_HELP {
        println!("{}", line);
    }

    println!();
    for (label, param) in FilterSet::labels() {
        println!("{:<12} {}", label, param);
    }

    println!("\nSort");
    for field in SortField::ALL {
        println!("  {:<16} sort={}", field.label(), field.code());
    }

    println!("Order");
    for order in SortOrder::ALL {
        println!("  {:<16} order={}", order.label(), order.code());
    }
}
