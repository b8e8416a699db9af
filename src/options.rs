use clap::{Parser, Subcommand, ValueEnum};

use crate::source::koushoku::{FilterSet, SortField, SortOrder};

/// Browse, search and read works on Koushoku.
///
/// Settings may also be kept in ~/.koushoku.conf as key=value lines
/// (base_url, user_agent, wait); flags take precedence.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,

    /// Site root, e.g. https://ksk.moe
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Seconds between requests.
    #[arg(short, long, global = true)]
    pub wait: Option<u64>,

    /// Print records as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Most recent uploads.
    Latest {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// This week's most popular works.
    Popular {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Search by text and filters.
    ///
    /// The query may also be `id:{id}/{slug}` for a single work, or
    /// `bundle:{text} PARAMS:{k=v&...}` to replay a saved search as one result.
    /// Text filters take comma separated values; prepend a value with a dash
    /// (-) to exclude it.
    Search {
        #[arg(default_value = "")]
        query: String,

        #[arg(short, long, default_value_t = 1)]
        page: u32,

        #[command(flatten)]
        filters: Filters,
    },

    /// Full metadata for a work.
    Details { path: String },

    /// Chapters of a work.
    Chapters {
        path: String,

        /// Fetch upload times missing from listing entries.
        #[arg(short, long)]
        enrich: bool,
    },

    /// Image urls of a chapter.
    Pages { path: String },

    /// Open a link to the site as the equivalent search.
    Open { link: String },

    /// List search filters and how they are sent to the site.
    Filters,
}

#[derive(Debug, clap::Args)]
pub struct Filters {
    #[arg(long)]
    title: Option<String>,

    #[arg(short, long)]
    artist: Option<String>,

    #[arg(short, long)]
    circle: Option<String>,

    #[arg(short, long)]
    magazine: Option<String>,

    #[arg(long)]
    parody: Option<String>,

    #[arg(short, long)]
    tags: Option<String>,

    #[arg(long)]
    min_pages: Option<u32>,

    #[arg(long)]
    max_pages: Option<u32>,

    #[arg(short, long, value_enum)]
    sort: Option<Sort>,

    #[arg(short, long, value_enum)]
    order: Option<Order>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Sort {
    Title,
    Pages,
    Uploaded,
    Published,
    Popularity,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Order {
    Asc,
    Desc,
}

impl Opt {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl Filters {
    /// `None` when no filter was given, so the site defaults apply.
    pub fn to_filter_set(&self) -> Option<FilterSet> {
        let filters = FilterSet {
            title: self.title.clone(),
            artist: self.artist.clone(),
            circle: self.circle.clone(),
            magazine: self.magazine.clone(),
            parody: self.parody.clone(),
            tags: self.tags.clone(),
            min_pages: self.min_pages,
            max_pages: self.max_pages,
            sort: self.sort.map(|sort| match sort {
                Sort::Title => SortField::Title,
                Sort::Pages => SortField::Pages,
                Sort::Uploaded => SortField::UploadedDate,
                Sort::Published => SortField::PublishedDate,
                Sort::Popularity => SortField::Popularity,
            }),
            order: self.order.map(|order| match order {
                Order::Asc => SortOrder::Ascending,
                Order::Desc => SortOrder::Descending,
            }),
        };

        Some(filters).filter(|filters| *filters != FilterSet::default())
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Command, Opt};
    use crate::source::koushoku::{FilterSet, SortField, SortOrder};

    #[test]
    fn options_are_consistent() {
        Opt::command().debug_assert();
    }

    #[test]
    fn search_flags_become_filters() {
        let opt = Opt::try_parse_from([
            "koushoku", "search", "series", "-a", "someone", "--min-pages", "20", "--sort",
            "popularity", "--order", "desc",
        ])
        .unwrap();

        let Command::Search { query, filters, .. } = opt.command else {
            panic!("expected search");
        };
        assert_eq!("series", query);
        assert_eq!(
            Some(FilterSet {
                artist: Some("someone".into()),
                min_pages: Some(20),
                sort: Some(SortField::Popularity),
                order: Some(SortOrder::Descending),
                ..Default::default()
            }),
            filters.to_filter_set()
        );
    }

    #[test]
    fn bare_search_uses_site_defaults() {
        let opt = Opt::try_parse_from(["koushoku", "search", "series"]).unwrap();
        let Command::Search { filters, .. } = opt.command else {
            panic!("expected search");
        };
        assert!(filters.to_filter_set().is_none());
    }
}
