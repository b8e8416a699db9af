//! Advanced search parameters.

use serde::Serialize;

pub static FILTER_HELP: &[&str] = &[
    "Separate tags with commas (,)",
    "Prepend with dash (-) to exclude",
];

/// Sort fields, in the order the site numbers them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum SortField {
    Title,
    Pages,
    UploadedDate,
    PublishedDate,
    Popularity,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Title,
        SortField::Pages,
        SortField::UploadedDate,
        SortField::PublishedDate,
        SortField::Popularity,
    ];

    pub fn index(self) -> u32 {
        self as u32
    }

    /// Each field occupies its own bit: `2^index`.
    pub fn code(self) -> u32 {
        1 << self.index()
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Title => "Title",
            SortField::Pages => "Pages",
            SortField::UploadedDate => "Uploaded Date",
            SortField::PublishedDate => "Published Date",
            SortField::Popularity => "Popularity",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

    pub fn index(self) -> u32 {
        self as u32
    }

    /// One-based.
    pub fn code(self) -> u32 {
        self.index() + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

/// Typed search filters. Anything left as `None` is left out of the request.
///
/// Text filters take comma separated values; a leading `-` on a value
/// excludes it rather than requiring it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FilterSet {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub circle: Option<String>,
    pub magazine: Option<String>,
    pub parody: Option<String>,
    pub tags: Option<String>,
    pub min_pages: Option<u32>,
    pub max_pages: Option<u32>,
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
}

impl FilterSet {
    /// What the site's own search form starts from.
    pub fn site_default() -> Self {
        Self {
            sort: Some(SortField::UploadedDate),
            order: Some(SortOrder::Ascending),
            ..Default::default()
        }
    }

    /// `(label, parameter, value)` for every filter, in the site's form order.
    fn fields(&self) -> [(&'static str, &'static str, Option<String>); 10] {
        [
            ("Title", "title", self.title.clone()),
            ("Artist", "a", self.artist.clone()),
            ("Circle", "c", self.circle.clone()),
            ("Magazine", "m", self.magazine.clone()),
            ("Parody", "p", self.parody.clone()),
            ("Tags", "t", self.tags.clone()),
            ("Min. Pages", "ps", self.min_pages.map(|n| n.to_string())),
            ("Max. Pages", "pe", self.max_pages.map(|n| n.to_string())),
            ("Sort", "sort", self.sort.map(|s| s.code().to_string())),
            ("Order", "order", self.order.map(|o| o.code().to_string())),
        ]
    }

    /// Filter labels paired with their parameter names.
    pub fn labels() -> impl Iterator<Item = (&'static str, &'static str)> {
        FilterSet::default()
            .fields()
            .into_iter()
            .map(|(label, param, _)| (label, param))
    }
}

/// Builds the advanced search query for `text` under `filters`.
///
/// `s` and `adv=1` always come first; filters follow in form order.
pub fn build(text: &str, filters: &FilterSet) -> Vec<(&'static str, String)> {
    let mut params = vec![("s", text.to_string()), ("adv", String::from("1"))];
    params.extend(
        filters
            .fields()
            .into_iter()
            .filter_map(|(_, param, value)| Some((param, value?))),
    );
    params
}

#[cfg(test)]
mod tests {
    use super::{build, FilterSet, SortField, SortOrder};

    fn value<'a>(params: &'a [(&str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn sort_fields_encode_as_powers_of_two() {
        let expected = ["1", "2", "4", "8", "16"];
        for (field, expected) in SortField::ALL.into_iter().zip(expected) {
            let filters = FilterSet {
                sort: Some(field),
                ..Default::default()
            };
            assert_eq!(Some(expected), value(&build("", &filters), "sort"));
        }
    }

    #[test]
    fn sort_order_is_one_based() {
        for (order, expected) in SortOrder::ALL.into_iter().zip(["1", "2"]) {
            let filters = FilterSet {
                order: Some(order),
                ..Default::default()
            };
            assert_eq!(Some(expected), value(&build("", &filters), "order"));
        }
    }

    #[test]
    fn unset_filters_are_omitted() {
        let params = build("query", &FilterSet::default());
        assert_eq!(
            vec![("s", String::from("query")), ("adv", String::from("1"))],
            params
        );
    }

    #[test]
    fn filters_use_site_parameter_names() {
        let filters = FilterSet {
            title: Some("t".into()),
            artist: Some("a".into()),
            circle: Some("c".into()),
            magazine: Some("m".into()),
            parody: Some("p".into()),
            tags: Some("x, -y".into()),
            min_pages: Some(10),
            max_pages: Some(200),
            sort: Some(SortField::Popularity),
            order: Some(SortOrder::Descending),
        };

        let keys: Vec<_> = build("q", &filters).into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            vec!["s", "adv", "title", "a", "c", "m", "p", "t", "ps", "pe", "sort", "order"],
            keys
        );
        assert_eq!(Some("x, -y"), value(&build("q", &filters), "t"));
        assert_eq!(Some("200"), value(&build("q", &filters), "pe"));
    }

    #[test]
    fn site_default_sorts_by_upload_date() {
        let params = build("", &FilterSet::site_default());
        assert_eq!(Some("4"), value(&params, "sort"));
        assert_eq!(Some("1"), value(&params, "order"));
        assert_eq!(None, value(&params, "title"));
        assert_eq!(10, FilterSet::labels().count());
    }
}
