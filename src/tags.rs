use std::fmt::{self, Display};

use serde::{Serialize, Serializer};

/// The category a tag is filed under.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Namespace {
    Artist,
    Group,
    Parody,
    Magazine,
    Tag,
}

impl Namespace {
    fn prefix(self) -> &'static str {
        match self {
            Namespace::Artist => "artist",
            Namespace::Group => "group",
            Namespace::Parody => "parody",
            Namespace::Magazine => "magazine",
            Namespace::Tag => "tag",
        }
    }

    /// Artists and circles keep the order the page lists them in; everything
    /// else is alphabetized.
    fn is_sorted(self) -> bool {
        !matches!(self, Namespace::Artist | Namespace::Group)
    }
}

/// A flat, lower-cased list of namespaced tags such as `artist:foo`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tags {
    sep: String,
    values: Vec<String>,
}

impl Tags {
    pub fn builder() -> TagsBuilder {
        TagsBuilder::default()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct TagsBuilder {
    values: Vec<String>,
}

impl TagsBuilder {
    /// Appends a group of tags. Groups land in the order they are added.
    pub fn group<I, S>(mut self, namespace: Namespace, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Sort before folding case, the way the site's own tag lists read.
        let mut group: Vec<_> = names
            .into_iter()
            .map(|name| format!("{}:{}", namespace.prefix(), name.as_ref()))
            .collect();

        if namespace.is_sorted() {
            group.sort();
        }

        self.values
            .extend(group.into_iter().map(|tag| tag.to_lowercase()));
        self
    }

    pub fn build(self) -> Tags {
        Tags {
            sep: String::from(", "),
            values: self.values,
        }
    }
}

impl Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags = self.values.iter();

        if let Some(tag) = tags.next() {
            f.write_str(tag)?;
        }

        for tag in tags {
            write!(f, "{}{}", self.sep, tag)?;
        }

        Ok(())
    }
}

impl Serialize for Tags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values())
    }
}
