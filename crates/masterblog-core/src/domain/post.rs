use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Textual format for post dates, e.g. `2024-03-17`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Post entity - a single blog entry.
///
/// The id is assigned by the store and never changes once assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
}

impl Post {
    /// Case-insensitive free-text match over title, content and author,
    /// plus a raw substring match over the formatted date.
    pub fn matches_term(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self.author.to_lowercase().contains(&needle)
            || self.date.format(DATE_FORMAT).to_string().contains(term)
    }

    /// Field-level filter match. Every provided filter must hold.
    pub fn matches_filter(&self, filter: &PostFilter) -> bool {
        let contains_ci = |haystack: &str, needle: &str| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        };

        if let Some(title) = &filter.title {
            if !contains_ci(&self.title, title) {
                return false;
            }
        }
        if let Some(content) = &filter.content {
            if !contains_ci(&self.content, content) {
                return false;
            }
        }
        if let Some(author) = &filter.author {
            if !contains_ci(&self.author, author) {
                return false;
            }
        }
        if let Some(date) = &filter.date {
            if !self.date.format(DATE_FORMAT).to_string().contains(date.as_str()) {
                return false;
            }
        }
        true
    }
}

/// A post before the store has assigned it an id.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
}

/// Partial update: fields left as `None` are unchanged.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<NaiveDate>,
}

impl PostPatch {
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(date) = self.date {
            post.date = date;
        }
    }
}

/// Per-field substring filters, combined conjunctively.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl PostFilter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none() && self.date.is_none()
    }
}

/// Allow-listed sortable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
    Author,
    Date,
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            "author" => Ok(Self::Author),
            "date" => Ok(Self::Date),
            other => Err(DomainError::Validation(format!(
                "Invalid sort field: '{other}'. Allowed: title, content, author, date."
            ))),
        }
    }
}

/// Sort direction, ascending by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(DomainError::Validation(format!(
                "Invalid sort direction: '{other}'. Allowed: asc, desc."
            ))),
        }
    }
}

/// Parse a date in [`DATE_FORMAT`], rejecting anything else.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| DomainError::Validation("Invalid date format. Use 'YYYY-MM-DD'.".to_string()))
}

/// Stable sort by the given field. Dates compare chronologically,
/// text fields lexicographically.
pub fn sort_posts(posts: &mut [Post], field: SortField, direction: SortDirection) {
    posts.sort_by(|a, b| {
        let ordering = match field {
            SortField::Title => a.title.cmp(&b.title),
            SortField::Content => a.content.cmp(&b.content),
            SortField::Author => a.author.cmp(&b.author),
            SortField::Date => a.date.cmp(&b.date),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
