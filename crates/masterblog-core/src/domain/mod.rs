//! Domain entities - the core business objects.

mod post;

pub use post::{
    DATE_FORMAT, Post, PostDraft, PostFilter, PostPatch, SortDirection, SortField, parse_date,
    sort_posts,
};
