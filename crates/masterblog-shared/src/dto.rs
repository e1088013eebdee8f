//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A post as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Calendar date in `YYYY-MM-DD` format.
    pub date: String,
}

/// Request to create a post. All fields are required; optionals exist
/// so missing ones can be named in the error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    /// Calendar date in `YYYY-MM-DD` format.
    pub date: Option<String>,
}

/// Partial update. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    /// Calendar date in `YYYY-MM-DD` format.
    pub date: Option<String>,
}

/// Query parameters for `GET /api/posts`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsQuery {
    /// Sort field: `title`, `content`, `author` or `date`.
    pub sort: Option<String>,
    /// Sort direction: `asc` (default) or `desc`.
    pub direction: Option<String>,
    /// Free-text search over title, content, author and date.
    pub search: Option<String>,
}

/// Query parameters for `GET /api/posts/search`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchPostsQuery {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}
