//! Post CRUD handlers.

use std::str::FromStr;

use actix_web::{HttpResponse, web};

use masterblog_core::domain::{
    self, Post, PostDraft, PostFilter, PostPatch, SortDirection, SortField,
};
use masterblog_shared::dto::{
    CreatePostRequest, ListPostsQuery, PostResponse, SearchPostsQuery, UpdatePostRequest,
};
use masterblog_shared::{ErrorResponse, MessageResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        date: post.date.format(domain::DATE_FORMAT).to_string(),
    }
}

/// List posts with optional free-text search and sorting.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Matching posts", body = [PostResponse]),
        (status = 400, description = "Invalid sort field or direction", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse)
    )
)]
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    // Direction is validated even without a sort field
    let direction = match query.direction.as_deref() {
        Some(d) => SortDirection::from_str(d)?,
        None => SortDirection::default(),
    };

    let mut posts = state.posts.list().await?;

    if let Some(term) = query.search.as_deref() {
        posts.retain(|p| p.matches_term(term));
    }

    if let Some(sort) = query.sort.as_deref() {
        let field = SortField::from_str(sort)?;
        domain::sort_posts(&mut posts, field, direction);
    }

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Create a new post. All fields are required.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Missing fields or invalid date", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse)
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Empty strings count as missing so the error names every bad field
    let mut missing = Vec::new();
    if req.title.as_deref().is_none_or(|s| s.trim().is_empty()) {
        missing.push("title");
    }
    if req.content.as_deref().is_none_or(|s| s.trim().is_empty()) {
        missing.push("content");
    }
    if req.author.as_deref().is_none_or(|s| s.trim().is_empty()) {
        missing.push("author");
    }
    if req.date.as_deref().is_none_or(|s| s.trim().is_empty()) {
        missing.push("date");
    }
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Missing required fields: {}.",
            missing.join(", ")
        )));
    }

    let date = domain::parse_date(req.date.as_deref().unwrap_or_default())?;

    let draft = PostDraft {
        title: req.title.unwrap_or_default(),
        content: req.content.unwrap_or_default(),
        author: req.author.unwrap_or_default(),
        date,
    };

    let post = state.posts.create(draft).await?;
    tracing::info!(post_id = post.id, "Created post");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// Partially update a post. Omitted fields are left unchanged.
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated post", body = PostResponse),
        (status = 400, description = "Invalid date", body = ErrorResponse),
        (status = 404, description = "Unknown post id", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse)
    )
)]
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    // Unknown id wins over a bad date
    if state.posts.find_by_id(id).await?.is_none() {
        return Err(AppError::NotFound("Post not found.".to_string()));
    }

    let date = req.date.as_deref().map(domain::parse_date).transpose()?;

    let patch = PostPatch {
        title: req.title,
        content: req.content,
        author: req.author,
        date,
    };

    match state.posts.update(id, patch).await? {
        Some(post) => {
            tracing::info!(post_id = id, "Updated post");
            Ok(HttpResponse::Ok().json(to_response(post)))
        }
        None => Err(AppError::NotFound("Post not found.".to_string())),
    }
}

/// Delete a post by id.
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 404, description = "Unknown post id", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if !state.posts.delete(id).await? {
        return Err(AppError::NotFound("Post not found.".to_string()));
    }

    tracing::info!(post_id = id, "Deleted post");
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "Post with id {id} has been deleted successfully."
    ))))
}

/// Search posts by per-field substring filters, combined with AND.
#[utoipa::path(
    get,
    path = "/api/posts/search",
    tag = "posts",
    params(SearchPostsQuery),
    responses(
        (status = 200, description = "Posts matching every provided filter", body = [PostResponse]),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse)
    )
)]
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let filter = PostFilter {
        title: query.title,
        content: query.content,
        author: query.author,
        date: query.date,
    };

    let mut posts = state.posts.list().await?;
    if !filter.is_empty() {
        posts.retain(|p| p.matches_filter(&filter));
    }

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}
