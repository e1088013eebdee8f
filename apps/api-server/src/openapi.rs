/// OpenAPI documentation for the Masterblog API.
use utoipa::OpenApi;

use masterblog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
use masterblog_shared::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Masterblog API",
        version = "0.1.0",
        description = "Minimal blog-post CRUD API with sorting, searching, per-route rate limiting and optional flat-file persistence.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://127.0.0.1:8080", description = "Development server"),
    ),
    paths(
        crate::handlers::health::health_check,
        crate::handlers::posts::list_posts,
        crate::handlers::posts::create_post,
        crate::handlers::posts::update_post,
        crate::handlers::posts::delete_post,
        crate::handlers::posts::search_posts,
    ),
    components(schemas(
        PostResponse,
        CreatePostRequest,
        UpdatePostRequest,
        ErrorResponse,
        MessageResponse,
    )),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "posts", description = "Blog post CRUD, search and sorting"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/docs/openapi.json"
    }
}
