//! Tutorank HTTP server
//!
//! `GET /search?q=<topic>` returns the ranked tutorials and curriculum for a topic.

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{HttpResponse, Responder, http::header::ContentType, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use tutorank_core::{RankingPipeline, YouTubeClient};

/// Application state shared across all handlers
pub struct AppState {
    pub pipeline: RankingPipeline<YouTubeClient>,
}

impl AppState {
    pub fn new(pipeline: RankingPipeline<YouTubeClient>) -> Self {
        Self { pipeline }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "tutorank-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Rank tutorials for `q`. Upstream search/statistics failures become a plain 500.
pub async fn search(state: web::Data<AppState>, query: web::Query<SearchQuery>) -> HttpResponse {
    match state.pipeline.rank(&query.q).await {
        Ok(results) => HttpResponse::Ok().json(results),
        Err(e) => {
            error!(topic = %query.q, error = %e, "search failed");
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body("Server error")
        }
    }
}

/// Permissive CORS, the frontend may be served from anywhere
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Serve `dir` at `/` with `index.html` as the directory index.
/// Register after [`configure_routes`] so it never shadows the API.
pub fn static_files(dir: &str) -> Files {
    Files::new("/", dir).index_file("index.html")
}

/// Configure application routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/search", web::get().to(search));
}
