//! API handlers for the bookstore REST endpoints

pub mod books;
pub mod cors;
pub mod health;
pub mod openapi;

use axum::{routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::{config::AppConfig, error::handle_panic, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/api/books", get(books::list_books).post(books::create_book))
        .route("/api/books/", get(books::list_books).post(books::create_book))
        .route("/api/books/:id", get(books::get_book).delete(books::delete_book))
        .with_state(state);

    let app = Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router());

    with_middleware(app, &config)
}

/// Panic recovery, request logging and CORS, innermost first
fn with_middleware(router: Router, config: &AppConfig) -> Router {
    // Span carries method and path, the response event adds status and latency
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace)
        .layer(cors::cors_layer(&config.cors))
}
