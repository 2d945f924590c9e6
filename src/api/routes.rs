use axum::{
    routing::{get, post, put},
    Router,
};

use super::{handlers, AppState};

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/quiz",
            get(handlers::get_quiz).delete(handlers::reset_quiz),
        )
        .route("/quiz/options", get(handlers::get_options))
        .route("/quiz/genres", post(handlers::toggle_genre))
        .route("/quiz/length", put(handlers::set_length))
        .route("/quiz/query", put(handlers::update_query))
        .route("/quiz/candidates", get(handlers::get_candidates))
        .route("/quiz/shows", post(handlers::select_show))
        .route("/quiz/submit", post(handlers::submit_quiz))
        .route("/profile", get(handlers::get_profile))
}
