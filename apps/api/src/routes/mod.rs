pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/resume",
            post(handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/sessions/:id/skills",
            post(handlers::handle_add_skills),
        )
        .route(
            "/api/v1/sessions/:id/role",
            put(handlers::handle_select_role),
        )
        .route(
            "/api/v1/sessions/:id/analysis",
            post(handlers::handle_analyze),
        )
        .with_state(state)
}
