mod analysis;
mod clients;
mod config;
mod errors;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::catalog::Catalog;
use crate::clients::courses::{CourseProvider, HttpCourseProvider};
use crate::clients::parser::{HttpResumeParser, ResumeParser};
use crate::config::Config;
use crate::routes::build_router;
use crate::session::store::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Booster API v{}", env!("CARGO_PKG_VERSION"));

    // The skill catalog is built once here and never mutated afterwards.
    let catalog = Arc::new(Catalog::builtin());
    info!(
        "Skill catalog loaded: {} roles, {} general skills",
        catalog.roles().len(),
        catalog.general_skills().len()
    );

    // Upstream clients, both bounded by the same timeout policy.
    let timeout = Duration::from_secs(config.upstream_timeout_secs);
    let parser: Arc<dyn ResumeParser> =
        Arc::new(HttpResumeParser::new(config.parser_base_url.clone(), timeout));
    let courses: Arc<dyn CourseProvider> =
        Arc::new(HttpCourseProvider::new(config.course_base_url.clone(), timeout));
    info!(
        "Upstream clients initialized (timeout: {}s)",
        config.upstream_timeout_secs
    );

    // Build app state
    let state = AppState {
        catalog,
        sessions: SessionStore::new(),
        parser,
        courses,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
