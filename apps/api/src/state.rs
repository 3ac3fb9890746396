use std::sync::Arc;

use crate::analysis::catalog::Catalog;
use crate::clients::courses::CourseProvider;
use crate::clients::parser::ResumeParser;
use crate::config::Config;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Static role/skill catalog. Built once at startup, never mutated.
    pub catalog: Arc<Catalog>,
    /// In-memory session store. Nothing persists across restarts.
    pub sessions: SessionStore,
    pub parser: Arc<dyn ResumeParser>,
    pub courses: Arc<dyn CourseProvider>,
    /// Kept for future per-request use; the clients bake their settings in at startup.
    #[allow(dead_code)]
    pub config: Config,
}
