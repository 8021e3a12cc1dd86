use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// The skill vocabulary is process-wide static state and is not carried here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
