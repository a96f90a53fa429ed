use std::sync::Arc;

use crate::config::Config;
use crate::resolver::PortfolioResolver;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<PortfolioResolver>,
    pub config: Config,
}
