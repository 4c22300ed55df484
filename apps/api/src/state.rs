use std::sync::Arc;

use crate::config::Config;
use crate::profile::source::ProfileFactSource;
use crate::store::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Append-only analysis records. Default: JsonFileStore at ANALYSES_PATH.
    pub store: Arc<dyn AnalysisStore>,
    /// Where profile facts come from. Default: SimulatedProfileSource.
    pub profile_source: Arc<dyn ProfileFactSource>,
    pub config: Config,
}
