use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::netrum::MiningApi;

/// Shared, read-only application state. No per-request data lives here.
pub struct AppState {
    pub mining_api: Arc<dyn MiningApi>,
    /// Gap between the two claim samples.
    pub sample_delay: Duration,
}

/* ---------- Form Models ---------- */

#[derive(Deserialize)]
pub struct CheckForm {
    #[serde(default)]
    pub address: String,
}
