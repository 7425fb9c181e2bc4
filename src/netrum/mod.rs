pub mod client;
pub mod model;

use async_trait::async_trait;

use crate::address::Address;
use crate::error::UpstreamError;

pub use client::NetrumClient;
pub use model::{ClaimResponse, LiveLogResponse};

/// Mining API root; `live-log/` and `claim/` hang off it.
pub const DEFAULT_API_URL: &str = "https://api.v2.netrumlabs.com/api/node/mining";

pub const LIVE_LOG_ENDPOINT: &str = "live-log";
pub const CLAIM_ENDPOINT: &str = "claim";

/// Token amounts are wei-scaled (1 NPT = 1e18 units).
pub const WEI_PER_TOKEN: f64 = 1e18;

/// The two upstream calls a check needs. Injected into the handlers so
/// tests can swap the network out.
#[async_trait]
pub trait MiningApi: Send + Sync {
    async fn live_info(&self, address: &Address) -> Result<LiveLogResponse, UpstreamError>;

    async fn claim(&self, address: &Address) -> Result<ClaimResponse, UpstreamError>;
}
