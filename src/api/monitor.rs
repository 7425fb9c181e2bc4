use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, post, web};
use log::{info, warn};
use ruint::aliases::U256;
use std::time::Duration;

use super::models::{AppState, CheckForm};
use crate::address::Address;
use crate::error::UpstreamError;
use crate::netrum::MiningApi;
use crate::page::{self, PageView};

pub const INVALID_ADDRESS: &str = "❌ Invalid EVM address";

/// Empty form, served for every method except POST.
pub async fn index() -> HttpResponse {
    html(&PageView::default())
}

/// Check a node address and render the verdict. Always 200; failures are
/// reported inside the page.
#[post("/")]
pub async fn check(
    state: web::Data<AppState>,
    form: Option<web::Form<CheckForm>>,
) -> impl Responder {
    let raw = form.map(|f| f.into_inner().address).unwrap_or_default();
    let view = run_check(state.mining_api.as_ref(), state.sample_delay, &raw).await;
    html(&view)
}

fn html(view: &PageView) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page::render(view))
}

/// Validate `raw`, then sample the node: live-log once, claim twice
/// `sample_delay` apart.
pub async fn run_check(api: &dyn MiningApi, sample_delay: Duration, raw: &str) -> PageView {
    let Some(address) = Address::parse(raw) else {
        return PageView::failure(INVALID_ADDRESS, raw);
    };

    match sample(api, sample_delay, &address).await {
        Ok((live_status, activity)) => {
            info!(
                "CHECK {} before={} after={} mining={}",
                address,
                activity.before,
                activity.after,
                activity.is_mining()
            );
            PageView {
                live_status,
                mining: Some(activity.is_mining()),
                address: address.to_string(),
            }
        }
        Err(err) => {
            warn!("CHECK {} failed: {}", address, err);
            PageView::failure(format!("❌ Error: {err}"), raw)
        }
    }
}

/// Two claim readings of the cumulative mined amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub before: U256,
    pub after: U256,
}

impl Activity {
    pub fn is_mining(&self) -> bool {
        self.after > self.before
    }
}

async fn sample(
    api: &dyn MiningApi,
    sample_delay: Duration,
    address: &Address,
) -> Result<(String, Activity), UpstreamError> {
    let live = api.live_info(address).await?;
    let live_status = live.status_line();
    if !live.is_ok() {
        warn!("live-log rejected {}: {}", address, live.failure_reason());
    }

    let before = api.claim(address).await?.mined_tokens()?;
    tokio::time::sleep(sample_delay).await;
    let after = api.claim(address).await?.mined_tokens()?;

    Ok((live_status, Activity { before, after }))
}
