mod health;
pub mod models;
mod monitor;

use actix_web::web::{self, ServiceConfig};

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(health::health_check)
        .service(monitor::check)
        // anything that is not a POST gets the empty form
        .service(web::resource("/").to(monitor::index));
}
