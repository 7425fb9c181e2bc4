mod address;
mod api;
mod config;
mod error;
mod netrum;
mod page;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use env_logger::Env;
use std::sync::Arc;

use api::AppState;
use config::Config;
use netrum::NetrumClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let client = NetrumClient::new(&config.api_url, config.upstream_timeout)
        .map_err(std::io::Error::other)?;

    println!(
        "📡 Starting Netrum mining monitor at http://{}:{}",
        config.host, config.port
    );
    log::debug!(
        "upstream={} sample_delay={:?} timeout={:?}",
        config.api_url,
        config.sample_delay,
        config.upstream_timeout
    );

    let state = web::Data::new(AppState {
        mining_api: Arc::new(client),
        sample_delay: config.sample_delay,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(api::init_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
