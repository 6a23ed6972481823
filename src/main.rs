mod api;
mod chain;
mod error;
mod ledger;
mod store;
mod transaction;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::warn;
use std::env;

use api::AppState;
use chain::{ChainConfig, ChainEngine};
use store::DirStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);
    let block_dir = env::var("BLOCK_DIR").unwrap_or_else(|_| "blocks".to_string());
    let prefix_len: usize = env::var("POW_PREFIX_LEN")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(chain::DEFAULT_TARGET_PREFIX_LEN);

    let store = DirStore::open(&block_dir)?;
    // a missing or corrupt genesis record is fatal
    let engine = ChainEngine::open(store, ChainConfig::with_zero_target(prefix_len))
        .map_err(std::io::Error::other)?;
    if let Some(index) = engine.rejected() {
        warn!("replay halted at block {index}; serving the chain up to it");
    }

    println!(
        "⛓️ Starting ledger API at http://{host}:{port} ({} blocks applied from {block_dir})",
        engine.height()
    );

    let state = web::Data::new(AppState::new(engine));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
