mod balance;
mod chain;
mod health;
pub mod models;
mod tx;

use actix_web::web::{self, ServiceConfig};

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health::health_check)
            .service(chain::get_chain)
            .service(chain::commit_block)
            .service(tx::post_transaction)
            .service(tx::get_pending)
            .service(balance::get_balance)
            .service(balance::register_account),
    );
}
