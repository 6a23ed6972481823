use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{AppState, ChainResponse, CommitResponse};

/// Mine the pending buffer and persist it as the next block. The buffer
/// may be empty; the resulting block still proves work.
#[post("/commit/")]
pub async fn commit_block(state: web::Data<AppState>) -> impl Responder {
    let mut engine = state.engine.lock().expect("mutex poisoned");
    match engine.commit() {
        Ok(block) => {
            info!(
                "POST /commit/ - sealed block {} (nonce={})",
                block.index, block.nonce
            );
            HttpResponse::Ok().json(CommitResponse {
                index: block.index,
                hash: block.hash,
                nonce: block.nonce,
            })
        }
        Err(err) => {
            warn!("POST /commit/ - failed: {err}");
            HttpResponse::InternalServerError().body(err.to_string())
        }
    }
}

/// Chain summary as seen by the engine: applied height, the index replay
/// halted on (if any) and the difficulty target in force.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let engine = state.engine.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ChainResponse {
        height: engine.height(),
        rejected: engine.rejected(),
        target: engine.target().to_string(),
        accounts: engine.ledger().len(),
        pending: engine.pending().len(),
    })
}
