use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{AppState, NewTxRequest, NewTxResponse, PendingResponse};
use crate::error::ChainError;

/// Admit a transaction into the pending buffer.
#[post("/tx/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let sender = body.sender.trim();
    let receiver = body.receiver.trim();
    if sender.is_empty() || receiver.is_empty() {
        return HttpResponse::BadRequest().body("sender and receiver are required");
    }

    let mut engine = state.engine.lock().expect("mutex poisoned");
    match engine.admit(sender, receiver, body.amount) {
        Ok(()) => {
            info!("POST /tx/ - admitted {sender} -> {receiver} ({})", body.amount);
            HttpResponse::Ok().json(NewTxResponse {
                pending: engine.pending().len(),
            })
        }
        Err(err @ ChainError::InsufficientFunds { .. }) => {
            warn!("POST /tx/ - rejected: {err}");
            HttpResponse::BadRequest().body(err.to_string())
        }
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

/// Snapshot of the pending buffer.
#[get("/pending/")]
pub async fn get_pending(state: web::Data<AppState>) -> impl Responder {
    let engine = state.engine.lock().expect("mutex poisoned");
    let transactions = engine.pending().to_vec();
    HttpResponse::Ok().json(PendingResponse {
        size: transactions.len(),
        transactions,
    })
}
