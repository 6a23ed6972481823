use actix_web::{HttpResponse, Responder, get, post, web};
use log::info;

use super::models::{AppState, BalanceResponse, RegisterRequest, RegisterResponse};

#[get("/balance/{account}/")]
pub async fn get_balance(state: web::Data<AppState>, path: web::Path<(String,)>) -> impl Responder {
    let account = path.into_inner().0;

    let engine = state.engine.lock().expect("mutex poisoned");
    match engine.ledger().balance(&account) {
        Some(balance) => HttpResponse::Ok().json(BalanceResponse { account, balance }),
        None => HttpResponse::NotFound().body(format!("account {account} does not exist")),
    }
}

/// Register a new account with a zero balance.
#[post("/account/")]
pub async fn register_account(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> impl Responder {
    let name = body.name.trim().to_string();
    if name.is_empty() {
        return HttpResponse::BadRequest().body("account name required");
    }

    let mut engine = state.engine.lock().expect("mutex poisoned");
    if engine.register_account(&name) {
        info!("POST /account/ - registered {name}");
        HttpResponse::Ok().json(RegisterResponse {
            account: name,
            balance: 0,
        })
    } else {
        HttpResponse::Conflict().body(format!("account {name} already exists"))
    }
}
