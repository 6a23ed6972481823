use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::chain::ChainEngine;
use crate::store::DirStore;
use crate::transaction::Transaction;

/// Shared application state: the chain engine behind a single lock, which
/// serializes every operator command end to end (balance check through
/// buffer mutation, and mine through persist and apply).
pub struct AppState {
    pub engine: Mutex<ChainEngine<DirStore>>,
}

impl AppState {
    pub fn new(engine: ChainEngine<DirStore>) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }
}

/* ---------- Transaction API models ---------- */

#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: String,
    pub receiver: String,
    pub amount: u64,
}

#[derive(Serialize)]
pub struct NewTxResponse {
    pub pending: usize,
}

#[derive(Serialize)]
pub struct PendingResponse {
    pub size: usize,
    pub transactions: Vec<Transaction>,
}

/* ---------- Chain API models ---------- */

#[derive(Serialize)]
pub struct CommitResponse {
    pub index: u64,
    pub hash: String,
    pub nonce: u64,
}

#[derive(Serialize)]
pub struct ChainResponse {
    pub height: u64,
    pub rejected: Option<u64>,
    pub target: String,
    pub accounts: usize,
    pub pending: usize,
}

/* ---------- Account API models ---------- */

#[derive(Serialize)]
pub struct BalanceResponse {
    pub account: String,
    pub balance: i64,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub account: String,
    pub balance: i64,
}
