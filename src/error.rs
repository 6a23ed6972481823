use std::io;

use thiserror::Error;

/// Failures surfaced by the chain engine.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The record store was unavailable or refused a write. Fatal while
    /// bootstrapping genesis, reported-and-retryable for later commits.
    #[error("record store failure: {0}")]
    Storage(#[from] io::Error),

    /// A stored record failed digest or difficulty validation.
    #[error("block {index} failed validation")]
    Rejected { index: u64 },

    /// Admission refused: the sender cannot cover the transfer against the
    /// current ledger.
    #[error("insufficient funds: {sender} has {balance}, transfer needs {amount}")]
    InsufficientFunds {
        sender: String,
        balance: i64,
        amount: u64,
    },

    /// A bounded nonce search ended without meeting the difficulty target.
    #[error("proof-of-work search exhausted after {tried} nonces")]
    Exhausted { tried: u64 },
}
