use sha2::{Digest, Sha256};

use crate::error::ChainError;

/// Lowercase hex SHA-256 of `data`. The only digest primitive in the crate.
pub fn digest(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    hex::encode(hasher.finalize())
}

/// A satisfying (nonce, digest) pair found by `search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seal {
    pub nonce: u64,
    pub hash: String,
}

/// One step of the nonce search: digest `payload` followed by the decimal
/// nonce, returning the digest iff its prefix matches `target`.
pub fn try_nonce(payload: &str, nonce: u64, target: &str) -> Option<String> {
    let hash = digest(&format!("{payload}{nonce}"));
    hash.starts_with(target).then_some(hash)
}

/// Brute-force the first satisfying nonce in increasing order from 0.
///
/// With `limit = None` the search is unbounded (expected ~16^len(target)
/// digests). With a cap it fails with `Exhausted` once `cap` nonces have
/// been tried.
pub fn search(payload: &str, target: &str, limit: Option<u64>) -> Result<Seal, ChainError> {
    let mut nonce = 0;
    loop {
        if let Some(cap) = limit {
            if nonce >= cap {
                return Err(ChainError::Exhausted { tried: cap });
            }
        }
        if let Some(hash) = try_nonce(payload, nonce, target) {
            return Ok(Seal { nonce, hash });
        }
        nonce += 1;
    }
}
