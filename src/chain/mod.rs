pub mod block;
pub mod engine;
pub mod pow;

pub use block::Block;
pub use engine::{ChainEngine, ReplayReport};

/// Sentinel hash stored in the genesis record. One character longer than a
/// SHA-256 hex digest, so it can never collide with a computed one.
pub const GENESIS_HASH: &str =
    "00000000000000000000000000000000000000000000000000000000000000000";

/// Nonce recorded for the genesis block.
pub const GENESIS_NONCE: u64 = 0;

/// Default number of leading zero hex characters a mined digest must have.
pub const DEFAULT_TARGET_PREFIX_LEN: usize = 4;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Required digest prefix, e.g. `"0000"`. Expected search work grows
    /// roughly 16x per extra character.
    pub target: String,
    /// Optional cap on nonce attempts per mined block. `None` leaves the
    /// search unbounded.
    pub max_nonce_attempts: Option<u64>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::with_zero_target(DEFAULT_TARGET_PREFIX_LEN)
    }
}

impl ChainConfig {
    /// Target of `len` zero hex characters, the conventional difficulty form.
    pub fn with_zero_target(len: usize) -> Self {
        Self {
            target: "0".repeat(len),
            max_nonce_attempts: None,
        }
    }
}
