use log::warn;
use serde::{Deserialize, Serialize};

use crate::chain::{GENESIS_HASH, GENESIS_NONCE, pow};
use crate::transaction::Transaction;

/// One unit of the append-only record sequence: zero or more transactions
/// plus the proof-of-work seal. Blocks are not hash-linked to each other;
/// each one independently satisfies the difficulty target and chain order
/// is purely positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub nonce: u64,
    pub hash: String,
}

impl Block {
    /// The index-0 sentinel block: no transactions, no mining requirement.
    pub fn genesis() -> Self {
        Self {
            index: 0,
            transactions: Vec::new(),
            nonce: GENESIS_NONCE,
            hash: GENESIS_HASH.to_string(),
        }
    }

    /// Canonical digest preimage for a transaction section: one
    /// newline-terminated line per transaction, then the blank delimiter
    /// line. The mined preimage is this payload plus the decimal nonce.
    pub fn payload(transactions: &[Transaction]) -> String {
        let mut out = String::new();
        for tx in transactions {
            out.push_str(&tx.to_line());
            out.push('\n');
        }
        out.push('\n');
        out
    }

    /// Persisted record text. Genesis is the degenerate two-line form
    /// (sentinel hash, then nonce); every other block is its payload
    /// followed by the `hash nonce` line.
    pub fn to_record(&self) -> String {
        if self.index == 0 {
            format!("{}\n{}", self.hash, self.nonce)
        } else {
            format!(
                "{}{} {}",
                Self::payload(&self.transactions),
                self.hash,
                self.nonce
            )
        }
    }
}

/// A non-genesis record parsed back from the store, before digest
/// verification. `payload` holds exactly the bytes the digest must cover:
/// the raw lines that parsed as transactions plus the delimiter, with
/// malformed lines skipped.
#[derive(Debug)]
pub struct ParsedRecord {
    pub transactions: Vec<Transaction>,
    pub payload: String,
    pub hash: String,
    pub nonce: u64,
    nonce_text: String,
}

impl ParsedRecord {
    /// Parse transaction lines up to the first blank line, then the
    /// `hash nonce` line. Returns `None` when the record has no delimiter
    /// or the final line is structurally wrong.
    pub fn parse(record: &str) -> Option<Self> {
        let mut lines = record.lines();
        let mut transactions = Vec::new();
        let mut payload = String::new();
        let mut delimited = false;

        for line in lines.by_ref() {
            if line.is_empty() {
                delimited = true;
                break;
            }
            match Transaction::parse_line(line) {
                Some(tx) => {
                    transactions.push(tx);
                    payload.push_str(line);
                    payload.push('\n');
                }
                None => warn!("skipping malformed transaction line: {line:?}"),
            }
        }
        if !delimited {
            return None;
        }
        payload.push('\n');

        let tail = lines.next()?;
        let mut fields = tail.split_whitespace();
        let hash = fields.next()?.to_string();
        let nonce_text = fields.next()?.to_string();
        if fields.next().is_some() {
            return None;
        }
        let nonce = nonce_text.parse().ok()?;

        Some(Self {
            transactions,
            payload,
            hash,
            nonce,
            nonce_text,
        })
    }

    /// Digest and difficulty check. The digest is recomputed over the
    /// nonce exactly as it was stored, not its re-encoded form.
    pub fn verify(&self, target: &str) -> bool {
        let recomputed = pow::digest(&format!("{}{}", self.payload, self.nonce_text));
        recomputed == self.hash && self.hash.starts_with(target)
    }

    pub fn into_block(self, index: u64) -> Block {
        Block {
            index,
            transactions: self.transactions,
            nonce: self.nonce,
            hash: self.hash,
        }
    }
}
