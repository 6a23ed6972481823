use std::mem;

use log::{debug, info, warn};

use crate::chain::block::{Block, ParsedRecord};
use crate::chain::{ChainConfig, GENESIS_HASH, pow};
use crate::error::ChainError;
use crate::ledger::Ledger;
use crate::store::RecordStore;
use crate::transaction::{SYSTEM_SENDER, Transaction};

/// Outcome of replaying the record store into a fresh ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Number of applied blocks, genesis included.
    pub applied: u64,
    /// Index replay halted on, if a stored record failed validation.
    /// Everything at or beyond it is ignored.
    pub rejected: Option<u64>,
}

/// The single-writer chain engine. Owns the ledger, the pending buffer and
/// the record store, and serializes genesis bootstrap, replay, admission,
/// mining and commit against them.
pub struct ChainEngine<S: RecordStore> {
    store: S,
    config: ChainConfig,
    ledger: Ledger,
    pending: Vec<Transaction>,
    applied: u64,
    rejected: Option<u64>,
}

impl<S: RecordStore> ChainEngine<S> {
    /// Bootstrap the engine: write the genesis record into an empty store
    /// (a storage failure here is fatal), then replay every record into a
    /// fresh ledger. An invalid genesis record is also fatal; rejection of
    /// any later block just shortens the chain.
    pub fn open(store: S, config: ChainConfig) -> Result<Self, ChainError> {
        let mut engine = Self {
            store,
            config,
            ledger: Ledger::new(),
            pending: Vec::new(),
            applied: 0,
            rejected: None,
        };
        if !engine.store.exists(0) {
            engine.store.write(0, &Block::genesis().to_record())?;
            info!("genesis block written");
        }
        let report = engine.replay()?;
        if let Some(index) = report.rejected {
            warn!("chain truncated at block {index} after replay");
        }
        Ok(engine)
    }

    /// Rebuild the ledger by validating every stored record in index
    /// order. Halts normally at the first missing index, or early at the
    /// first invalid one. Errors only on storage failure or an invalid
    /// genesis record.
    pub fn replay(&mut self) -> Result<ReplayReport, ChainError> {
        self.ledger = Ledger::new();
        let mut index = 0;
        let report = loop {
            let Some(record) = self.store.read(index)? else {
                debug!("no record at index {index}, end of chain");
                break ReplayReport {
                    applied: index,
                    rejected: None,
                };
            };
            if index == 0 {
                if record.lines().next() != Some(GENESIS_HASH) {
                    return Err(ChainError::Rejected { index: 0 });
                }
                debug!("genesis hash validated");
            } else {
                match ParsedRecord::parse(&record) {
                    Some(parsed) if parsed.verify(&self.config.target) => {
                        let block = parsed.into_block(index);
                        debug!(
                            "applied block {index} ({} transactions)",
                            block.transactions.len()
                        );
                        self.ledger.apply(&block.transactions);
                    }
                    _ => {
                        warn!("block {index} failed validation, halting replay");
                        break ReplayReport {
                            applied: index,
                            rejected: Some(index),
                        };
                    }
                }
            }
            index += 1;
        };
        self.applied = report.applied;
        self.rejected = report.rejected;
        Ok(report)
    }

    /// Admit a transaction into the pending buffer.
    ///
    /// The solvency check is advisory and runs against the current ledger
    /// only: it is not re-verified at commit time, so several admissions
    /// in one buffer may jointly overdraw the sender.
    pub fn admit(&mut self, sender: &str, receiver: &str, amount: u64) -> Result<(), ChainError> {
        if sender != SYSTEM_SENDER {
            let balance = self.ledger.balance(sender);
            let covered = matches!(balance, Some(b) if b >= 0 && b as u64 >= amount);
            if !covered {
                warn!("admission refused: {sender} cannot cover {amount}");
                return Err(ChainError::InsufficientFunds {
                    sender: sender.to_string(),
                    balance: balance.unwrap_or(0),
                    amount,
                });
            }
        }
        self.pending.push(Transaction::new(sender, receiver, amount));
        Ok(())
    }

    /// Mine the pending buffer and persist it as the next block. An empty
    /// buffer still produces a valid empty block.
    ///
    /// The ledger is updated and the buffer cleared only after the record
    /// store confirms the write; on failure both are left untouched.
    pub fn commit(&mut self) -> Result<Block, ChainError> {
        let payload = Block::payload(&self.pending);
        let seal = pow::search(&payload, &self.config.target, self.config.max_nonce_attempts)?;
        let index = self.store.count()?;
        self.store
            .write(index, &format!("{payload}{} {}", seal.hash, seal.nonce))?;

        let transactions = mem::take(&mut self.pending);
        self.ledger.apply(&transactions);
        self.applied += 1;
        info!(
            "sealed block {index} (nonce={}, {} transactions)",
            seal.nonce,
            transactions.len()
        );
        Ok(Block {
            index,
            transactions,
            nonce: seal.nonce,
            hash: seal.hash,
        })
    }

    /// Create `account` at balance 0. Returns `false` if it already exists.
    pub fn register_account(&mut self, account: &str) -> bool {
        self.ledger.register(account)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    /// Applied blocks as of the last replay plus commits since, genesis
    /// included.
    pub fn height(&self) -> u64 {
        self.applied
    }

    /// Index the last replay halted on, if any.
    pub fn rejected(&self) -> Option<u64> {
        self.rejected
    }

    pub fn target(&self) -> &str {
        &self.config.target
    }
}
