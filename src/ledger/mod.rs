use std::collections::HashMap;

use crate::transaction::Transaction;

/// Account balances derived by replaying committed blocks.
///
/// Fully derived state: never persisted, always rebuildable from the
/// record store. Balances are signed because replay does not re-enforce
/// solvency; only admission does.
#[derive(Debug, Default)]
pub struct Ledger {
    balances: HashMap<String, i64>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance, or `None` for an account the ledger has never seen.
    pub fn balance(&self, account: &str) -> Option<i64> {
        self.balances.get(account).copied()
    }

    pub fn contains(&self, account: &str) -> bool {
        self.balances.contains_key(account)
    }

    /// Create `account` at balance 0. Returns `false` if it already exists.
    pub fn register(&mut self, account: &str) -> bool {
        if self.contains(account) {
            return false;
        }
        self.balances.insert(account.to_string(), 0);
        true
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Apply transactions in order: debit the sender (unless it is the
    /// issuance account), credit the receiver, creating unseen accounts
    /// at 0. Balances may go negative here.
    pub fn apply(&mut self, transactions: &[Transaction]) {
        for tx in transactions {
            if !tx.is_issuance() {
                *self.balances.entry(tx.sender.clone()).or_insert(0) -= tx.amount as i64;
            }
            *self.balances.entry(tx.receiver.clone()).or_insert(0) += tx.amount as i64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ledger;
    use crate::transaction::Transaction;

    #[test]
    fn issuance_credits_without_debit() {
        let mut ledger = Ledger::new();
        ledger.apply(&[Transaction::new("System", "Alice", 1000)]);
        assert_eq!(ledger.balance("Alice"), Some(1000));
        assert_eq!(ledger.balance("System"), None);
    }

    #[test]
    fn transfer_debits_and_credits_in_order() {
        let mut ledger = Ledger::new();
        ledger.apply(&[
            Transaction::new("System", "Alice", 1000),
            Transaction::new("Alice", "Bob", 400),
        ]);
        assert_eq!(ledger.balance("Alice"), Some(600));
        assert_eq!(ledger.balance("Bob"), Some(400));
    }

    #[test]
    fn apply_allows_negative_balances() {
        let mut ledger = Ledger::new();
        ledger.apply(&[Transaction::new("Alice", "Bob", 50)]);
        assert_eq!(ledger.balance("Alice"), Some(-50));
        assert_eq!(ledger.balance("Bob"), Some(50));
    }

    #[test]
    fn register_is_idempotent_on_existing_accounts() {
        let mut ledger = Ledger::new();
        assert!(ledger.register("Carol"));
        assert_eq!(ledger.balance("Carol"), Some(0));
        assert!(!ledger.register("Carol"));
        assert_eq!(ledger.balance("Carol"), Some(0));
    }
}
