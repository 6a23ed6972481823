use serde::{Deserialize, Serialize};

/// Sender name reserved for unconstrained issuance. Transfers from this
/// account are never debited and skip the admission balance check.
pub const SYSTEM_SENDER: &str = "System";

/// A single transfer of `amount` units from `sender` to `receiver`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub receiver: String,
    pub amount: u64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, receiver: impl Into<String>, amount: u64) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
        }
    }

    /// True when the sender is the issuance account.
    pub fn is_issuance(&self) -> bool {
        self.sender == SYSTEM_SENDER
    }

    /// Canonical record line: `sender receiver amount`.
    pub fn to_line(&self) -> String {
        format!("{} {} {}", self.sender, self.receiver, self.amount)
    }

    /// Parse a record line holding exactly three whitespace-separated
    /// fields with an integer amount. Anything else is malformed.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let sender = fields.next()?;
        let receiver = fields.next()?;
        let amount = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        Some(Self::new(sender, receiver, amount))
    }
}

#[cfg(test)]
mod tests {
    use super::Transaction;

    #[test]
    fn parses_canonical_line() {
        let tx = Transaction::parse_line("Alice Bob 400").expect("valid line");
        assert_eq!(tx, Transaction::new("Alice", "Bob", 400));
        assert_eq!(tx.to_line(), "Alice Bob 400");
    }

    #[test]
    fn rejects_wrong_field_counts() {
        assert!(Transaction::parse_line("Alice Bob").is_none());
        assert!(Transaction::parse_line("Alice Bob 400 extra").is_none());
        assert!(Transaction::parse_line("").is_none());
    }

    #[test]
    fn rejects_non_integer_amount() {
        assert!(Transaction::parse_line("Alice Bob lots").is_none());
        assert!(Transaction::parse_line("Alice Bob -5").is_none());
    }
}
