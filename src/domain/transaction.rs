use std::fmt;

use super::account::Amount;

/// One successful balance mutation, recorded in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transaction {
    Deposit(Amount),
    Withdrawal(Amount),
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transaction::Deposit(amount) => write!(f, "Deposited: {amount}"),
            Transaction::Withdrawal(amount) => write!(f, "Withdrew: {amount}"),
        }
    }
}
