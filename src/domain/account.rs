use crate::error::{Result, TellerError};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::serial::{SerialCounter, SerialNumber};
use super::transaction::Transaction;

/// A customer-chosen secret gating every balance operation.
///
/// Equality is exact string comparison. `Debug` is redacted so the secret
/// never shows up in logs or panic messages.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// Represents a positive monetary amount for deposits and withdrawals.
///
/// This is a wrapper around `rust_decimal::Decimal` that makes transaction
/// amounts positive by construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(TellerError::InvalidInput(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = TellerError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The funds held in an account. Never negative: deposits only add positive
/// amounts and withdrawals are guarded by an inclusive balance check.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One customer's account session.
///
/// Holds the PIN, the balance, and the ordered log of successful mutations.
/// Every operation except `create_pin` verifies a candidate PIN first, and a
/// failed check leaves the account completely untouched.
#[derive(Debug)]
pub struct Account {
    /// Serial number drawn from the counter at open; immutable afterwards.
    serial: SerialNumber,
    /// `None` until `create_pin` runs; the unset state matches no candidate.
    pin: Option<Pin>,
    /// Funds currently in the account.
    balance: Balance,
    /// Append-only record of successful deposits and withdrawals.
    transactions: Vec<Transaction>,
}

impl Account {
    /// Opens a new account, drawing its serial number from `counter`.
    pub fn open(counter: &SerialCounter) -> Self {
        Self {
            serial: counter.next(),
            pin: None,
            balance: Balance::ZERO,
            transactions: Vec::new(),
        }
    }

    pub fn serial(&self) -> SerialNumber {
        self.serial
    }

    /// Sets the PIN without any check. `change_pin` is the gated path.
    pub fn create_pin(&mut self, new_pin: Pin) {
        self.pin = Some(new_pin);
    }

    /// The single PIN check behind every gated operation.
    fn verify(&self, candidate: &Pin) -> Result<()> {
        match &self.pin {
            Some(pin) if pin == candidate => Ok(()),
            _ => Err(TellerError::Authentication),
        }
    }

    /// Verify-then-mutate guard: `op` only runs once the candidate PIN
    /// clears, so a failed check can never touch account state.
    fn guarded<T>(
        &mut self,
        candidate: &Pin,
        op: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.verify(candidate)?;
        op(self)
    }

    /// Adds `amount` to the balance and records it in the log.
    pub fn deposit(&mut self, candidate: &Pin, amount: Amount) -> Result<()> {
        self.guarded(candidate, |account| {
            account.balance += amount.into();
            account.transactions.push(Transaction::Deposit(amount));
            Ok(())
        })
    }

    /// Removes `amount` from the balance if it is covered. Withdrawing the
    /// exact balance is valid and leaves zero.
    pub fn withdraw(&mut self, candidate: &Pin, amount: Amount) -> Result<()> {
        self.guarded(candidate, |account| {
            if Balance::from(amount) > account.balance {
                return Err(TellerError::InsufficientFunds);
            }
            account.balance -= amount.into();
            account.transactions.push(Transaction::Withdrawal(amount));
            Ok(())
        })
    }

    pub fn balance(&self, candidate: &Pin) -> Result<Balance> {
        self.verify(candidate)?;
        Ok(self.balance)
    }

    /// Replaces the PIN after the current one clears.
    pub fn change_pin(&mut self, candidate: &Pin, new_pin: Pin) -> Result<()> {
        self.guarded(candidate, |account| {
            account.pin = Some(new_pin);
            Ok(())
        })
    }

    /// The full transaction log, oldest first.
    pub fn history(&self, candidate: &Pin) -> Result<&[Transaction]> {
        self.verify(candidate)?;
        Ok(&self.transactions)
    }
}
