// 💳 Account Entity - balance tracking with an overdraft policy
//
// A single account type replaces a checking/savings class split: the
// AccountType decides whether a spend larger than the balance is refused.
//
// Refusal is a business outcome (ApplyOutcome::InsufficientFunds), not an
// error. The balance is untouched when a spend is refused.

use crate::entities::transaction::Transaction;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    /// Checking account - spends always apply, balance may go negative
    Checking,

    /// Savings account - spends above the balance are refused
    Savings,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
        }
    }

    /// Whether this policy lets a spend push the balance below zero
    pub fn allows_overdraft(&self) -> bool {
        matches!(self, AccountType::Checking)
    }
}

// ============================================================================
// APPLY OUTCOME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApplyOutcome {
    Applied { amount: f64, new_balance: f64 },
    InsufficientFunds { requested: f64, available: f64 },
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied { .. })
    }
}

impl fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyOutcome::Applied {
                amount,
                new_balance,
            } => write!(
                f,
                "Applied transaction: -${:.2}. New balance: ${:.2}",
                amount, new_balance
            ),
            ApplyOutcome::InsufficientFunds {
                requested,
                available,
            } => write!(
                f,
                "Insufficient funds: requested ${:.2}, available ${:.2}",
                requested, available
            ),
        }
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account number, e.g. "MUBARAK001"
    pub account_number: String,

    pub account_type: AccountType,

    /// Balance when the account was opened
    pub opening_balance: f64,

    /// Current balance (updated with each applied transaction)
    pub current_balance: f64,
}

impl Account {
    pub fn new(account_number: &str, account_type: AccountType, opening_balance: f64) -> Self {
        Account {
            account_number: account_number.to_string(),
            account_type,
            opening_balance,
            current_balance: opening_balance,
        }
    }

    pub fn checking(account_number: &str, opening_balance: f64) -> Self {
        Self::new(account_number, AccountType::Checking, opening_balance)
    }

    pub fn savings(account_number: &str, opening_balance: f64) -> Self {
        Self::new(account_number, AccountType::Savings, opening_balance)
    }

    pub fn balance(&self) -> f64 {
        self.current_balance
    }

    /// Spend `transaction.amount` from the balance, subject to the account policy
    pub fn apply_transaction(&mut self, transaction: &Transaction) -> ApplyOutcome {
        if !self.account_type.allows_overdraft() && transaction.amount > self.current_balance {
            warn!(
                account = %self.account_number,
                tx = transaction.id,
                requested = transaction.amount,
                available = self.current_balance,
                "insufficient funds"
            );
            return ApplyOutcome::InsufficientFunds {
                requested: transaction.amount,
                available: self.current_balance,
            };
        }

        self.current_balance -= transaction.amount;
        info!(
            account = %self.account_number,
            tx = transaction.id,
            new_balance = self.current_balance,
            "applied transaction"
        );
        ApplyOutcome::Applied {
            amount: transaction.amount,
            new_balance: self.current_balance,
        }
    }

    /// Get balance change since opening
    pub fn balance_change(&self) -> f64 {
        self.current_balance - self.opening_balance
    }

    /// Check if account is overdrawn (negative balance)
    pub fn is_overdrawn(&self) -> bool {
        self.current_balance < 0.0
    }
}

// ============================================================================
// TESTS
// ============================================================================
