// 💰 Finance App - process, apply and log transactions against one account

use crate::entities::{Account, ApplyOutcome, Transaction};
use crate::error::RepoResult;
use crate::processor::{get_processor, PaymentChannel};
use crate::repository::Repository;
use anyhow::Result;
use std::io::Write;

pub const DEFAULT_ACCOUNT_NUMBER: &str = "MUBARAK001";
pub const DEFAULT_OPENING_BALANCE: f64 = 1000.0;

pub struct FinanceApp {
    account: Account,
    history: Repository<Transaction>,
}

impl FinanceApp {
    pub fn new(account: Account) -> Self {
        FinanceApp {
            account,
            history: Repository::new(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Apply a transaction to the account
    pub fn apply(&mut self, transaction: &Transaction) -> ApplyOutcome {
        self.account.apply_transaction(transaction)
    }

    /// Add a transaction to the history; ids must be unique
    pub fn record(&mut self, transaction: Transaction) -> RepoResult<()> {
        self.history.add(transaction)
    }

    pub fn history(&self) -> Vec<Transaction> {
        self.history.all()
    }

    /// Sample transactions paired with the channel that processes each
    pub fn sample_transactions() -> Vec<(PaymentChannel, Transaction)> {
        vec![
            (PaymentChannel::MobileMoney, Transaction::now(1, 150.0, "Groceries")),
            (PaymentChannel::BankTransfer, Transaction::now(2, 75.0, "Utilities")),
            (PaymentChannel::CryptoWallet, Transaction::now(3, 200.0, "Entertainment")),
        ]
    }

    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(out, "Initial balance: ${:.2}", self.account.balance())?;

        let samples = Self::sample_transactions();

        for (channel, tx) in &samples {
            writeln!(out, "{}", get_processor(*channel).process(tx))?;
        }

        writeln!(out, "\nApplying transactions to account:")?;
        for (_, tx) in &samples {
            writeln!(out, "{}", self.apply(tx))?;
        }

        for (_, tx) in samples {
            if let Err(e) = self.record(tx) {
                writeln!(out, "Error: {}", e)?;
            }
        }

        writeln!(out, "\nTransaction History:")?;
        for tx in self.history.iter() {
            writeln!(out, "{}", tx)?;
        }

        writeln!(
            out,
            "\nFinal balance: ${:.2} (change: {:+.2})",
            self.account.balance(),
            self.account.balance_change()
        )?;
        if self.account.is_overdrawn() {
            writeln!(out, "Account {} is overdrawn", self.account.account_number)?;
        }

        Ok(())
    }
}

impl Default for FinanceApp {
    fn default() -> Self {
        Self::new(Account::savings(
            DEFAULT_ACCOUNT_NUMBER,
            DEFAULT_OPENING_BALANCE,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepoError;

    #[test]
    fn test_run_applies_all_samples_within_balance() {
        let mut app = FinanceApp::default();
        let mut out = Vec::new();
        app.run(&mut out).unwrap();

        // 1000 - 150 - 75 - 200
        assert_eq!(app.account().balance(), 575.0);
        assert_eq!(app.history().len(), 3);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Initial balance: $1000.00"));
        assert!(text.contains("Processing Mobile Money: $150.00 for Groceries"));
        assert!(text.contains("New balance: $575.00"));
        assert!(text.contains("Category: Entertainment"));
        assert!(text.contains("Final balance: $575.00 (change: -425.00)"));
        assert!(!text.contains("overdrawn"));
    }

    #[test]
    fn test_run_flags_overdrawn_checking_account() {
        let mut app = FinanceApp::new(Account::checking("CHK001", 100.0));
        let mut out = Vec::new();
        app.run(&mut out).unwrap();

        assert_eq!(app.account().balance(), -325.0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Final balance: $-325.00 (change: -425.00)"));
        assert!(text.contains("Account CHK001 is overdrawn"));
    }

    #[test]
    fn test_run_reports_insufficient_funds() {
        let mut app = FinanceApp::new(Account::savings("LOW001", 100.0));
        let mut out = Vec::new();
        app.run(&mut out).unwrap();

        // Only 75 fits
        assert_eq!(app.account().balance(), 25.0);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Insufficient funds").count(), 2);
    }

    #[test]
    fn test_record_rejects_duplicate_id() {
        let mut app = FinanceApp::default();
        app.record(Transaction::now(1, 10.0, "Coffee")).unwrap();

        let err = app.record(Transaction::now(1, 99.0, "Other")).unwrap_err();
        assert_eq!(err, RepoError::DuplicateKey(1));
        assert_eq!(app.history()[0].category, "Coffee");
    }
}
