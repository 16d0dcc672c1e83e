// 💸 Payment Processors - one trait, three channels
//
// Adding a channel means one new struct + one factory arm; callers only see
// Box<dyn TransactionProcessor>.

use crate::entities::Transaction;
use serde::{Deserialize, Serialize};

// ============================================================================
// CORE TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentChannel {
    BankTransfer,
    MobileMoney,
    CryptoWallet,
}

impl PaymentChannel {
    /// Human readable name
    pub fn name(&self) -> &str {
        match self {
            PaymentChannel::BankTransfer => "Bank Transfer",
            PaymentChannel::MobileMoney => "Mobile Money",
            PaymentChannel::CryptoWallet => "Crypto Transaction",
        }
    }

    pub fn all() -> [PaymentChannel; 3] {
        [
            PaymentChannel::BankTransfer,
            PaymentChannel::MobileMoney,
            PaymentChannel::CryptoWallet,
        ]
    }
}

/// TransactionProcessor - renders what a channel does with a transaction
pub trait TransactionProcessor {
    fn process(&self, transaction: &Transaction) -> String;

    fn channel(&self) -> PaymentChannel;
}

fn describe(channel: PaymentChannel, transaction: &Transaction) -> String {
    format!(
        "Processing {}: ${:.2} for {}",
        channel.name(),
        transaction.amount,
        transaction.category
    )
}

// ============================================================================
// FACTORY
// ============================================================================

/// Get the processor for a channel
pub fn get_processor(channel: PaymentChannel) -> Box<dyn TransactionProcessor> {
    match channel {
        PaymentChannel::BankTransfer => Box::new(BankTransferProcessor),
        PaymentChannel::MobileMoney => Box::new(MobileMoneyProcessor),
        PaymentChannel::CryptoWallet => Box::new(CryptoWalletProcessor),
    }
}

// ============================================================================
// PROCESSORS
// ============================================================================

pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        describe(self.channel(), transaction)
    }

    fn channel(&self) -> PaymentChannel {
        PaymentChannel::BankTransfer
    }
}

pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        describe(self.channel(), transaction)
    }

    fn channel(&self) -> PaymentChannel {
        PaymentChannel::MobileMoney
    }
}

pub struct CryptoWalletProcessor;

impl TransactionProcessor for CryptoWalletProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        describe(self.channel(), transaction)
    }

    fn channel(&self) -> PaymentChannel {
        PaymentChannel::CryptoWallet
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_returns_matching_channel() {
        for channel in PaymentChannel::all() {
            assert_eq!(get_processor(channel).channel(), channel);
        }
    }

    #[test]
    fn test_process_messages() {
        let tx = Transaction::now(1, 150.0, "Groceries");

        assert_eq!(
            get_processor(PaymentChannel::MobileMoney).process(&tx),
            "Processing Mobile Money: $150.00 for Groceries"
        );
        assert_eq!(
            get_processor(PaymentChannel::BankTransfer).process(&tx),
            "Processing Bank Transfer: $150.00 for Groceries"
        );
        assert_eq!(
            get_processor(PaymentChannel::CryptoWallet).process(&tx),
            "Processing Crypto Transaction: $150.00 for Groceries"
        );
    }
}
