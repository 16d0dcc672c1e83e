// 🧾 Transaction Entity - one spend event against an account

use crate::repository::{Entity, EntityId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction - immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: EntityId,
    pub date: DateTime<Utc>,
    /// Amount in account currency, always positive for a spend
    pub amount: f64,
    pub category: String,
}

impl Transaction {
    pub fn new(id: EntityId, date: DateTime<Utc>, amount: f64, category: &str) -> Self {
        Transaction {
            id,
            date,
            amount,
            category: category.to_string(),
        }
    }

    /// Transaction stamped with the current time
    pub fn now(id: EntityId, amount: f64, category: &str) -> Self {
        Self::new(id, Utc::now(), amount, category)
    }
}

impl Entity for Transaction {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Amount: ${:.2}, Category: {}, Date: {}",
            self.id,
            self.amount,
            self.category,
            self.date.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
