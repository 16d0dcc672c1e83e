// 🏭 Warehouse Items - electronics and groceries
//
// Both kinds implement `Stocked`, so one repository type validates quantity
// updates for either.

use crate::repository::{Entity, EntityId, Stocked};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ELECTRONIC ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicItem {
    pub id: EntityId,
    pub name: String,
    pub quantity: i64,
    pub brand: String,
    pub warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(id: EntityId, name: &str, quantity: i64, brand: &str, warranty_months: u32) -> Self {
        ElectronicItem {
            id,
            name: name.to_string(),
            quantity,
            brand: brand.to_string(),
            warranty_months,
        }
    }
}

impl Entity for ElectronicItem {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Stocked for ElectronicItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

// ============================================================================
// GROCERY ITEM
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: EntityId,
    pub name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: EntityId, name: &str, quantity: i64, expiry_date: NaiveDate) -> Self {
        GroceryItem {
            id,
            name: name.to_string(),
            quantity,
            expiry_date,
        }
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }
}

impl Entity for GroceryItem {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Stocked for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}
