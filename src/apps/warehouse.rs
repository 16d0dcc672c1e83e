// 🏭 Warehouse Manager - two typed repositories, one set of stock operations

use crate::entities::{ElectronicItem, GroceryItem};
use crate::error::{RepoError, RepoResult};
use crate::repository::{Entity, EntityId, Repository, Stocked};
use anyhow::Result;
use chrono::{Days, NaiveDate, Utc};
use std::io::Write;

// ============================================================================
// STOCK OPERATIONS (any Stocked repository)
// ============================================================================

/// Add `delta` to an item's quantity, returning the updated item
///
/// Goes through `update_quantity`, so a result below zero is refused and the
/// stored quantity is kept. A sum outside `i64` is refused the same way.
pub fn increase_stock<T: Stocked>(
    repo: &mut Repository<T>,
    id: EntityId,
    delta: i64,
) -> RepoResult<&T> {
    let current = repo.get(id)?.quantity();
    let new_quantity = current
        .checked_add(delta)
        .ok_or(RepoError::QuantityOverflow { id, current, delta })?;
    repo.update_quantity(id, new_quantity)?;
    repo.get(id)
}

/// Remove an item, handing it back to the caller
pub fn remove_item_by_id<T: Stocked>(repo: &mut Repository<T>, id: EntityId) -> RepoResult<T> {
    repo.remove(id)
}

pub fn print_all_items<T: Stocked, W: Write>(repo: &Repository<T>, out: &mut W) -> Result<()> {
    for item in repo.iter() {
        writeln!(
            out,
            "ID: {}, Name: {}, Quantity: {}",
            item.id(),
            item.name(),
            item.quantity()
        )?;
    }
    Ok(())
}

// ============================================================================
// MANAGER
// ============================================================================

#[derive(Default)]
pub struct WarehouseManager {
    electronics: Repository<ElectronicItem>,
    groceries: Repository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn electronics(&self) -> &Repository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut Repository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &Repository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut Repository<GroceryItem> {
        &mut self.groceries
    }

    /// Seed sample stock; grocery expiry dates are relative to `today`
    pub fn seed_data(&mut self, today: NaiveDate) -> RepoResult<()> {
        self.electronics
            .add(ElectronicItem::new(1, "Laptop", 10, "Dell", 24))?;
        self.electronics
            .add(ElectronicItem::new(2, "Smartphone", 15, "Samsung", 12))?;
        self.electronics
            .add(ElectronicItem::new(3, "TV", 5, "LG", 36))?;

        self.groceries
            .add(GroceryItem::new(1, "Milk", 50, today + Days::new(7)))?;
        self.groceries
            .add(GroceryItem::new(2, "Bread", 30, today + Days::new(3)))?;
        self.groceries
            .add(GroceryItem::new(3, "Apples", 100, today + Days::new(10)))?;
        Ok(())
    }

    /// Exercise each repository failure; every failure is reported and the run continues
    pub fn demonstrate_errors<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let tablet = ElectronicItem::new(1, "Tablet", 5, "Apple", 12);
        if let Err(e) = self.electronics.add(tablet) {
            writeln!(out, "Error: {}", e)?;
        }

        match remove_item_by_id(&mut self.groceries, 99) {
            Ok(item) => writeln!(out, "Item with ID {} removed successfully.", item.id)?,
            Err(e) => writeln!(out, "Error Removing Item: {}", e)?,
        }

        if let Err(e) = self.groceries.update_quantity(1, -5) {
            writeln!(out, "Error: {}", e)?;
        }
        Ok(())
    }

    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if let Err(e) = self.seed_data(Utc::now().date_naive()) {
            writeln!(out, "Error Seeding Data: {}", e)?;
        }

        writeln!(out, "--- Grocery Items ---")?;
        print_all_items(&self.groceries, out)?;

        writeln!(out, "\n--- Electronic Items ---")?;
        print_all_items(&self.electronics, out)?;

        writeln!(out, "\n--- Restocking ---")?;
        match increase_stock(&mut self.electronics, 1, 5) {
            Ok(item) => writeln!(
                out,
                "Stock updated: {} new quantity is {}",
                item.name(),
                item.quantity()
            )?,
            Err(e) => writeln!(out, "Error Updating Stock: {}", e)?,
        }

        writeln!(out, "\n--- Testing Exceptions ---")?;
        self.demonstrate_errors(out)
    }
}
