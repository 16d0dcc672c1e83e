// Demo Apps
//
// Each app seeds its own data, drives the shared building blocks and writes
// human-readable lines to any `Write` sink. Apps share no state.

pub mod finance;
pub mod grades;
pub mod health;
pub mod inventory;
pub mod warehouse;

pub use finance::FinanceApp;
pub use grades::StudentResultProcessor;
pub use health::HealthSystemApp;
pub use inventory::InventoryApp;
pub use warehouse::WarehouseManager;
