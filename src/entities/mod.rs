// Entity Models
//
// Plain records with an integer identity (see `repository::Entity`).
// Mutable fields are limited to balances and stock quantities.

pub mod account;
pub mod inventory_item;
pub mod patient;
pub mod student;
pub mod transaction;
pub mod warehouse;

pub use account::{Account, AccountType, ApplyOutcome};
pub use inventory_item::InventoryItem;
pub use patient::{Gender, Patient, Prescription};
pub use student::{Grade, Student};
pub use transaction::Transaction;
pub use warehouse::{ElectronicItem, GroceryItem};
