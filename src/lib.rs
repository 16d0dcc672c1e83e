// Recordbook - Core Library
// Typed in-memory repositories plus five small record-keeping demos

pub mod apps;
pub mod entities;
pub mod error;
pub mod grouping;
pub mod logging;
pub mod parser;
pub mod persistence;
pub mod processor;
pub mod repository;

// Re-export commonly used types
pub use repository::{Entity, EntityId, Repository, Stocked};
pub use error::{ParseError, PersistError, RepoError, RepoResult};
pub use grouping::GroupedIndex;
pub use parser::{parse_students, read_students_from_file};
pub use persistence::InventoryLogger;
pub use processor::{
    get_processor, BankTransferProcessor, CryptoWalletProcessor, MobileMoneyProcessor,
    PaymentChannel, TransactionProcessor,
};
pub use entities::{
    Account, AccountType, ApplyOutcome,
    ElectronicItem, GroceryItem,
    Gender, Patient, Prescription,
    Grade, Student,
    InventoryItem, Transaction,
};
pub use apps::{FinanceApp, HealthSystemApp, InventoryApp, StudentResultProcessor, WarehouseManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
