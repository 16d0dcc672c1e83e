// 📦 Inventory Item - immutable record persisted to the inventory JSON file

use crate::repository::{Entity, EntityId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Field names are PascalCase on disk: `Id`, `Name`, `Quantity`, `DateAdded`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryItem {
    pub id: EntityId,
    pub name: String,
    pub quantity: i64,
    pub date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(id: EntityId, name: &str, quantity: i64, date_added: DateTime<Utc>) -> Self {
        InventoryItem {
            id,
            name: name.to_string(),
            quantity,
            date_added,
        }
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> EntityId {
        self.id
    }
}
