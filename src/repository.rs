// 🗃️ Generic Repository - keyed, validated in-memory storage
//
// One repository holds one entity shape. Identity comes from the `Entity`
// trait, so the same container backs patients, prescriptions, transactions
// and both warehouse item kinds.
//
// Invariants:
// - No two entities share an id inside one repository
// - Every lookup/update/remove by id confirms existence first
// - Iteration follows insertion order

use crate::error::{RepoError, RepoResult};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Integer identity shared by every entity
pub type EntityId = i64;

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// Entity - anything with a stable integer identity
pub trait Entity {
    fn id(&self) -> EntityId;
}

/// Stocked - entities that carry a name and a mutable quantity
///
/// Implemented by both warehouse item kinds so one repository method can
/// validate and apply quantity changes for either.
pub trait Stocked: Entity {
    fn name(&self) -> &str;
    fn quantity(&self) -> i64;
    fn set_quantity(&mut self, quantity: i64);
}

// ============================================================================
// REPOSITORY
// ============================================================================

pub struct Repository<T> {
    items: HashMap<EntityId, T>,
    /// Insertion order of live ids
    order: Vec<EntityId>,
}

impl<T: Entity> Repository<T> {
    /// Create new empty repository
    pub fn new() -> Self {
        Repository {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Insert an entity; an existing entry with the same id is left untouched
    pub fn add(&mut self, entity: T) -> RepoResult<()> {
        let id = entity.id();
        if self.items.contains_key(&id) {
            debug!(id, "rejected duplicate id");
            return Err(RepoError::DuplicateKey(id));
        }
        self.items.insert(id, entity);
        self.order.push(id);
        debug!(id, "added entity");
        Ok(())
    }

    pub fn get(&self, id: EntityId) -> RepoResult<&T> {
        self.items.get(&id).ok_or(RepoError::NotFound(id))
    }

    pub fn get_mut(&mut self, id: EntityId) -> RepoResult<&mut T> {
        self.items.get_mut(&id).ok_or(RepoError::NotFound(id))
    }

    /// Delete an entity and hand it back to the caller
    pub fn remove(&mut self, id: EntityId) -> RepoResult<T> {
        let removed = self.items.remove(&id).ok_or(RepoError::NotFound(id))?;
        self.order.retain(|existing| *existing != id);
        debug!(id, "removed entity");
        Ok(removed)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate entities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(move |id| self.items.get(id))
    }
}

impl<T: Entity + Clone> Repository<T> {
    /// Snapshot of all entities in insertion order
    pub fn all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Stocked> Repository<T> {
    /// Overwrite the stored quantity of an entity
    ///
    /// Negative quantities are rejected before the existence check, and a
    /// rejected update never touches the stored value.
    pub fn update_quantity(&mut self, id: EntityId, new_quantity: i64) -> RepoResult<()> {
        if new_quantity < 0 {
            return Err(RepoError::InvalidArgument(new_quantity));
        }
        let item = self.get_mut(id)?;
        item.set_quantity(new_quantity);
        debug!(id, new_quantity, "updated quantity");
        Ok(())
    }
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("ids", &self.order)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
