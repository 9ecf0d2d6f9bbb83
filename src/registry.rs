//! Append-only entity registry
//!
//! Insertion order defines both iteration order and visual stacking: each
//! frame repaints from a cleared surface, so later entities overwrite earlier
//! ones where they overlap. There is no removal; the collection grows for the
//! lifetime of the session.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};

/// Ordered, append-only collection of entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    entities: Vec<Entity>,
    next_id: EntityId,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Append an entity, assigning it the next id. O(1).
    pub fn append(&mut self, mut entity: Entity) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        entity.id = id;
        self.entities.push(entity);
        id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Mutable pass in insertion order. The exclusive borrow spans the whole
    /// pass, so the set of entities visited is fixed when it starts; anything
    /// appended afterwards is picked up by the next pass.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// True when the registry is non-empty and every entity has stopped.
    /// An empty registry reports false so a bounded session does not end
    /// before anything has spawned.
    pub fn all_stopped(&self) -> bool {
        !self.entities.is_empty() && self.entities.iter().all(Entity::is_stopped)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
