//! Entity identity: GUIDs and the per-world registry that resolves them

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, SceneError, SceneResult};

/// A globally unique identifier for an entity.
///
/// GUIDs are random (version 4) UUIDs, so a freshly generated one never
/// collides with any identifier seen earlier in the process. Component fields
/// that point at other entities store GUIDs rather than arena handles, which is
/// what lets a cloned subtree rewrite them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Guid(Uuid);

impl Guid {
    /// Generate a new random GUID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for Guid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A nullable entity reference held by a component field
pub type EntityRef = Option<Guid>;

/// Maps GUIDs to the live entities that carry them.
///
/// One registry belongs to each [`World`](super::World); entries are added when
/// an entity is created and dropped when it is destroyed, so the registry lives
/// and dies with its scene.
#[derive(Debug, Default)]
pub struct GuidRegistry {
    entries: HashMap<Guid, Entity>,
}

impl GuidRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a GUID. Fails if it already belongs to a live entity.
    pub fn insert(&mut self, guid: Guid, entity: Entity) -> SceneResult<()> {
        if self.entries.contains_key(&guid) {
            return Err(SceneError::DuplicateGuid(guid));
        }
        self.entries.insert(guid, entity);
        Ok(())
    }

    /// Unregister a GUID, returning the entity it pointed at
    pub fn remove(&mut self, guid: &Guid) -> Option<Entity> {
        self.entries.remove(guid)
    }

    /// Look up an entity without failing
    pub fn get(&self, guid: &Guid) -> Option<Entity> {
        self.entries.get(guid).copied()
    }

    /// Look up an entity, failing with [`SceneError::NotFound`]
    pub fn resolve(&self, guid: &Guid) -> SceneResult<Entity> {
        self.get(guid).ok_or(SceneError::NotFound(*guid))
    }

    /// Whether a GUID is registered
    pub fn contains(&self, guid: &Guid) -> bool {
        self.entries.contains_key(guid)
    }

    /// Number of registered GUIDs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_guids_are_unique() {
        let a = Guid::new();
        let b = Guid::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_guid_parse_display() {
        let guid = Guid::new();
        let parsed: Guid = guid.to_string().parse().unwrap();
        assert_eq!(parsed, guid);
        assert!("not-a-guid".parse::<Guid>().is_err());
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut arena: SlotMap<Entity, ()> = SlotMap::with_key();
        let first = arena.insert(());
        let second = arena.insert(());

        let mut registry = GuidRegistry::new();
        let guid = Guid::new();
        registry.insert(guid, first).unwrap();

        assert_eq!(registry.insert(guid, second), Err(SceneError::DuplicateGuid(guid)));
        assert_eq!(registry.resolve(&guid), Ok(first));

        registry.remove(&guid);
        assert_eq!(registry.resolve(&guid), Err(SceneError::NotFound(guid)));
        assert!(registry.is_empty());
    }
}
