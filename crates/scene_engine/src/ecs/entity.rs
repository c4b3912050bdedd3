//! Entity implementation

use std::collections::BTreeMap;

use super::{Component, ComponentType, Guid, TypedComponent};

slotmap::new_key_type! {
    /// Handle to an entity stored in a [`World`](super::World).
    ///
    /// Handles are generational: once the entity is destroyed the handle goes
    /// stale and every lookup through it fails instead of aliasing a newer
    /// entity.
    pub struct Entity;
}

/// A node in the scene tree
///
/// The parent link is a plain handle and never owns anything; the children
/// vector is the owning side of the tree and its order is significant.
#[derive(Debug)]
pub struct EntityNode {
    pub(crate) guid: Guid,
    pub(crate) name: String,
    pub(crate) enabled: bool,
    pub(crate) parent: Option<Entity>,
    pub(crate) children: Vec<Entity>,
    pub(crate) components: BTreeMap<ComponentType, Component>,
    pub(crate) graph_depth: usize,
}

impl EntityNode {
    pub(crate) fn new(name: impl Into<String>, guid: Guid) -> Self {
        Self {
            guid,
            name: name.into(),
            enabled: true,
            parent: None,
            children: Vec::new(),
            components: BTreeMap::new(),
            graph_depth: 0,
        }
    }

    /// Stable unique identifier
    pub const fn guid(&self) -> Guid {
        self.guid
    }

    /// Entity name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the entity itself is enabled
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Parent handle, `None` for roots
    pub const fn parent(&self) -> Option<Entity> {
        self.parent
    }

    /// Children in order
    pub fn children(&self) -> &[Entity] {
        &self.children
    }

    /// Number of ancestor links up to the root
    pub const fn graph_depth(&self) -> usize {
        self.graph_depth
    }

    /// Attached components in type order
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Types of the attached components
    pub fn component_types(&self) -> Vec<ComponentType> {
        self.components.keys().copied().collect()
    }

    /// Whether a component of the given type is attached
    pub fn has_component(&self, ty: ComponentType) -> bool {
        self.components.contains_key(&ty)
    }

    /// Attached component of the given type
    pub fn component(&self, ty: ComponentType) -> Option<&Component> {
        self.components.get(&ty)
    }

    /// Typed access to an attached component
    pub fn get<T: TypedComponent>(&self) -> Option<&T> {
        self.components.get(&T::TYPE)?.get::<T>()
    }

    pub(crate) fn get_mut<T: TypedComponent>(&mut self) -> Option<&mut T> {
        self.components.get_mut(&T::TYPE)?.get_mut::<T>()
    }
}
