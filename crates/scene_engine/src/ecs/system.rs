//! Component systems and their registry
//!
//! Each component type is managed by exactly one [`ComponentSystem`]. The
//! system builds new instances from initialization data, produces the data a
//! clone is built from, and runs teardown when an instance is removed.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use super::systems::LayoutGroupSystem;
use super::{
    Component, ComponentData, ComponentKind, ComponentSchema, ComponentType, Entity,
    ReflowScheduler, SceneError, SceneResult, TypedComponent,
};
use super::components::{
    AnimationComponent, CameraComponent, CollisionComponent, DummyComponent, ElementComponent,
    LightComponent, RigidBodyComponent, SoundComponent,
};

/// Shared services handed to a system while it works on one entity
pub struct SystemContext<'a> {
    /// Entity owning the component being initialized or removed
    pub entity: Entity,
    /// Reflow scheduler of the world
    pub scheduler: &'a ReflowScheduler,
}

/// Per-type component manager
pub trait ComponentSystem {
    /// Component type this system manages
    fn component_type(&self) -> ComponentType;

    /// Build a new component payload from initialization data.
    ///
    /// Must not leave any side effect behind when it fails.
    fn initialize_component(
        &mut self,
        ctx: &SystemContext<'_>,
        data: &ComponentData,
    ) -> SceneResult<ComponentKind>;

    /// Produce the initialization data for a deep copy of `source`.
    ///
    /// The returned data is fed to `initialize_component` for the destination
    /// entity, so no state is ever shared between original and copy.
    fn clone_component(&self, source: &Component) -> SceneResult<ComponentData> {
        Ok(source.to_data())
    }

    /// Teardown hook, run after the component has been detached
    fn on_remove(&mut self, _ctx: &SystemContext<'_>, _component: &mut Component) {}
}

/// System for component types whose whole lifecycle is their schema
pub struct SchemaSystem<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SchemaSystem<T> {
    /// Create the system
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SchemaSystem<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ComponentSchema + TypedComponent> ComponentSystem for SchemaSystem<T> {
    fn component_type(&self) -> ComponentType {
        T::TYPE
    }

    fn initialize_component(
        &mut self,
        _ctx: &SystemContext<'_>,
        data: &ComponentData,
    ) -> SceneResult<ComponentKind> {
        T::from_data(data).map(TypedComponent::into_kind)
    }
}

/// Registry of component systems keyed by component type
#[derive(Default)]
pub struct ComponentSystemRegistry {
    systems: BTreeMap<ComponentType, Box<dyn ComponentSystem>>,
}

impl ComponentSystemRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with a system for every built-in component type
    pub fn with_builtin_systems() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SchemaSystem::<AnimationComponent>::new()));
        registry.register(Box::new(SchemaSystem::<CameraComponent>::new()));
        registry.register(Box::new(SchemaSystem::<CollisionComponent>::new()));
        registry.register(Box::new(SchemaSystem::<DummyComponent>::new()));
        registry.register(Box::new(SchemaSystem::<ElementComponent>::new()));
        registry.register(Box::new(LayoutGroupSystem::new()));
        registry.register(Box::new(SchemaSystem::<LightComponent>::new()));
        registry.register(Box::new(SchemaSystem::<RigidBodyComponent>::new()));
        registry.register(Box::new(SchemaSystem::<SoundComponent>::new()));
        registry
    }

    /// Register a system, replacing and returning any previous one for its type
    pub fn register(
        &mut self,
        system: Box<dyn ComponentSystem>,
    ) -> Option<Box<dyn ComponentSystem>> {
        self.systems.insert(system.component_type(), system)
    }

    /// Remove the system for a type
    pub fn unregister(&mut self, ty: ComponentType) -> Option<Box<dyn ComponentSystem>> {
        self.systems.remove(&ty)
    }

    /// System for a type
    pub fn get(&self, ty: ComponentType) -> SceneResult<&dyn ComponentSystem> {
        match self.systems.get(&ty) {
            Some(system) => Ok(system.as_ref()),
            None => Err(SceneError::SystemNotRegistered(ty)),
        }
    }

    /// Mutable system for a type
    pub fn get_mut(&mut self, ty: ComponentType) -> SceneResult<&mut dyn ComponentSystem> {
        match self.systems.get_mut(&ty) {
            Some(system) => Ok(system.as_mut()),
            None => Err(SceneError::SystemNotRegistered(ty)),
        }
    }

    /// Whether a system is registered for a type
    pub fn contains(&self, ty: ComponentType) -> bool {
        self.systems.contains_key(&ty)
    }

    /// Registered types
    pub fn types(&self) -> impl Iterator<Item = ComponentType> + '_ {
        self.systems.keys().copied()
    }
}

impl fmt::Debug for ComponentSystemRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.systems.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_covers_every_type() {
        let registry = ComponentSystemRegistry::with_builtin_systems();
        for ty in ComponentType::ALL {
            assert_eq!(registry.get(ty).map(|system| system.component_type()), Ok(ty));
        }
    }

    #[test]
    fn test_missing_system() {
        let mut registry = ComponentSystemRegistry::with_builtin_systems();
        registry.unregister(ComponentType::Sound);
        assert_eq!(
            registry.get(ComponentType::Sound).err(),
            Some(SceneError::SystemNotRegistered(ComponentType::Sound))
        );
    }
}
