//! World implementation
//!
//! The [`World`] owns every entity, the GUID registry, the component systems
//! and the reflow scheduler. Tree operations live in `hierarchy.rs` and
//! subtree cloning in `clone.rs`; both extend `World` directly.

use log::{debug, trace, warn};
use slotmap::SlotMap;

use super::components::ElementComponent;
use super::systems::LayoutGroupSystem;
use super::{
    Component, ComponentData, ComponentSystemRegistry, ComponentType, Entity, EntityNode, Guid,
    GuidRegistry, ReflowScheduler, SceneError, SceneResult, SystemContext, TypedComponent,
};
use crate::config::SceneConfig;
use crate::foundation::math::Vec2;

/// Outcome of one reflow flush
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReflowReport {
    /// Layout groups reflowed successfully
    pub processed: usize,
    /// Layout groups whose reflow failed, with the error
    pub failures: Vec<(Entity, SceneError)>,
}

impl ReflowReport {
    /// Whether the flush had nothing to do
    pub fn is_empty(&self) -> bool {
        self.processed == 0 && self.failures.is_empty()
    }
}

/// Scene world containing all entities and their components
#[derive(Debug)]
pub struct World {
    pub(crate) entities: SlotMap<Entity, EntityNode>,
    pub(crate) guids: GuidRegistry,
    systems: ComponentSystemRegistry,
    scheduler: ReflowScheduler,
    pub(crate) config: SceneConfig,
}

impl World {
    /// Create a world with default settings and the built-in systems
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Create a world with the built-in systems
    pub fn with_config(config: SceneConfig) -> Self {
        Self::with_systems(config, ComponentSystemRegistry::with_builtin_systems())
    }

    /// Create a world with a custom system registry
    pub fn with_systems(config: SceneConfig, systems: ComponentSystemRegistry) -> Self {
        Self {
            entities: SlotMap::with_capacity_and_key(config.entity_capacity),
            guids: GuidRegistry::new(),
            systems,
            scheduler: ReflowScheduler::new(),
            config,
        }
    }

    /// Active settings
    pub const fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Reflow scheduler shared by the layout groups of this world
    pub const fn scheduler(&self) -> &ReflowScheduler {
        &self.scheduler
    }

    /// Registered component systems
    pub const fn systems(&self) -> &ComponentSystemRegistry {
        &self.systems
    }

    /// Mutable access to the system registry
    pub fn systems_mut(&mut self) -> &mut ComponentSystemRegistry {
        &mut self.systems
    }

    /// Create a detached entity with a fresh GUID
    pub fn create_entity(&mut self, name: impl Into<String>) -> Entity {
        let entity = self.entities.insert(EntityNode::new(name, Guid::new()));
        // Regenerate on a GUID collision
        while self.guids.insert(self.entities[entity].guid, entity).is_err() {
            self.entities[entity].guid = Guid::new();
        }
        entity
    }

    /// Create a detached entity with a caller-chosen GUID
    pub fn create_entity_with_guid(
        &mut self,
        name: impl Into<String>,
        guid: Guid,
    ) -> SceneResult<Entity> {
        if self.guids.contains(&guid) {
            return Err(SceneError::DuplicateGuid(guid));
        }
        let entity = self.entities.insert(EntityNode::new(name, guid));
        self.guids.insert(guid, entity)?;
        Ok(entity)
    }

    /// Destroy an entity together with its whole subtree.
    ///
    /// The entity is detached from its parent first. Every component is torn
    /// down through its system and every GUID in the subtree is released.
    pub fn destroy(&mut self, entity: Entity) -> SceneResult<()> {
        if let Some(parent) = self.node(entity)?.parent {
            self.remove_child(parent, entity)?;
        }

        let mut doomed = vec![entity];
        doomed.extend(self.descendants(entity)?);

        // Children go before their parents
        for &victim in doomed.iter().rev() {
            let Some(node) = self.entities.remove(victim) else {
                continue;
            };
            self.guids.remove(&node.guid);
            for (_, component) in node.components {
                self.teardown(victim, component);
            }
        }

        trace!("Destroyed {:?} and {} descendants", entity, doomed.len() - 1);
        Ok(())
    }

    fn teardown(&mut self, entity: Entity, mut component: Component) {
        let ty = component.component_type();
        let ctx = SystemContext {
            entity,
            scheduler: &self.scheduler,
        };
        match self.systems.get_mut(ty) {
            Ok(system) => system.on_remove(&ctx, &mut component),
            Err(err) => warn!("Skipping teardown of {} on {:?}: {}", ty, entity, err),
        }
    }

    /// Whether the handle refers to a live entity
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world has no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Tree node of a live entity
    pub fn node(&self, entity: Entity) -> SceneResult<&EntityNode> {
        self.entities
            .get(entity)
            .ok_or(SceneError::StaleEntity(entity))
    }

    pub(crate) fn node_mut(&mut self, entity: Entity) -> SceneResult<&mut EntityNode> {
        self.entities
            .get_mut(entity)
            .ok_or(SceneError::StaleEntity(entity))
    }

    /// Every live entity, in arena order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.keys()
    }

    /// Entities without a parent
    pub fn roots(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(entity, _)| entity)
    }

    /// GUID of an entity
    pub fn guid(&self, entity: Entity) -> SceneResult<Guid> {
        self.node(entity).map(EntityNode::guid)
    }

    /// World-wide lookup of the entity carrying `guid`
    pub fn get_by_guid(&self, guid: Guid) -> SceneResult<Entity> {
        self.guids.resolve(&guid)
    }

    /// Lookup of `guid` restricted to the subtree rooted at `root`
    pub fn find_by_guid(&self, root: Entity, guid: Guid) -> SceneResult<Option<Entity>> {
        self.node(root)?;
        Ok(self
            .guids
            .get(&guid)
            .filter(|&entity| entity == root || self.is_ancestor_of(root, entity)))
    }

    /// Replace the GUID of an entity. Fails if another entity already owns it.
    pub fn set_guid(&mut self, entity: Entity, guid: Guid) -> SceneResult<()> {
        let previous = self.guid(entity)?;
        if previous == guid {
            return Ok(());
        }
        self.guids.insert(guid, entity)?;
        self.guids.remove(&previous);
        self.node_mut(entity)?.guid = guid;
        Ok(())
    }

    /// Name of an entity
    pub fn name(&self, entity: Entity) -> SceneResult<&str> {
        self.node(entity).map(EntityNode::name)
    }

    /// Rename an entity
    pub fn set_name(&mut self, entity: Entity, name: impl Into<String>) -> SceneResult<()> {
        self.node_mut(entity)?.name = name.into();
        Ok(())
    }

    /// Enable or disable an entity
    ///
    /// Disabled entities are skipped by their parent's layout group and their
    /// own group does not reflow.
    pub fn set_enabled(&mut self, entity: Entity, enabled: bool) -> SceneResult<()> {
        let node = self.node_mut(entity)?;
        if node.enabled == enabled {
            return Ok(());
        }
        node.enabled = enabled;
        self.scheduler.schedule(entity);
        self.schedule_parent_reflow(entity);
        Ok(())
    }

    /// Attach a component by type name, e.g. `"layoutgroup"`.
    ///
    /// On any failure the entity is left untouched.
    pub fn add_component(
        &mut self,
        entity: Entity,
        type_name: &str,
        data: &ComponentData,
    ) -> SceneResult<()> {
        let ty = type_name.parse::<ComponentType>()?;
        self.add_component_of(entity, ty, data)
    }

    /// Attach a component of the given type, built by its system from `data`
    pub fn add_component_of(
        &mut self,
        entity: Entity,
        ty: ComponentType,
        data: &ComponentData,
    ) -> SceneResult<()> {
        if self.node(entity)?.has_component(ty) {
            return Err(SceneError::ComponentAlreadyExists {
                entity,
                component: ty,
            });
        }
        let enabled = data.bool("enabled")?.unwrap_or(true);

        let ctx = SystemContext {
            entity,
            scheduler: &self.scheduler,
        };
        let kind = self.systems.get_mut(ty)?.initialize_component(&ctx, data)?;

        self.node_mut(entity)?
            .components
            .insert(ty, Component::new(entity, enabled, kind));
        trace!("Added {} component to {:?}", ty, entity);

        if ty == ComponentType::Element {
            self.scheduler.schedule(entity);
            self.schedule_parent_reflow(entity);
        }
        Ok(())
    }

    /// Detach a component and run its system's teardown
    pub fn remove_component(&mut self, entity: Entity, ty: ComponentType) -> SceneResult<()> {
        let component = self
            .node_mut(entity)?
            .components
            .remove(&ty)
            .ok_or(SceneError::MissingComponent {
                entity,
                component: ty,
            })?;
        self.teardown(entity, component);
        trace!("Removed {} component from {:?}", ty, entity);

        if ty == ComponentType::Element {
            self.schedule_parent_reflow(entity);
        }
        Ok(())
    }

    /// Whether the entity carries a component of the given type
    pub fn has_component(&self, entity: Entity, ty: ComponentType) -> bool {
        self.entities
            .get(entity)
            .is_some_and(|node| node.has_component(ty))
    }

    /// Component of the given type
    pub fn component(&self, entity: Entity, ty: ComponentType) -> SceneResult<&Component> {
        self.node(entity)?
            .component(ty)
            .ok_or(SceneError::MissingComponent {
                entity,
                component: ty,
            })
    }

    /// Enable or disable a single component
    pub fn set_component_enabled(
        &mut self,
        entity: Entity,
        ty: ComponentType,
        enabled: bool,
    ) -> SceneResult<()> {
        let component = self
            .node_mut(entity)?
            .components
            .get_mut(&ty)
            .ok_or(SceneError::MissingComponent {
                entity,
                component: ty,
            })?;
        if component.enabled() == enabled {
            return Ok(());
        }
        component.set_enabled(enabled);

        match ty {
            ComponentType::LayoutGroup => {
                self.scheduler.schedule(entity);
            }
            ComponentType::Element => self.schedule_parent_reflow(entity),
            _ => {}
        }
        Ok(())
    }

    /// Typed component access
    pub fn get<T: TypedComponent>(&self, entity: Entity) -> Option<&T> {
        self.entities.get(entity)?.get::<T>()
    }

    /// Typed mutable component access
    pub fn get_mut<T: TypedComponent>(&mut self, entity: Entity) -> Option<&mut T> {
        self.entities.get_mut(entity)?.get_mut::<T>()
    }

    /// Resize an element, scheduling the group it arranges and the group it sits in
    pub fn set_element_size(&mut self, entity: Entity, size: Vec2) -> SceneResult<()> {
        self.node_mut(entity)?
            .get_mut::<ElementComponent>()
            .ok_or(SceneError::MissingComponent {
                entity,
                component: ComponentType::Element,
            })?
            .set_size(size);
        self.scheduler.schedule(entity);
        self.schedule_parent_reflow(entity);
        Ok(())
    }

    pub(crate) fn schedule_parent_reflow(&self, entity: Entity) {
        if let Some(parent) = self.entities.get(entity).and_then(EntityNode::parent) {
            self.scheduler.schedule(parent);
        }
    }

    fn is_active_layout_group(&self, entity: Entity) -> bool {
        self.scheduler.is_subscribed(entity)
            && self.entities.get(entity).is_some_and(|node| {
                node.enabled
                    && node
                        .component(ComponentType::LayoutGroup)
                        .is_some_and(Component::enabled)
            })
    }

    /// End-of-frame hook: flush every pending layout reflow.
    ///
    /// The pending queue is swapped out before any reflow runs. Groups are
    /// processed in ascending graph depth, keeping signal order between groups
    /// of equal depth, so a parent always settles before its children. A failing
    /// reflow is logged and recorded without stopping the rest of the batch.
    pub fn post_update(&mut self) -> ReflowReport {
        let mut batch = self.scheduler.take_batch();
        batch.retain(|&entity| self.is_active_layout_group(entity));
        batch.sort_by_key(|&entity| self.entities.get(entity).map_or(0, EntityNode::graph_depth));

        let mut report = ReflowReport::default();
        for entity in batch {
            match LayoutGroupSystem::reflow(self, entity) {
                Ok(()) => report.processed += 1,
                Err(err) => {
                    warn!("Layout reflow of {:?} failed: {}", entity, err);
                    report.failures.push((entity, err));
                }
            }
        }

        if self.config.log_reflow && !report.is_empty() {
            debug!(
                "Reflow flush: {} processed, {} failed, {} queued for next frame",
                report.processed,
                report.failures.len(),
                self.scheduler.pending()
            );
        }
        report
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
