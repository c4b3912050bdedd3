//! Subtree cloning
//!
//! Cloning runs in two passes. The first duplicates every entity of the
//! subtree, each with a fresh GUID, copies its components through their
//! systems and records which new GUID replaced which old one. The second pass
//! rewrites every entity reference held by the copied components through that
//! map, so references inside the subtree point at the copies while references
//! leaving the subtree are kept as they are.

use std::collections::HashMap;

use log::{debug, warn};

use super::{ComponentType, Entity, Guid, SceneError, SceneResult, World};

impl World {
    /// Deep-copy the subtree rooted at `root`.
    ///
    /// The copy is a new detached root. If any component fails to copy, every
    /// entity created so far is destroyed and the error is returned.
    pub fn clone_entity(&mut self, root: Entity) -> SceneResult<Entity> {
        let copy = self.spawn_copy(root)?;
        let mut guid_map = HashMap::new();

        let result = self
            .duplicate_subtree(root, copy, &mut guid_map)
            .and_then(|()| self.resolve_duplicated_references(copy, &guid_map));

        match result {
            Ok(()) => {
                debug!("Cloned {:?} into {:?} ({} entities)", root, copy, guid_map.len());
                Ok(copy)
            }
            Err(err) => {
                if let Err(cleanup) = self.destroy(copy) {
                    warn!("Failed to roll back partial clone {:?}: {}", copy, cleanup);
                }
                Err(err)
            }
        }
    }

    /// Copy one component from `source` onto `dest` through its system
    pub fn clone_component(
        &mut self,
        source: Entity,
        dest: Entity,
        ty: ComponentType,
    ) -> SceneResult<()> {
        let component = self.node(source)?.component(ty).ok_or(SceneError::MissingComponent {
            entity: source,
            component: ty,
        })?;
        let data = self.systems().get(ty)?.clone_component(component)?;
        self.add_component_of(dest, ty, &data)
    }

    fn spawn_copy(&mut self, source: Entity) -> SceneResult<Entity> {
        let node = self.node(source)?;
        let (name, enabled) = (node.name.clone(), node.enabled);
        let copy = self.create_entity(name);
        self.node_mut(copy)?.enabled = enabled;
        Ok(copy)
    }

    fn duplicate_subtree(
        &mut self,
        source: Entity,
        copy: Entity,
        guid_map: &mut HashMap<Guid, Guid>,
    ) -> SceneResult<()> {
        let mut pending = vec![(source, copy)];
        while let Some((source, copy)) = pending.pop() {
            guid_map.insert(self.guid(source)?, self.guid(copy)?);

            for ty in self.node(source)?.component_types() {
                self.clone_component(source, copy, ty)?;
            }

            let children = self.node(source)?.children.clone();
            for child in children {
                let child_copy = self.spawn_copy(child)?;
                // Attach right away so rolling back the root reaches this copy too
                if let Err(err) = self.add_child(copy, child_copy) {
                    self.destroy(child_copy)?;
                    return Err(err);
                }
                pending.push((child, child_copy));
            }
        }
        Ok(())
    }

    fn resolve_duplicated_references(
        &mut self,
        root: Entity,
        guid_map: &HashMap<Guid, Guid>,
    ) -> SceneResult<()> {
        let mut subtree = vec![root];
        subtree.extend(self.descendants(root)?);

        for entity in subtree {
            for component in self.node_mut(entity)?.components.values_mut() {
                for reference in component.kind_mut().entity_refs_mut() {
                    if let Some(mapped) = reference.and_then(|guid| guid_map.get(&guid)) {
                        *reference = Some(*mapped);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::DummyComponent;
    use crate::ecs::ComponentData;

    #[test]
    fn test_clone_single_entity() {
        let mut world = World::new();
        let original = world.create_entity("lamp");
        world
            .add_component(original, "light", &ComponentData::new().with("intensity", 3.0))
            .unwrap();
        world.set_enabled(original, false).unwrap();

        let copy = world.clone_entity(original).unwrap();

        assert_ne!(copy, original);
        assert_ne!(world.guid(copy), world.guid(original));
        assert_eq!(world.name(copy), Ok("lamp"));
        assert!(!world.node(copy).unwrap().enabled());
        assert_eq!(world.parent(copy), Ok(None));
    }

    #[test]
    fn test_clone_component_requires_source_component() {
        let mut world = World::new();
        let source = world.create_entity("source");
        let dest = world.create_entity("dest");

        assert_eq!(
            world.clone_component(source, dest, ComponentType::Dummy),
            Err(SceneError::MissingComponent {
                entity: source,
                component: ComponentType::Dummy
            })
        );
    }

    #[test]
    fn test_self_reference_points_at_copy() {
        let mut world = World::new();
        let original = world.create_entity("self");
        let guid = world.guid(original).unwrap();
        world
            .add_component(original, "dummy", &ComponentData::new().with("primary", guid))
            .unwrap();

        let copy = world.clone_entity(original).unwrap();

        let dummy = world.get::<DummyComponent>(copy).unwrap();
        assert_eq!(dummy.primary, Some(world.guid(copy).unwrap()));
        assert_eq!(world.get::<DummyComponent>(original).unwrap().primary, Some(guid));
    }
}
