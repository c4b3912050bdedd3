//! Integration tests for subtree cloning
//!
//! Builds the tree
//!
//! ```text
//! a
//! ├── a_a
//! │   ├── a_a_a
//! │   └── a_a_b
//! └── a_b
//! ```
//!
//! and checks that copies keep shape and values, get fresh identities and have
//! their entity references rewritten.

use std::collections::HashSet;

use crate::ecs::components::{CameraComponent, DummyComponent, LayoutGroupComponent};
use crate::config::SceneConfig;
use crate::ecs::{ComponentData, ComponentType, Entity, Guid, World};
use crate::foundation::math::{Vec2, Vec3, Vec4};

struct Tree {
    a: Entity,
    a_a: Entity,
    a_b: Entity,
    a_a_a: Entity,
    a_a_b: Entity,
}

fn build_tree(world: &mut World) -> Tree {
    let a = world.create_entity("a");
    let a_a = world.create_entity("a_a");
    let a_b = world.create_entity("a_b");
    let a_a_a = world.create_entity("a_a_a");
    let a_a_b = world.create_entity("a_a_b");

    world.add_child(a, a_a).unwrap();
    world.add_child(a, a_b).unwrap();
    world.add_child(a_a, a_a_a).unwrap();
    world.add_child(a_a, a_a_b).unwrap();

    Tree {
        a,
        a_a,
        a_b,
        a_a_a,
        a_a_b,
    }
}

fn add_dummy(world: &mut World, entity: Entity, primary: Option<Guid>, secondary: Option<Guid>) {
    let data = ComponentData::new()
        .with("primary", primary)
        .with("secondary", secondary);
    world.add_component(entity, "dummy", &data).unwrap();
}

/// Give `entity` one of every component type, each away from its defaults
fn add_every_component(world: &mut World, entity: Entity, external: Guid) {
    let components = [
        (
            "animation",
            ComponentData::new()
                .with("speed", 2.5)
                .with("loop", false)
                .with("activate", false)
                .with("assets", vec!["walk".to_string(), "run".to_string()]),
        ),
        (
            "camera",
            ComponentData::new()
                .with("projection", "orthographic")
                .with("fov", 70.0)
                .with("ortho_height", 8.0)
                .with("near_clip", 0.5)
                .with("far_clip", 500.0)
                .with("priority", 3.0)
                .with("clear_color", Vec4::new(0.1, 0.2, 0.3, 1.0)),
        ),
        (
            "collision",
            ComponentData::new()
                .with("type", "capsule")
                .with("half_extents", Vec3::new(1.0, 2.0, 3.0))
                .with("radius", 0.75)
                .with("height", 4.0),
        ),
        (
            "dummy",
            ComponentData::new()
                .with("primary", Some(external))
                .with("secondary", Some(external)),
        ),
        (
            "element",
            ComponentData::new()
                .with("position", Vec2::new(12.0, -4.0))
                .with("size", Vec2::new(64.0, 32.0)),
        ),
        (
            "layoutgroup",
            ComponentData::new()
                .with("orientation", "vertical")
                .with("reverse", true)
                .with("alignment", Vec2::new(0.5, 1.0))
                .with("padding", Vec4::new(1.0, 2.0, 3.0, 4.0))
                .with("spacing", Vec2::new(5.0, 6.0))
                .with("width_fitting", "stretch")
                .with("height_fitting", "both")
                .with("wrap", true),
        ),
        (
            "light",
            ComponentData::new()
                .with("enabled", false)
                .with("type", "spot")
                .with("color", Vec3::new(1.0, 0.5, 0.25))
                .with("intensity", 7.0)
                .with("attenuation_start", 2.0)
                .with("attenuation_end", 20.0)
                .with("inner_cone_angle", 15.0)
                .with("outer_cone_angle", 30.0)
                .with("cast_shadows", true),
        ),
        (
            "rigidbody",
            ComponentData::new()
                .with("type", "kinematic")
                .with("mass", 12.0)
                .with("linear_damping", 0.2)
                .with("angular_damping", 0.3)
                .with("friction", 0.9)
                .with("restitution", 0.4)
                .with("linear_velocity", Vec3::new(1.0, 0.0, -1.0))
                .with("angular_velocity", Vec3::new(0.0, 2.0, 0.0)),
        ),
        (
            "sound",
            ComponentData::new()
                .with("volume", 0.6)
                .with("pitch", 1.5)
                .with("positional", false)
                .with("ref_distance", 3.0)
                .with("max_distance", 250.0)
                .with("slots", vec!["music".to_string()]),
        ),
    ];
    for (name, data) in components {
        world.add_component(entity, name, &data).unwrap();
    }
}

fn guid(world: &World, entity: Entity) -> Guid {
    world.guid(entity).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_preserves_shape_with_fresh_guids() {
        let mut world = World::new();
        let tree = build_tree(&mut world);
        world
            .add_component(tree.a_a_b, "camera", &ComponentData::new().with("fov", 60.0))
            .unwrap();

        let copy = world.clone_entity(tree.a).unwrap();

        assert_eq!(world.len(), 10);
        assert_eq!(world.parent(copy), Ok(None));
        assert_eq!(world.name(copy), Ok("a"));

        let names: Vec<&str> = world
            .descendants(copy)
            .unwrap()
            .into_iter()
            .map(|entity| world.name(entity).unwrap())
            .collect();
        assert_eq!(names, vec!["a_a", "a_a_a", "a_a_b", "a_b"]);

        let copy_a_a_b = world.find_by_path(copy, "a_a/a_a_b").unwrap();
        assert_eq!(world.graph_depth(copy_a_a_b), Ok(2));
        assert_eq!(world.get::<CameraComponent>(copy_a_a_b).unwrap().fov, 60.0);

        let mut all = HashSet::new();
        for entity in world.entities().collect::<Vec<_>>() {
            assert!(all.insert(guid(&world, entity)), "GUIDs must be unique");
        }
        assert_eq!(all.len(), 10);
    }

    #[test]
    fn test_clone_shares_no_component_state() {
        let mut world = World::new();
        let tree = build_tree(&mut world);
        world
            .add_component(tree.a_b, "camera", &ComponentData::new())
            .unwrap();

        let copy = world.clone_entity(tree.a).unwrap();
        let copy_a_b = world.find_by_path(copy, "a_b").unwrap();
        world.get_mut::<CameraComponent>(copy_a_b).unwrap().fov = 90.0;

        assert_eq!(world.get::<CameraComponent>(tree.a_b).unwrap().fov, 45.0);
    }

    #[test]
    fn test_internal_references_are_remapped() {
        let mut world = World::new();
        let tree = build_tree(&mut world);
        let (g_a_a_a, g_a_b) = (guid(&world, tree.a_a_a), guid(&world, tree.a_b));
        let g_a = guid(&world, tree.a);
        add_dummy(&mut world, tree.a, Some(g_a_a_a), Some(g_a_b));
        add_dummy(&mut world, tree.a_a_b, Some(g_a), None);

        let copy = world.clone_entity(tree.a).unwrap();

        let copy_a_a_a = world.find_by_path(copy, "a_a/a_a_a").unwrap();
        let copy_a_a_b = world.find_by_path(copy, "a_a/a_a_b").unwrap();
        let copy_a_b = world.find_by_path(copy, "a_b").unwrap();

        let root_dummy = world.get::<DummyComponent>(copy).unwrap();
        assert_eq!(root_dummy.primary, Some(guid(&world, copy_a_a_a)));
        assert_eq!(root_dummy.secondary, Some(guid(&world, copy_a_b)));

        let leaf_dummy = world.get::<DummyComponent>(copy_a_a_b).unwrap();
        assert_eq!(leaf_dummy.primary, Some(guid(&world, copy)));
        assert_eq!(leaf_dummy.secondary, None);

        // The original keeps pointing at the original entities
        let original = world.get::<DummyComponent>(tree.a).unwrap();
        assert_eq!(original.primary, Some(g_a_a_a));
        assert_eq!(original.secondary, Some(g_a_b));
    }

    #[test]
    fn test_self_and_null_references() {
        let mut world = World::new();
        let tree = build_tree(&mut world);
        let g_a_a = guid(&world, tree.a_a);
        add_dummy(&mut world, tree.a_a, Some(g_a_a), None);

        let copy = world.clone_entity(tree.a_a).unwrap();

        let dummy = world.get::<DummyComponent>(copy).unwrap();
        assert_eq!(dummy.primary, Some(guid(&world, copy)));
        assert_eq!(dummy.secondary, None);
    }

    #[test]
    fn test_external_references_pass_through() {
        let mut world = World::new();
        let tree = build_tree(&mut world);
        let (g_a, g_a_b, g_a_a_b) = (
            guid(&world, tree.a),
            guid(&world, tree.a_b),
            guid(&world, tree.a_a_b),
        );
        add_dummy(&mut world, tree.a_a_a, Some(g_a_b), Some(g_a_a_b));
        add_dummy(&mut world, tree.a_a, Some(g_a), None);

        // Cloning a_a: a and a_b lie outside the cloned subtree
        let copy = world.clone_entity(tree.a_a).unwrap();

        let copy_a_a_a = world.find_by_name(copy, "a_a_a").unwrap();
        let copy_a_a_b = world.find_by_name(copy, "a_a_b").unwrap();

        let leaf = world.get::<DummyComponent>(copy_a_a_a).unwrap();
        assert_eq!(leaf.primary, Some(g_a_b));
        assert_eq!(leaf.secondary, Some(guid(&world, copy_a_a_b)));

        let top = world.get::<DummyComponent>(copy).unwrap();
        assert_eq!(top.primary, Some(g_a));
    }

    #[test]
    fn test_unresolvable_references_are_kept() {
        let mut world = World::new();
        let entity = world.create_entity("dangling");
        let gone = Guid::new();
        add_dummy(&mut world, entity, Some(gone), None);

        let copy = world.clone_entity(entity).unwrap();

        assert_eq!(world.get::<DummyComponent>(copy).unwrap().primary, Some(gone));
    }

    #[test]
    fn test_component_enabled_flag_is_copied() {
        let mut world = World::new();
        let entity = world.create_entity("e");
        world
            .add_component(entity, "rigidbody", &ComponentData::new())
            .unwrap();
        world
            .set_component_enabled(entity, ComponentType::RigidBody, false)
            .unwrap();

        let copy = world.clone_entity(entity).unwrap();

        assert!(!world.component(copy, ComponentType::RigidBody).unwrap().enabled());
    }

    #[test]
    fn test_clone_copies_every_component_type() {
        let mut world = World::new();
        let external = world.create_entity("external");
        let original = world.create_entity("everything");
        let external_guid = guid(&world, external);
        add_every_component(&mut world, original, external_guid);

        let copy = world.clone_entity(original).unwrap();

        for ty in ComponentType::ALL {
            let source = world.component(original, ty).unwrap().to_data();
            let copied = world.component(copy, ty).unwrap().to_data();
            assert_eq!(copied, source, "{} differs after clone", ty.name());
        }
        assert!(!world.component(copy, ComponentType::Light).unwrap().enabled());
    }

    #[test]
    fn test_clone_deep_chain() {
        let mut world = World::with_config(SceneConfig {
            max_graph_depth: 1_000_000,
            ..SceneConfig::default()
        });
        let chain: Vec<Entity> = (0..5_000)
            .map(|i| world.create_entity(format!("e{i}")))
            .collect();
        for pair in chain.windows(2) {
            world.add_child(pair[0], pair[1]).unwrap();
        }
        let root_guid = guid(&world, chain[0]);
        add_dummy(&mut world, chain[4_999], Some(root_guid), None);

        let copy = world.clone_entity(chain[0]).unwrap();

        assert_eq!(world.descendants(copy).unwrap().len(), 4_999);
        let copy_leaf = world.find_by_name(copy, "e4999").unwrap();
        assert_eq!(world.graph_depth(copy_leaf), Ok(4_999));
        assert_eq!(
            world.get::<DummyComponent>(copy_leaf).unwrap().primary,
            Some(guid(&world, copy))
        );
    }

    #[test]
    fn test_failed_clone_rolls_back() {
        let mut world = World::new();
        let tree = build_tree(&mut world);
        world
            .add_component(tree.a, "layoutgroup", &ComponentData::new())
            .unwrap();
        world
            .add_component(tree.a_a_b, "sound", &ComponentData::new())
            .unwrap();
        world.systems_mut().unregister(ComponentType::Sound);

        let before: HashSet<Entity> = world.entities().collect();
        let err = world.clone_entity(tree.a).unwrap_err();

        assert_eq!(err.to_string(), "no system registered for sound components");
        assert_eq!(world.entities().collect::<HashSet<_>>(), before);
        assert_eq!(world.scheduler().queued(), vec![tree.a]);
        assert!(world.get::<LayoutGroupComponent>(tree.a).unwrap().is_subscribed());
    }
}
