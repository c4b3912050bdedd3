//! Integration tests for the layout reflow cycle

use approx::assert_relative_eq;

use crate::ecs::components::{ElementComponent, LayoutGroupComponent};
use crate::ecs::{ComponentData, ComponentType, Entity, SceneError, World};
use crate::foundation::math::Vec2;
use crate::ui::layout::Fitting;

fn element(world: &mut World, entity: Entity, width: f32, height: f32) {
    let data = ComponentData::new().with("size", Vec2::new(width, height));
    world.add_component(entity, "element", &data).unwrap();
}

fn layout_group(world: &mut World, entity: Entity, data: &ComponentData) {
    world.add_component(entity, "layoutgroup", data).unwrap();
}

/// Flush until nothing is pending
fn settle(world: &mut World) {
    for _ in 0..8 {
        if world.post_update().is_empty() {
            return;
        }
    }
    panic!("reflow did not settle");
}

fn position(world: &World, entity: Entity) -> Vec2 {
    world.get::<ElementComponent>(entity).unwrap().position()
}

fn size(world: &World, entity: Entity) -> Vec2 {
    world.get::<ElementComponent>(entity).unwrap().size()
}

/// root (stretching group) -> panel (centring group) -> icon
fn nested_panels(world: &mut World) -> (Entity, Entity, Entity) {
    let root = world.create_entity("root");
    let panel = world.create_entity("panel");
    let icon = world.create_entity("icon");
    world.add_child(root, panel).unwrap();
    world.add_child(panel, icon).unwrap();

    element(world, root, 200.0, 100.0);
    element(world, panel, 10.0, 10.0);
    element(world, icon, 20.0, 20.0);

    layout_group(
        world,
        panel,
        &ComponentData::new().with("alignment", [0.5_f32, 0.5]),
    );
    layout_group(
        world,
        root,
        &ComponentData::new()
            .with("width_fitting", Fitting::Stretch)
            .with("height_fitting", Fitting::Stretch),
    );
    (root, panel, icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_reflows_before_child() {
        let mut world = World::new();
        let (root, panel, icon) = nested_panels(&mut world);
        settle(&mut world);

        // Shrinking the panel signals the panel first, then the root
        world.set_element_size(panel, Vec2::new(10.0, 10.0)).unwrap();
        assert_eq!(world.scheduler().queued(), vec![panel, root]);

        let report = world.post_update();

        assert_eq!(report.processed, 2);
        assert!(report.failures.is_empty());
        assert_relative_eq!(size(&world, panel).x, 200.0);
        assert_relative_eq!(size(&world, panel).y, 100.0);
        // Centred inside the already stretched panel
        assert_relative_eq!(position(&world, icon).x, 90.0);
        assert_relative_eq!(position(&world, icon).y, 40.0);
    }

    #[test]
    fn test_signals_during_flush_wait_for_next_frame() {
        let mut world = World::new();
        let (_, panel, _) = nested_panels(&mut world);
        settle(&mut world);

        world.set_element_size(panel, Vec2::new(10.0, 10.0)).unwrap();
        world.post_update();

        // The root resized the panel, which queued the panel again
        assert_eq!(world.scheduler().queued(), vec![panel]);
        assert_eq!(world.post_update().processed, 1);
        assert!(world.post_update().is_empty());
    }

    #[test]
    fn test_repeated_signals_reflow_once() {
        let mut world = World::new();
        let (root, _, _) = nested_panels(&mut world);
        settle(&mut world);

        let group = world.get_mut::<LayoutGroupComponent>(root).unwrap();
        group.set_spacing(Vec2::new(4.0, 0.0));
        group.set_wrap(true);
        group.set_reverse(true);
        assert!(!group.schedule_reflow());

        assert_eq!(world.scheduler().pending(), 1);
        assert_eq!(world.post_update().processed, 1);
    }

    #[test]
    fn test_removed_group_is_not_reflowed() {
        let mut world = World::new();
        let (root, panel, _) = nested_panels(&mut world);
        settle(&mut world);

        world.set_element_size(panel, Vec2::new(10.0, 10.0)).unwrap();
        world
            .remove_component(root, ComponentType::LayoutGroup)
            .unwrap();

        let report = world.post_update();

        assert_eq!(report.processed, 1);
        assert_relative_eq!(size(&world, panel).x, 10.0);
    }

    #[test]
    fn test_destroyed_group_is_not_reflowed() {
        let mut world = World::new();
        let (root, _, _) = nested_panels(&mut world);

        world.destroy(root).unwrap();

        assert_eq!(world.scheduler().pending(), 0);
        assert!(world.post_update().is_empty());
    }

    #[test]
    fn test_failure_is_isolated() {
        let mut world = World::new();
        let (root, panel, _) = nested_panels(&mut world);
        settle(&mut world);

        // A group without its own element cannot be laid out
        let broken = world.create_entity("broken");
        layout_group(&mut world, broken, &ComponentData::new());
        world.set_element_size(panel, Vec2::new(10.0, 10.0)).unwrap();

        let report = world.post_update();

        assert_eq!(report.processed, 2);
        assert_eq!(
            report.failures,
            vec![(
                broken,
                SceneError::MissingComponent {
                    entity: broken,
                    component: ComponentType::Element
                }
            )]
        );
        assert_relative_eq!(size(&world, panel).x, 200.0);
        assert!(world.scheduler().is_subscribed(root));
    }

    #[test]
    fn test_equal_depth_keeps_signal_order() {
        let mut world = World::new();
        let host = world.create_entity("host");
        let deep = world.create_entity("deep");
        let first = world.create_entity("first");
        let second = world.create_entity("second");
        world.add_child(host, deep).unwrap();

        // None of these has an element, so each failure records its turn
        layout_group(&mut world, deep, &ComponentData::new());
        layout_group(&mut world, second, &ComponentData::new());
        layout_group(&mut world, first, &ComponentData::new());

        let order: Vec<Entity> = world
            .post_update()
            .failures
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();

        assert_eq!(order, vec![second, first, deep]);
    }

    #[test]
    fn test_disabled_children_and_groups_are_skipped() {
        let mut world = World::new();
        let row = world.create_entity("row");
        let hidden = world.create_entity("hidden");
        let label = world.create_entity("label");
        let shown = world.create_entity("shown");
        for child in [hidden, label, shown] {
            world.add_child(row, child).unwrap();
        }
        element(&mut world, row, 100.0, 20.0);
        element(&mut world, hidden, 30.0, 10.0);
        element(&mut world, shown, 30.0, 10.0);
        layout_group(&mut world, row, &ComponentData::new());
        world.set_enabled(hidden, false).unwrap();

        settle(&mut world);

        // Neither the disabled child nor the element-less label takes up room
        assert_relative_eq!(position(&world, shown).x, 0.0);

        world
            .set_component_enabled(row, ComponentType::LayoutGroup, false)
            .unwrap();
        world.set_element_size(shown, Vec2::new(50.0, 10.0)).unwrap();
        assert!(world.post_update().is_empty());
    }
}
