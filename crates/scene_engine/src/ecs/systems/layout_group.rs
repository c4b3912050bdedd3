//! Layout group system
//!
//! Subscribes every layout group to the world's reflow scheduler when it is
//! initialized and unsubscribes it on removal. The reflow itself runs from
//! [`World::post_update`](crate::ecs::World::post_update), outermost group first.

use log::trace;

use crate::ecs::components::{ElementComponent, LayoutGroupComponent};
use crate::ecs::{
    Component, ComponentData, ComponentKind, ComponentSchema, ComponentSystem, ComponentType,
    Entity, SceneError, SceneResult, SystemContext, TypedComponent, World,
};
use crate::foundation::math::approx_eq2;
use crate::ui::layout::LayoutCalculator;

/// System managing `layoutgroup` components
#[derive(Debug, Default)]
pub struct LayoutGroupSystem;

impl LayoutGroupSystem {
    /// Create the system
    pub const fn new() -> Self {
        Self
    }

    /// Arrange the children of the group owned by `entity`.
    ///
    /// Only enabled children carrying an enabled `element` component take part.
    /// A child whose size changes has its own group scheduled, which lands in
    /// the next frame's queue.
    pub(crate) fn reflow(world: &mut World, entity: Entity) -> SceneResult<()> {
        let node = world.node(entity)?;
        let options = *node
            .get::<LayoutGroupComponent>()
            .ok_or(SceneError::MissingComponent {
                entity,
                component: ComponentType::LayoutGroup,
            })?
            .options();
        let container = node
            .get::<ElementComponent>()
            .ok_or(SceneError::MissingComponent {
                entity,
                component: ComponentType::Element,
            })?
            .size();

        let mut arranged = Vec::new();
        let mut sizes = Vec::new();
        for &child in node.children() {
            let child_node = world.node(child)?;
            if !child_node.enabled() {
                continue;
            }
            let element = child_node
                .component(ComponentType::Element)
                .filter(|component| component.enabled())
                .and_then(Component::get::<ElementComponent>);
            if let Some(element) = element {
                arranged.push(child);
                sizes.push(element.size());
            }
        }

        let placements = LayoutCalculator::calculate(&options, container, &sizes);
        trace!("Reflowing {} children of {:?}", placements.len(), entity);

        for ((child, placement), previous) in arranged.into_iter().zip(placements).zip(sizes) {
            if let Some(element) = world.node_mut(child)?.get_mut::<ElementComponent>() {
                element.set_position(placement.position);
                element.set_size(placement.size);
            }
            if !approx_eq2(previous, placement.size) {
                world.scheduler().schedule(child);
            }
        }

        Ok(())
    }
}

impl ComponentSystem for LayoutGroupSystem {
    fn component_type(&self) -> ComponentType {
        ComponentType::LayoutGroup
    }

    fn initialize_component(
        &mut self,
        ctx: &SystemContext<'_>,
        data: &ComponentData,
    ) -> SceneResult<ComponentKind> {
        let mut group = LayoutGroupComponent::from_data(data)?;
        group.attach(ctx.scheduler.subscribe(ctx.entity));
        group.schedule_reflow();
        Ok(group.into_kind())
    }

    fn on_remove(&mut self, ctx: &SystemContext<'_>, component: &mut Component) {
        ctx.scheduler.unsubscribe(ctx.entity);
        if let Some(group) = component.get_mut::<LayoutGroupComponent>() {
            group.on_remove();
        }
    }
}
