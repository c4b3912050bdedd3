//! # Scene Engine
//!
//! The entity-component scene graph of the engine: a hierarchical entity tree,
//! per-type component systems, deep subtree cloning with reference fix-up, and
//! the layout group reflow scheduler.
//!
//! ## Features
//!
//! - **Entity Tree**: Named entities with stable GUIDs, ordered children and graph depth
//! - **Component Systems**: Closed set of component types, each managed by a registered system
//! - **Subtree Cloning**: Duplicates a subtree with fresh GUIDs and rewrites internal references
//! - **Deferred Reflow**: Layout groups are recomputed once per frame, outermost first
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_engine::prelude::*;
//!
//! fn main() -> Result<(), SceneError> {
//!     let mut world = World::new();
//!     let root = world.create_entity("root");
//!     let child = world.create_entity("child");
//!     world.add_child(root, child)?;
//!
//!     let child_guid = world.guid(child)?;
//!     world.add_component(root, "dummy", &ComponentData::new().with("primary", child_guid))?;
//!
//!     let copy = world.clone_entity(root)?;
//!     let copied_child = world.children(copy)?[0];
//!     let dummy = world.get::<DummyComponent>(copy).expect("cloned dummy");
//!     assert_eq!(dummy.primary, Some(world.guid(copied_child)?));
//!
//!     world.post_update();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod ui;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SceneConfig},
        ecs::{
            components::{
                AnimationComponent, CameraComponent, CollisionComponent, DummyComponent,
                ElementComponent, LayoutGroupComponent, LightComponent, RigidBodyComponent,
                SoundComponent,
            },
            Component, ComponentData, ComponentSystem, ComponentType, Entity, EntityRef,
            ErrorKind, Guid, PropertyValue, ReflowReport, SceneError, SceneResult,
            TypedComponent, World,
        },
        foundation::math::{Vec2, Vec3, Vec4},
        ui::layout::{Fitting, Orientation},
    };
}
