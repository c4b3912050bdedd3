//! Built-in component types
//!
//! Plain data components; their systems live in [`crate::ecs::systems`] or are
//! the generic [`SchemaSystem`](crate::ecs::SchemaSystem).

pub mod animation;
pub mod camera;
pub mod collision;
pub mod dummy;
pub mod element;
pub mod layout_group;
pub mod light;
pub mod rigidbody;
pub mod sound;

pub use animation::AnimationComponent;
pub use camera::{CameraComponent, Projection};
pub use collision::{CollisionComponent, CollisionShape};
pub use dummy::DummyComponent;
pub use element::ElementComponent;
pub use layout_group::LayoutGroupComponent;
pub use light::{LightComponent, LightType};
pub use rigidbody::{BodyType, RigidBodyComponent};
pub use sound::SoundComponent;
