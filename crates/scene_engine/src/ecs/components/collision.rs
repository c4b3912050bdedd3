//! Collision volume component
//!
//! Describes the shape only; contact generation belongs to the physics backend.

use crate::ecs::{ComponentData, ComponentSchema, SceneResult};
use crate::foundation::math::Vec3;

property_enum! {
    /// Primitive collision shape
    pub enum CollisionShape {
        /// Box sized by `half_extents`
        #[default]
        Box => "box",
        /// Sphere sized by `radius`
        Sphere => "sphere",
        /// Capsule sized by `radius` and `height`
        Capsule => "capsule",
        /// Cylinder sized by `radius` and `height`
        Cylinder => "cylinder",
    }
}

/// Collision volume
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionComponent {
    /// Shape type
    pub shape: CollisionShape,
    /// Half size of a box shape
    pub half_extents: Vec3,
    /// Radius of round shapes
    pub radius: f32,
    /// Height of capsules and cylinders
    pub height: f32,
}

impl Default for CollisionComponent {
    fn default() -> Self {
        Self {
            shape: CollisionShape::Box,
            half_extents: Vec3::new(0.5, 0.5, 0.5),
            radius: 0.5,
            height: 2.0,
        }
    }
}

impl ComponentSchema for CollisionComponent {
    fn from_data(data: &ComponentData) -> SceneResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            shape: data.choice("type")?.unwrap_or(defaults.shape),
            half_extents: data.vec3("half_extents")?.unwrap_or(defaults.half_extents),
            radius: data.number("radius")?.unwrap_or(defaults.radius),
            height: data.number("height")?.unwrap_or(defaults.height),
        })
    }

    fn to_data(&self) -> ComponentData {
        ComponentData::new()
            .with("type", self.shape)
            .with("half_extents", self.half_extents)
            .with("radius", self.radius)
            .with("height", self.height)
    }
}
