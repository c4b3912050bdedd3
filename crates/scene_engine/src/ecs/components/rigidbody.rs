//! Rigid body component
//!
//! Body settings handed to the physics backend.

use crate::ecs::{ComponentData, ComponentSchema, SceneResult};
use crate::foundation::math::Vec3;

property_enum! {
    /// How the physics backend treats the body
    pub enum BodyType {
        /// Never moves
        #[default]
        Static => "static",
        /// Simulated
        Dynamic => "dynamic",
        /// Moved by the application, pushes dynamic bodies
        Kinematic => "kinematic",
    }
}

/// Rigid body settings
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBodyComponent {
    /// Body type
    pub body_type: BodyType,
    /// Mass in kilograms
    pub mass: f32,
    /// Linear velocity damping
    pub linear_damping: f32,
    /// Angular velocity damping
    pub angular_damping: f32,
    /// Surface friction
    pub friction: f32,
    /// Bounciness
    pub restitution: f32,
    /// Initial linear velocity
    pub linear_velocity: Vec3,
    /// Initial angular velocity
    pub angular_velocity: Vec3,
}

impl Default for RigidBodyComponent {
    fn default() -> Self {
        Self {
            body_type: BodyType::Static,
            mass: 1.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            friction: 0.5,
            restitution: 0.0,
            linear_velocity: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
        }
    }
}

impl ComponentSchema for RigidBodyComponent {
    fn from_data(data: &ComponentData) -> SceneResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            body_type: data.choice("type")?.unwrap_or(defaults.body_type),
            mass: data.number("mass")?.unwrap_or(defaults.mass),
            linear_damping: data.number("linear_damping")?.unwrap_or(defaults.linear_damping),
            angular_damping: data.number("angular_damping")?.unwrap_or(defaults.angular_damping),
            friction: data.number("friction")?.unwrap_or(defaults.friction),
            restitution: data.number("restitution")?.unwrap_or(defaults.restitution),
            linear_velocity: data.vec3("linear_velocity")?.unwrap_or(defaults.linear_velocity),
            angular_velocity: data.vec3("angular_velocity")?.unwrap_or(defaults.angular_velocity),
        })
    }

    fn to_data(&self) -> ComponentData {
        ComponentData::new()
            .with("type", self.body_type)
            .with("mass", self.mass)
            .with("linear_damping", self.linear_damping)
            .with("angular_damping", self.angular_damping)
            .with("friction", self.friction)
            .with("restitution", self.restitution)
            .with("linear_velocity", self.linear_velocity)
            .with("angular_velocity", self.angular_velocity)
    }
}
