//! Camera component

use crate::ecs::{ComponentData, ComponentSchema, SceneResult};
use crate::foundation::math::Vec4;

property_enum! {
    /// Camera projection
    pub enum Projection {
        /// Perspective projection driven by `fov`
        #[default]
        Perspective => "perspective",
        /// Orthographic projection driven by `ortho_height`
        Orthographic => "orthographic",
    }
}

/// Camera settings
#[derive(Debug, Clone, PartialEq)]
pub struct CameraComponent {
    /// Projection type
    pub projection: Projection,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Half height of the orthographic view volume
    pub ortho_height: f32,
    /// Near clip distance
    pub near_clip: f32,
    /// Far clip distance
    pub far_clip: f32,
    /// Render order, lower first
    pub priority: f32,
    /// RGBA clear color
    pub clear_color: Vec4,
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self {
            projection: Projection::Perspective,
            fov: 45.0,
            ortho_height: 10.0,
            near_clip: 0.1,
            far_clip: 1000.0,
            priority: 0.0,
            clear_color: Vec4::new(0.118, 0.118, 0.118, 1.0),
        }
    }
}

impl ComponentSchema for CameraComponent {
    fn from_data(data: &ComponentData) -> SceneResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            projection: data.choice("projection")?.unwrap_or(defaults.projection),
            fov: data.number("fov")?.unwrap_or(defaults.fov),
            ortho_height: data.number("ortho_height")?.unwrap_or(defaults.ortho_height),
            near_clip: data.number("near_clip")?.unwrap_or(defaults.near_clip),
            far_clip: data.number("far_clip")?.unwrap_or(defaults.far_clip),
            priority: data.number("priority")?.unwrap_or(defaults.priority),
            clear_color: data.vec4("clear_color")?.unwrap_or(defaults.clear_color),
        })
    }

    fn to_data(&self) -> ComponentData {
        ComponentData::new()
            .with("projection", self.projection)
            .with("fov", self.fov)
            .with("ortho_height", self.ortho_height)
            .with("near_clip", self.near_clip)
            .with("far_clip", self.far_clip)
            .with("priority", self.priority)
            .with("clear_color", self.clear_color)
    }
}
