//! UI element component
//!
//! An axis-aligned rectangle positioned relative to its parent. Layout groups
//! arrange the elements of their children, so size changes go through the
//! world (`World::set_element_size`) where they can schedule the affected
//! reflows.

use crate::ecs::{ComponentData, ComponentSchema, SceneResult};
use crate::foundation::math::Vec2;

/// 2D element rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct ElementComponent {
    position: Vec2,
    size: Vec2,
}

impl Default for ElementComponent {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            size: Vec2::new(32.0, 32.0),
        }
    }
}

impl ElementComponent {
    /// Offset from the parent's top-left corner
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Width and height
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// Width
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Height
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub(crate) fn set_size(&mut self, size: Vec2) {
        self.size = Vec2::new(size.x.max(0.0), size.y.max(0.0));
    }
}

impl ComponentSchema for ElementComponent {
    fn from_data(data: &ComponentData) -> SceneResult<Self> {
        let defaults = Self::default();
        let mut element = Self {
            position: data.vec2("position")?.unwrap_or(defaults.position),
            size: defaults.size,
        };
        element.set_size(data.vec2("size")?.unwrap_or(defaults.size));
        Ok(element)
    }

    fn to_data(&self) -> ComponentData {
        ComponentData::new()
            .with("position", self.position)
            .with("size", self.size)
    }
}
