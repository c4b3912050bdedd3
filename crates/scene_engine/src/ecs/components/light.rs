//! Light component

use crate::ecs::{ComponentData, ComponentSchema, SceneResult};
use crate::foundation::math::Vec3;

property_enum! {
    /// Types of lights
    pub enum LightType {
        /// Parallel rays, like sunlight
        #[default]
        Directional => "directional",
        /// Radiates in all directions from the entity
        Point => "point",
        /// Cone of light from the entity
        Spot => "spot",
    }
}

/// Light source settings
#[derive(Debug, Clone, PartialEq)]
pub struct LightComponent {
    /// The type of light
    pub light_type: LightType,
    /// RGB color (0.0 to 1.0 range)
    pub color: Vec3,
    /// Intensity multiplier
    pub intensity: f32,
    /// Distance at which falloff begins
    pub attenuation_start: f32,
    /// Distance at which the light reaches zero
    pub attenuation_end: f32,
    /// Inner cone angle for spot lights, degrees
    pub inner_cone_angle: f32,
    /// Outer cone angle for spot lights, degrees
    pub outer_cone_angle: f32,
    /// Whether this light casts shadows
    pub cast_shadows: bool,
}

impl Default for LightComponent {
    fn default() -> Self {
        Self {
            light_type: LightType::Directional,
            color: Vec3::new(1.0, 1.0, 1.0),
            intensity: 1.0,
            attenuation_start: 10.0,
            attenuation_end: 10.0,
            inner_cone_angle: 40.0,
            outer_cone_angle: 45.0,
            cast_shadows: false,
        }
    }
}

impl ComponentSchema for LightComponent {
    fn from_data(data: &ComponentData) -> SceneResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            light_type: data.choice("type")?.unwrap_or(defaults.light_type),
            color: data.vec3("color")?.unwrap_or(defaults.color),
            intensity: data.number("intensity")?.unwrap_or(defaults.intensity),
            attenuation_start: data
                .number("attenuation_start")?
                .unwrap_or(defaults.attenuation_start),
            attenuation_end: data.number("attenuation_end")?.unwrap_or(defaults.attenuation_end),
            inner_cone_angle: data.number("inner_cone_angle")?.unwrap_or(defaults.inner_cone_angle),
            outer_cone_angle: data.number("outer_cone_angle")?.unwrap_or(defaults.outer_cone_angle),
            cast_shadows: data.bool("cast_shadows")?.unwrap_or(defaults.cast_shadows),
        })
    }

    fn to_data(&self) -> ComponentData {
        ComponentData::new()
            .with("type", self.light_type)
            .with("color", self.color)
            .with("intensity", self.intensity)
            .with("attenuation_start", self.attenuation_start)
            .with("attenuation_end", self.attenuation_end)
            .with("inner_cone_angle", self.inner_cone_angle)
            .with("outer_cone_angle", self.outer_cone_angle)
            .with("cast_shadows", self.cast_shadows)
    }
}
