//! Sound emitter component

use crate::ecs::{ComponentData, ComponentSchema, SceneResult};

/// Sound emitter settings
#[derive(Debug, Clone, PartialEq)]
pub struct SoundComponent {
    /// Volume multiplier
    pub volume: f32,
    /// Pitch multiplier
    pub pitch: f32,
    /// Attenuate with distance from the listener
    pub positional: bool,
    /// Distance at which attenuation begins
    pub ref_distance: f32,
    /// Distance beyond which the sound is inaudible
    pub max_distance: f32,
    /// Names of the sound slots this emitter can play
    pub slots: Vec<String>,
}

impl Default for SoundComponent {
    fn default() -> Self {
        Self {
            volume: 1.0,
            pitch: 1.0,
            positional: true,
            ref_distance: 1.0,
            max_distance: 10_000.0,
            slots: Vec::new(),
        }
    }
}

impl ComponentSchema for SoundComponent {
    fn from_data(data: &ComponentData) -> SceneResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            volume: data.number("volume")?.unwrap_or(defaults.volume),
            pitch: data.number("pitch")?.unwrap_or(defaults.pitch),
            positional: data.bool("positional")?.unwrap_or(defaults.positional),
            ref_distance: data.number("ref_distance")?.unwrap_or(defaults.ref_distance),
            max_distance: data.number("max_distance")?.unwrap_or(defaults.max_distance),
            slots: data.list("slots")?.unwrap_or(defaults.slots),
        })
    }

    fn to_data(&self) -> ComponentData {
        ComponentData::new()
            .with("volume", self.volume)
            .with("pitch", self.pitch)
            .with("positional", self.positional)
            .with("ref_distance", self.ref_distance)
            .with("max_distance", self.max_distance)
            .with("slots", self.slots.clone())
    }
}
