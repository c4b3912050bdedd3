//! Animation component
//!
//! Playback settings only; evaluating clips is the animation backend's job.

use crate::ecs::{ComponentData, ComponentSchema, SceneResult};

/// Animation playback settings
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationComponent {
    /// Playback speed multiplier
    pub speed: f32,
    /// Restart clips when they end
    pub looping: bool,
    /// Start playing as soon as the entity is enabled
    pub activate: bool,
    /// Names of the animation assets this component plays
    pub assets: Vec<String>,
}

impl Default for AnimationComponent {
    fn default() -> Self {
        Self {
            speed: 1.0,
            looping: true,
            activate: true,
            assets: Vec::new(),
        }
    }
}

impl ComponentSchema for AnimationComponent {
    fn from_data(data: &ComponentData) -> SceneResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            speed: data.number("speed")?.unwrap_or(defaults.speed),
            looping: data.bool("loop")?.unwrap_or(defaults.looping),
            activate: data.bool("activate")?.unwrap_or(defaults.activate),
            assets: data.list("assets")?.unwrap_or(defaults.assets),
        })
    }

    fn to_data(&self) -> ComponentData {
        ComponentData::new()
            .with("speed", self.speed)
            .with("loop", self.looping)
            .with("activate", self.activate)
            .with("assets", self.assets.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_data_keeps_defaults() {
        let animation =
            AnimationComponent::from_data(&ComponentData::new().with("speed", 2.0)).unwrap();
        assert_eq!(animation.speed, 2.0);
        assert!(animation.looping);
        assert!(animation.assets.is_empty());
    }

    #[test]
    fn test_assets_list() {
        let data = ComponentData::new().with("assets", vec!["idle".to_string(), "run".to_string()]);
        let animation = AnimationComponent::from_data(&data).unwrap();
        assert_eq!(animation.assets, vec!["idle", "run"]);
    }
}
