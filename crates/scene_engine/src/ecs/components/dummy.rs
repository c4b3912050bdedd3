//! Dummy component
//!
//! Carries nothing but entity references. Used to exercise reference
//! resolution during cloning.

use crate::ecs::{ComponentData, ComponentSchema, EntityRef, SceneResult};

/// Component holding two nullable entity references
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DummyComponent {
    /// First reference
    pub primary: EntityRef,
    /// Second reference
    pub secondary: EntityRef,
}

impl ComponentSchema for DummyComponent {
    fn from_data(data: &ComponentData) -> SceneResult<Self> {
        Ok(Self {
            primary: data.entity("primary")?.flatten(),
            secondary: data.entity("secondary")?.flatten(),
        })
    }

    fn to_data(&self) -> ComponentData {
        ComponentData::new()
            .with("primary", self.primary)
            .with("secondary", self.secondary)
    }

    fn entity_refs_mut(&mut self) -> Vec<&mut EntityRef> {
        vec![&mut self.primary, &mut self.secondary]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::Guid;

    #[test]
    fn test_null_and_absent_references() {
        let data = ComponentData::new().with("primary", None::<Guid>);
        let dummy = DummyComponent::from_data(&data).unwrap();
        assert_eq!(dummy, DummyComponent::default());
    }

    #[test]
    fn test_entity_refs_cover_both_fields() {
        let guid = Guid::new();
        let mut dummy = DummyComponent {
            primary: Some(guid),
            secondary: None,
        };
        for reference in dummy.entity_refs_mut() {
            *reference = Some(guid);
        }
        assert_eq!(dummy.secondary, Some(guid));
    }
}
