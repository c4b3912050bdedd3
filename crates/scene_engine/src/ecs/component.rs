//! Component base types
//!
//! Every component attached to an entity is a [`Component`]: a back-reference
//! to its owner, an enabled flag and one variant of [`ComponentKind`]. The set
//! of variants is closed; each has a [`ComponentType`] name and is created and
//! torn down by the system registered for that type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::components::{
    AnimationComponent, CameraComponent, CollisionComponent, DummyComponent, ElementComponent,
    LayoutGroupComponent, LightComponent, RigidBodyComponent, SoundComponent,
};
use super::{ComponentData, Entity, EntityRef, SceneError, SceneResult};

/// Component type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentType {
    /// Animation playback settings
    Animation,
    /// Camera
    Camera,
    /// Collision volume
    Collision,
    /// Test component carrying entity references
    Dummy,
    /// 2D UI element rectangle
    Element,
    /// Layout group that arranges child elements
    LayoutGroup,
    /// Light source
    Light,
    /// Rigid body
    RigidBody,
    /// Sound emitter
    Sound,
}

impl ComponentType {
    /// All component types in registry order
    pub const ALL: [Self; 9] = [
        Self::Animation,
        Self::Camera,
        Self::Collision,
        Self::Dummy,
        Self::Element,
        Self::LayoutGroup,
        Self::Light,
        Self::RigidBody,
        Self::Sound,
    ];

    /// The type name used by `add_component`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Animation => "animation",
            Self::Camera => "camera",
            Self::Collision => "collision",
            Self::Dummy => "dummy",
            Self::Element => "element",
            Self::LayoutGroup => "layoutgroup",
            Self::Light => "light",
            Self::RigidBody => "rigidbody",
            Self::Sound => "sound",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentType {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| SceneError::UnknownComponentType(s.to_owned()))
    }
}

/// Conversion between a component struct and its property bag.
///
/// `from_data` applies the fields present in the bag over the type's defaults;
/// `to_data` writes every field back out, which is what cloning feeds into a
/// fresh `from_data` call. Types holding entity references expose them through
/// `entity_refs_mut` so the clone engine can rewrite them.
pub trait ComponentSchema: Sized {
    /// Build a component from initialization data
    fn from_data(data: &ComponentData) -> SceneResult<Self>;

    /// Write every field out as initialization data
    fn to_data(&self) -> ComponentData;

    /// Mutable access to every field typed as an entity reference
    fn entity_refs_mut(&mut self) -> Vec<&mut EntityRef> {
        Vec::new()
    }
}

/// Typed access to one [`ComponentKind`] variant
pub trait TypedComponent: Sized {
    /// The component type this struct implements
    const TYPE: ComponentType;

    /// Borrow the struct out of a kind, if the variant matches
    fn from_kind(kind: &ComponentKind) -> Option<&Self>;

    /// Mutably borrow the struct out of a kind, if the variant matches
    fn from_kind_mut(kind: &mut ComponentKind) -> Option<&mut Self>;

    /// Wrap the struct in its variant
    fn into_kind(self) -> ComponentKind;
}

macro_rules! component_kinds {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// Type-specific component payload
        #[derive(Debug)]
        pub enum ComponentKind {
            $(
                #[allow(missing_docs)]
                $variant($ty),
            )+
        }

        impl ComponentKind {
            /// Type of this payload
            pub const fn component_type(&self) -> ComponentType {
                match self {
                    $(Self::$variant(_) => ComponentType::$variant,)+
                }
            }

            /// Serialize the payload fields
            pub fn to_data(&self) -> ComponentData {
                match self {
                    $(Self::$variant(component) => component.to_data(),)+
                }
            }

            /// Entity reference fields of the payload
            pub fn entity_refs_mut(&mut self) -> Vec<&mut EntityRef> {
                match self {
                    $(Self::$variant(component) => component.entity_refs_mut(),)+
                }
            }
        }

        $(
            impl TypedComponent for $ty {
                const TYPE: ComponentType = ComponentType::$variant;

                fn from_kind(kind: &ComponentKind) -> Option<&Self> {
                    match kind {
                        ComponentKind::$variant(component) => Some(component),
                        _ => None,
                    }
                }

                fn from_kind_mut(kind: &mut ComponentKind) -> Option<&mut Self> {
                    match kind {
                        ComponentKind::$variant(component) => Some(component),
                        _ => None,
                    }
                }

                fn into_kind(self) -> ComponentKind {
                    ComponentKind::$variant(self)
                }
            }
        )+
    };
}

component_kinds! {
    Animation(AnimationComponent),
    Camera(CameraComponent),
    Collision(CollisionComponent),
    Dummy(DummyComponent),
    Element(ElementComponent),
    LayoutGroup(LayoutGroupComponent),
    Light(LightComponent),
    RigidBody(RigidBodyComponent),
    Sound(SoundComponent),
}

/// A component instance attached to exactly one entity
#[derive(Debug)]
pub struct Component {
    entity: Entity,
    enabled: bool,
    kind: ComponentKind,
}

impl Component {
    pub(crate) const fn new(entity: Entity, enabled: bool, kind: ComponentKind) -> Self {
        Self {
            entity,
            enabled,
            kind,
        }
    }

    /// Owning entity
    pub const fn entity(&self) -> Entity {
        self.entity
    }

    /// Whether the component is enabled
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the component
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Type of the payload
    pub const fn component_type(&self) -> ComponentType {
        self.kind.component_type()
    }

    /// Payload
    pub const fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    /// Mutable payload
    pub fn kind_mut(&mut self) -> &mut ComponentKind {
        &mut self.kind
    }

    /// Typed payload access
    pub fn get<T: TypedComponent>(&self) -> Option<&T> {
        T::from_kind(&self.kind)
    }

    /// Typed mutable payload access
    pub fn get_mut<T: TypedComponent>(&mut self) -> Option<&mut T> {
        T::from_kind_mut(&mut self.kind)
    }

    /// Payload fields plus the enabled flag
    pub fn to_data(&self) -> ComponentData {
        let mut data = self.kind.to_data();
        data.set("enabled", self.enabled);
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_round_trip() {
        for ty in ComponentType::ALL {
            assert_eq!(ty.name().parse::<ComponentType>(), Ok(ty));
        }
    }

    #[test]
    fn test_unknown_type_name() {
        assert_eq!(
            "teleporter".parse::<ComponentType>(),
            Err(SceneError::UnknownComponentType("teleporter".into()))
        );
    }

    #[test]
    fn test_typed_access() {
        let kind = CameraComponent::default().into_kind();
        assert_eq!(kind.component_type(), ComponentType::Camera);
        assert!(CameraComponent::from_kind(&kind).is_some());
        assert!(LightComponent::from_kind(&kind).is_none());
    }
}
