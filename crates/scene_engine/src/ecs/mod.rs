//! Entity-Component scene graph
//!
//! Entities live in a [`World`] arena and form a tree. Components hang off
//! entities, are created through per-type systems, and take part in subtree
//! cloning and the layout reflow cycle.

/// Declares a text-backed enum used as a component setting.
///
/// Generates `as_str`, `Display`, `FromStr` and a conversion into
/// [`PropertyValue`](crate::ecs::PropertyValue). Mark the default variant with
/// `#[default]`.
macro_rules! property_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Text form used in component data
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(format!("unrecognised {} '{}'", stringify!($name), other)),
                }
            }
        }

        impl From<$name> for $crate::ecs::PropertyValue {
            fn from(value: $name) -> Self {
                Self::Text(value.as_str().to_owned())
            }
        }
    };
}
pub(crate) use property_enum;

pub mod clone;
pub mod component;
pub mod components;
pub mod data;
pub mod entity;
pub mod error;
pub mod guid;
pub mod hierarchy;
pub mod scheduler;
pub mod system;
pub mod systems;
pub mod world;

#[cfg(test)]
mod tests;

pub use component::{Component, ComponentKind, ComponentSchema, ComponentType, TypedComponent};
pub use data::{ComponentData, PropertyValue};
pub use entity::{Entity, EntityNode};
pub use error::{ErrorKind, SceneError, SceneResult};
pub use guid::{EntityRef, Guid, GuidRegistry};
pub use scheduler::{ReflowHandle, ReflowScheduler};
pub use system::{ComponentSystem, ComponentSystemRegistry, SchemaSystem, SystemContext};
pub use world::{ReflowReport, World};
