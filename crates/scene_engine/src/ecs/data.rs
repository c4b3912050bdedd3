//! Component initialization data
//!
//! Components are created from a loosely typed property bag, the same shape a
//! prefab or an editor would hand over. Each component type reads the fields it
//! understands with the typed accessors below; a field that is present but has
//! the wrong type or shape fails with [`SceneError::InvalidField`].

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{EntityRef, Guid, SceneError, SceneResult};
use crate::foundation::math::{Vec2, Vec3, Vec4};

/// A single property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Boolean flag
    Bool(bool),
    /// Scalar number
    Number(f32),
    /// Text, also used for enumerated settings
    Text(String),
    /// Fixed-size vector given as a list of floats
    Vector(Vec<f32>),
    /// List of strings (asset names, slot names)
    List(Vec<String>),
    /// Reference to another entity, possibly null
    Entity(EntityRef),
}

impl PropertyValue {
    /// Human-readable name of the value's type, used in error messages
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Vector(_) => "vector",
            Self::List(_) => "list",
            Self::Entity(_) => "entity",
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for PropertyValue {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: f64) -> Self {
        Self::Number(value as f32)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<f32>> for PropertyValue {
    fn from(value: Vec<f32>) -> Self {
        Self::Vector(value)
    }
}

impl<const N: usize> From<[f32; N]> for PropertyValue {
    fn from(value: [f32; N]) -> Self {
        Self::Vector(value.to_vec())
    }
}

impl From<Vec2> for PropertyValue {
    fn from(value: Vec2) -> Self {
        Self::Vector(value.as_slice().to_vec())
    }
}

impl From<Vec3> for PropertyValue {
    fn from(value: Vec3) -> Self {
        Self::Vector(value.as_slice().to_vec())
    }
}

impl From<Vec4> for PropertyValue {
    fn from(value: Vec4) -> Self {
        Self::Vector(value.as_slice().to_vec())
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Guid> for PropertyValue {
    fn from(value: Guid) -> Self {
        Self::Entity(Some(value))
    }
}

impl From<EntityRef> for PropertyValue {
    fn from(value: EntityRef) -> Self {
        Self::Entity(value)
    }
}

/// Property bag used to initialize and clone components
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentData {
    properties: BTreeMap<String, PropertyValue>,
}

impl ComponentData {
    /// Create an empty property bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a property, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Raw property access
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Whether a property is present
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the bag is empty
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate properties in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Read a boolean field
    pub fn bool(&self, key: &str) -> SceneResult<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(PropertyValue::Bool(value)) => Ok(Some(*value)),
            Some(other) => Err(mismatch(key, "bool", other)),
        }
    }

    /// Read a numeric field
    pub fn number(&self, key: &str) -> SceneResult<Option<f32>> {
        match self.get(key) {
            None => Ok(None),
            Some(PropertyValue::Number(value)) => Ok(Some(*value)),
            Some(other) => Err(mismatch(key, "number", other)),
        }
    }

    /// Read a text field
    pub fn text(&self, key: &str) -> SceneResult<Option<&str>> {
        match self.get(key) {
            None => Ok(None),
            Some(PropertyValue::Text(value)) => Ok(Some(value.as_str())),
            Some(other) => Err(mismatch(key, "text", other)),
        }
    }

    /// Read a list-of-strings field
    pub fn list(&self, key: &str) -> SceneResult<Option<Vec<String>>> {
        match self.get(key) {
            None => Ok(None),
            Some(PropertyValue::List(values)) => Ok(Some(values.clone())),
            Some(other) => Err(mismatch(key, "list", other)),
        }
    }

    /// Read an enumerated field stored as text
    pub fn choice<T>(&self, key: &str) -> SceneResult<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.text(key)?
            .map(|text| text.parse().map_err(|err: T::Err| SceneError::invalid_field(key, err.to_string())))
            .transpose()
    }

    /// Read a 2-component vector field
    pub fn vec2(&self, key: &str) -> SceneResult<Option<Vec2>> {
        Ok(self.vector::<2>(key)?.map(Vec2::from))
    }

    /// Read a 3-component vector field
    pub fn vec3(&self, key: &str) -> SceneResult<Option<Vec3>> {
        Ok(self.vector::<3>(key)?.map(Vec3::from))
    }

    /// Read a 4-component vector field
    pub fn vec4(&self, key: &str) -> SceneResult<Option<Vec4>> {
        Ok(self.vector::<4>(key)?.map(Vec4::from))
    }

    /// Read an entity reference.
    ///
    /// The outer option tells whether the field was given at all; the inner
    /// one is the (nullable) reference itself.
    pub fn entity(&self, key: &str) -> SceneResult<Option<EntityRef>> {
        match self.get(key) {
            None => Ok(None),
            Some(PropertyValue::Entity(value)) => Ok(Some(*value)),
            Some(other) => Err(mismatch(key, "entity", other)),
        }
    }

    fn vector<const N: usize>(&self, key: &str) -> SceneResult<Option<[f32; N]>> {
        match self.get(key) {
            None => Ok(None),
            Some(PropertyValue::Vector(values)) => <[f32; N]>::try_from(values.as_slice())
                .map(Some)
                .map_err(|_| {
                    SceneError::invalid_field(
                        key,
                        format!("expected {N} components, found {}", values.len()),
                    )
                }),
            Some(other) => Err(mismatch(key, "vector", other)),
        }
    }
}

fn mismatch(key: &str, expected: &str, found: &PropertyValue) -> SceneError {
    SceneError::invalid_field(key, format!("expected {expected}, found {}", found.type_name()))
}
