//! Scene graph errors

use super::{ComponentType, Entity, Guid};

/// Errors raised by scene graph operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Attaching would make an entity its own ancestor
    #[error("cannot attach {child:?} under {parent:?}: the child is an ancestor of the parent")]
    CycleDetected {
        /// Entity being attached
        child: Entity,
        /// Requested parent
        parent: Entity,
    },

    /// The child already has a parent; detach it or use `reparent`
    #[error("entity {child:?} is already parented to {parent:?}")]
    AlreadyParented {
        /// Entity being attached
        child: Entity,
        /// Its current parent
        parent: Entity,
    },

    /// Attaching would push part of the subtree past the configured depth limit
    #[error("attaching {child:?} would exceed the maximum graph depth of {limit}")]
    DepthLimitExceeded {
        /// Entity being attached
        child: Entity,
        /// Configured limit
        limit: usize,
    },

    /// The entity is not a child of the given parent
    #[error("entity {child:?} is not a child of {parent:?}")]
    NotAChild {
        /// Entity expected among the children
        child: Entity,
        /// Parent that was searched
        parent: Entity,
    },

    /// A component of this type is already attached
    #[error("entity {entity:?} already has a {component} component")]
    ComponentAlreadyExists {
        /// Target entity
        entity: Entity,
        /// Duplicate component type
        component: ComponentType,
    },

    /// The GUID already belongs to a live entity
    #[error("guid {0} is already registered")]
    DuplicateGuid(Guid),

    /// No live entity carries this GUID
    #[error("no entity registered with guid {0}")]
    NotFound(Guid),

    /// The handle does not point at a live entity
    #[error("entity handle {0:?} does not refer to a live entity")]
    StaleEntity(Entity),

    /// The entity lacks a component the operation needs
    #[error("entity {entity:?} has no {component} component")]
    MissingComponent {
        /// Entity that was inspected
        entity: Entity,
        /// Missing component type
        component: ComponentType,
    },

    /// The type name does not match any component type
    #[error("unknown component type '{0}'")]
    UnknownComponentType(String),

    /// No system is registered for the component type
    #[error("no system registered for {0} components")]
    SystemNotRegistered(ComponentType),

    /// Component data had a missing, mistyped or malformed field
    #[error("invalid value for field '{field}': {reason}")]
    InvalidField {
        /// Field name
        field: String,
        /// What was wrong with it
        reason: String,
    },
}

/// Broad error categories used to decide how a failure propagates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Parent/child attachment would break the tree
    Structural,
    /// Something that must be unique already exists
    DuplicateComponent,
    /// A lookup by handle, GUID or type came up empty
    ReferenceNotFound,
    /// Component data was malformed
    InvalidField,
}

impl SceneError {
    /// Category of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CycleDetected { .. }
            | Self::AlreadyParented { .. }
            | Self::DepthLimitExceeded { .. }
            | Self::NotAChild { .. } => ErrorKind::Structural,
            Self::ComponentAlreadyExists { .. } | Self::DuplicateGuid(_) => {
                ErrorKind::DuplicateComponent
            }
            Self::NotFound(_)
            | Self::StaleEntity(_)
            | Self::MissingComponent { .. }
            | Self::UnknownComponentType(_)
            | Self::SystemNotRegistered(_) => ErrorKind::ReferenceNotFound,
            Self::InvalidField { .. } => ErrorKind::InvalidField,
        }
    }

    pub(crate) fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Result type for scene graph operations
pub type SceneResult<T> = Result<T, SceneError>;
