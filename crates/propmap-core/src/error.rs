//! Error types for the mapper and its introspection adapters.

use thiserror::Error;

/// Unified error type for propmap.
///
/// Only [`MapError::ConstructorNotFound`] is surfaced by the mapping
/// operations. The adapter variants are raised by `Mappable`
/// implementations that are handed a value they cannot store; the mapper
/// checks assignability up front, so a consistent adapter never produces them
/// during a mapping call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    // ============ Mapping Errors ============
    /// The target type declares no public constructor and no target
    /// instance was supplied.
    #[error("No public constructor found for {type_name}")]
    ConstructorNotFound { type_name: &'static str },

    // ============ Adapter Errors ============
    /// A constructor argument did not have the declared parameter type.
    #[error("Constructor {constructor} expected {expected} for parameter {parameter}, found {found}")]
    ArgumentType {
        constructor: &'static str,
        parameter: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A constructor was invoked with fewer arguments than it declares.
    #[error("Constructor {constructor} is missing an argument for parameter {parameter}")]
    MissingArgument {
        constructor: &'static str,
        parameter: &'static str,
    },

    /// A property write carried a value of the wrong type.
    #[error("Property {type_name}.{property} expected {expected}, found {found}")]
    PropertyType {
        type_name: &'static str,
        property: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A write targeted a property that does not exist or is read-only.
    #[error("Property {type_name}.{property} is not writable")]
    PropertyNotWritable {
        type_name: &'static str,
        property: String,
    },

    // ============ Infrastructure Errors ============
    /// Settings could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl MapError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConstructorNotFound { .. } => "CONSTRUCTOR_NOT_FOUND",
            Self::ArgumentType { .. } => "ARGUMENT_TYPE_MISMATCH",
            Self::MissingArgument { .. } => "MISSING_ARGUMENT",
            Self::PropertyType { .. } => "PROPERTY_TYPE_MISMATCH",
            Self::PropertyNotWritable { .. } => "PROPERTY_NOT_WRITABLE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Creates a constructor-not-found error for a type.
    #[must_use]
    pub const fn constructor_not_found(type_name: &'static str) -> Self {
        Self::ConstructorNotFound { type_name }
    }

    /// Creates a not-writable error for a property.
    #[must_use]
    pub fn not_writable<T: Into<String>>(type_name: &'static str, property: T) -> Self {
        Self::PropertyNotWritable {
            type_name,
            property: property.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Checks if this error reports a broken `Mappable` implementation
    /// rather than a mapping outcome.
    #[must_use]
    pub const fn is_adapter_error(&self) -> bool {
        matches!(
            self,
            Self::ArgumentType { .. }
                | Self::MissingArgument { .. }
                | Self::PropertyType { .. }
                | Self::PropertyNotWritable { .. }
        )
    }
}
