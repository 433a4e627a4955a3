//! Runtime type identity and type-erased property values.

use crate::{MapError, MapResult};
use std::any::{Any, TypeId};
use std::fmt;

/// Shape of a declared type as far as assignability is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    /// A plain value; never absent.
    Value,
    /// `Option<Inner>`; absent is `None`.
    Optional {
        inner: TypeId,
        inner_name: &'static str,
    },
}

/// Identity of a declared property or parameter type.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
    shape: TypeShape,
}

impl TypeInfo {
    /// Describes a plain value type `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            shape: TypeShape::Value,
        }
    }

    /// Describes the nullable type `Option<T>`.
    #[must_use]
    pub fn optional<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<Option<T>>(),
            name: std::any::type_name::<Option<T>>(),
            shape: TypeShape::Optional {
                inner: TypeId::of::<T>(),
                inner_name: std::any::type_name::<T>(),
            },
        }
    }

    /// Returns the `TypeId` of the declared type.
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the declared type's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the type shape.
    #[must_use]
    pub const fn shape(&self) -> TypeShape {
        self.shape
    }

    /// Returns true if absence is representable (`Option<_>`).
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self.shape, TypeShape::Optional { .. })
    }

    /// Checks whether a slot of this type can accept a value of `source`'s type.
    ///
    /// Identical types are assignable, and an `Option<X>` slot accepts a plain
    /// `X`. A nullable source never fits a non-nullable slot.
    #[must_use]
    pub fn is_assignable_from(&self, source: &TypeInfo) -> bool {
        if self.id == source.id {
            return true;
        }
        match (self.shape, source.shape) {
            (TypeShape::Optional { inner, .. }, TypeShape::Value) => inner == source.id,
            _ => false,
        }
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("nullable", &self.is_nullable())
            .finish()
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// An owned, type-erased property value.
pub struct Value {
    type_name: &'static str,
    inner: Box<dyn Any>,
}

impl Value {
    /// Wraps a value.
    #[must_use]
    pub fn new<T: 'static>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Box::new(value),
        }
    }

    /// Returns the concrete type name of the wrapped value.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns true if the wrapped value is a `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrows the wrapped value as a `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Unwraps the value as a `T`.
    ///
    /// # Errors
    ///
    /// Hands the value back unchanged if it is not a `T`.
    pub fn downcast<T: 'static>(self) -> Result<T, Self> {
        let type_name = self.type_name;
        self.inner
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|inner| Self { type_name, inner })
    }

    /// Unwraps the value for an `Option<T>` slot.
    ///
    /// Accepts either an `Option<T>` or a bare `T`, which is wrapped in `Some`.
    ///
    /// # Errors
    ///
    /// Hands the value back unchanged if it is neither.
    pub fn downcast_optional<T: 'static>(self) -> Result<Option<T>, Self> {
        match self.downcast::<Option<T>>() {
            Ok(value) => Ok(value),
            Err(value) => value.downcast::<T>().map(Some),
        }
    }

    /// Unwraps the value for the property `type_name.property` of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::PropertyType`] on a type mismatch.
    pub fn into_property<T: 'static>(
        self,
        type_name: &'static str,
        property: &'static str,
    ) -> MapResult<T> {
        self.downcast::<T>().map_err(|value| MapError::PropertyType {
            type_name,
            property,
            expected: std::any::type_name::<T>(),
            found: value.type_name,
        })
    }

    /// Unwraps the value for the nullable property `type_name.property`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::PropertyType`] on a type mismatch.
    pub fn into_optional_property<T: 'static>(
        self,
        type_name: &'static str,
        property: &'static str,
    ) -> MapResult<Option<T>> {
        self.downcast_optional::<T>()
            .map_err(|value| MapError::PropertyType {
                type_name,
                property,
                expected: std::any::type_name::<Option<T>>(),
                found: value.type_name,
            })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
