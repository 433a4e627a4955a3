//! Property, parameter, and constructor descriptors.
//!
//! Descriptors are built on demand by `Mappable` implementations and live
//! only for the duration of a mapping call.

use crate::{MapError, MapResult, TypeInfo, Value};
use std::fmt;

/// A public instance property of a mappable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Property name, as declared.
    pub name: &'static str,
    /// Declared type.
    pub ty: TypeInfo,
    /// Whether the mapper may read the property.
    pub readable: bool,
    /// Whether the mapper may write the property.
    pub writable: bool,
}

impl PropertyDescriptor {
    /// A property that can be read and written.
    #[must_use]
    pub const fn read_write(name: &'static str, ty: TypeInfo) -> Self {
        Self {
            name,
            ty,
            readable: true,
            writable: true,
        }
    }

    /// A property that can only be read.
    #[must_use]
    pub const fn read_only(name: &'static str, ty: TypeInfo) -> Self {
        Self {
            name,
            ty,
            readable: true,
            writable: false,
        }
    }

    /// A property that can only be written.
    #[must_use]
    pub const fn write_only(name: &'static str, ty: TypeInfo) -> Self {
        Self {
            name,
            ty,
            readable: false,
            writable: true,
        }
    }
}

/// A constructor parameter.
#[derive(Clone, Copy)]
pub struct ParameterDescriptor {
    /// Parameter name, matched case-insensitively against source properties.
    pub name: &'static str,
    /// Declared type.
    pub ty: TypeInfo,
    fallback: fn() -> Value,
}

impl ParameterDescriptor {
    /// A value-typed parameter; its zero value is `T::default()`.
    #[must_use]
    pub fn new<T: Default + 'static>(name: &'static str) -> Self {
        Self {
            name,
            ty: TypeInfo::of::<T>(),
            fallback: || Value::new(T::default()),
        }
    }

    /// A nullable `Option<T>` parameter; its fallback is `None`.
    #[must_use]
    pub fn optional<T: 'static>(name: &'static str) -> Self {
        Self {
            name,
            ty: TypeInfo::optional::<T>(),
            fallback: || Value::new(None::<T>),
        }
    }

    /// Produces the value passed when no source property resolves this parameter.
    #[must_use]
    pub fn fallback(&self) -> Value {
        (self.fallback)()
    }
}

impl fmt::Debug for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterDescriptor")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .finish_non_exhaustive()
    }
}

/// A public constructor of `T`.
pub struct ConstructorDescriptor<T> {
    /// Constructor name (`default` for the `Default` path).
    pub name: &'static str,
    /// Ordered parameters.
    pub params: Vec<ParameterDescriptor>,
    invoke: fn(ConstructorArgs) -> MapResult<T>,
}

impl<T> ConstructorDescriptor<T> {
    /// Declares a constructor.
    #[must_use]
    pub fn new(
        name: &'static str,
        params: Vec<ParameterDescriptor>,
        invoke: fn(ConstructorArgs) -> MapResult<T>,
    ) -> Self {
        Self {
            name,
            params,
            invoke,
        }
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Invokes the constructor with positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::ArgumentType`] or [`MapError::MissingArgument`]
    /// when `args` does not match the declared parameters.
    pub fn invoke(&self, args: Vec<Value>) -> MapResult<T> {
        (self.invoke)(ConstructorArgs::new(self.name, args))
    }
}

impl<T: Default> ConstructorDescriptor<T> {
    /// The zero-argument `Default::default()` construction path.
    #[must_use]
    pub fn default_path() -> Self {
        Self::new("default", Vec::new(), |_| Ok(T::default()))
    }
}

impl<T> fmt::Debug for ConstructorDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorDescriptor")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Positional arguments handed to a constructor invoker.
#[derive(Debug)]
pub struct ConstructorArgs {
    constructor: &'static str,
    values: std::vec::IntoIter<Value>,
}

impl ConstructorArgs {
    /// Wraps an argument list for the named constructor.
    #[must_use]
    pub fn new(constructor: &'static str, values: Vec<Value>) -> Self {
        Self {
            constructor,
            values: values.into_iter(),
        }
    }

    /// Takes the next argument as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MissingArgument`] when the arguments are used up,
    /// or [`MapError::ArgumentType`] when the next one is not a `T`.
    pub fn next<T: 'static>(&mut self, parameter: &'static str) -> MapResult<T> {
        let value = self.take(parameter)?;
        value.downcast::<T>().map_err(|value| MapError::ArgumentType {
            constructor: self.constructor,
            parameter,
            expected: std::any::type_name::<T>(),
            found: value.type_name(),
        })
    }

    /// Takes the next argument as an `Option<T>`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MissingArgument`] when the arguments are used up,
    /// or [`MapError::ArgumentType`] when the next one is neither `Option<T>`
    /// nor `T`.
    pub fn next_optional<T: 'static>(&mut self, parameter: &'static str) -> MapResult<Option<T>> {
        let value = self.take(parameter)?;
        value
            .downcast_optional::<T>()
            .map_err(|value| MapError::ArgumentType {
                constructor: self.constructor,
                parameter,
                expected: std::any::type_name::<Option<T>>(),
                found: value.type_name(),
            })
    }

    fn take(&mut self, parameter: &'static str) -> MapResult<Value> {
        self.values.next().ok_or(MapError::MissingArgument {
            constructor: self.constructor,
            parameter,
        })
    }
}
