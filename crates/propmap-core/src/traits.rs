//! The introspection capability implemented by every mappable type.

use crate::{ConstructorDescriptor, MapResult, PropertyDescriptor, Value};

/// A type the structural mapper can read from and construct or populate.
///
/// Usually generated with `#[derive(Mappable)]`; hand-written
/// implementations act as explicit per-type adapters and must keep the
/// descriptors consistent with `read_property` and `write_property`.
pub trait Mappable: Sized + 'static {
    /// Returns the type name used in errors and logs.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns the public instance properties in declaration order.
    fn properties() -> Vec<PropertyDescriptor>;

    /// Returns the public constructors in declaration order.
    ///
    /// An empty list means the type cannot be constructed by the mapper.
    fn constructors() -> Vec<ConstructorDescriptor<Self>>;

    /// Reads a readable property by exact name, cloning its value.
    fn read_property(&self, name: &str) -> Option<Value>;

    /// Writes a writable property by exact name.
    ///
    /// # Errors
    ///
    /// Returns an adapter error if the property is not writable or the value
    /// has the wrong type.
    fn write_property(&mut self, name: &str, value: Value) -> MapResult<()>;
}
