//! The structural mapper.
//!
//! Matches properties by name and copies every value whose type the target
//! slot can accept. When no target is supplied one is built from the target
//! type's constructors, resolving parameters against source properties by
//! case-insensitive name.

use crate::{
    ConstructorDescriptor, ConstructorSelection, MapError, MapResult, Mappable, MapperOptions,
    ParameterDescriptor, PropertyDescriptor, Value,
};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Name-based property mapper.
///
/// Stateless apart from its options; every call re-reads the descriptors of
/// both types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mapper {
    options: MapperOptions,
}

impl Mapper {
    /// Creates a mapper with the given options.
    #[must_use]
    pub const fn new(options: MapperOptions) -> Self {
        Self { options }
    }

    /// Returns the mapper's options.
    #[must_use]
    pub const fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Maps `source` onto `target`, or onto a newly constructed `T` when no
    /// target is supplied.
    ///
    /// An absent source yields `None` and constructs nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::ConstructorNotFound`] when a target has to be
    /// constructed and `T` declares no constructor.
    pub fn map<S, T>(&self, source: Option<&S>, target: Option<T>) -> MapResult<Option<T>>
    where
        S: Mappable,
        T: Mappable,
    {
        match source {
            Some(source) => self.map_present(source, target).map(Some),
            None => {
                trace!(source = S::type_name(), target = T::type_name(), "Source absent, nothing to map");
                Ok(None)
            }
        }
    }

    /// Maps a sequence of sources, pairing each with the target at the same
    /// position.
    ///
    /// The result has one element per source, in source order. Missing
    /// targets are treated as absent and surplus targets are dropped. An
    /// absent `sources` yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns the first [`MapError::ConstructorNotFound`] encountered.
    pub fn map_all<'a, S, T, I, J>(
        &self,
        sources: Option<I>,
        targets: Option<J>,
    ) -> MapResult<Vec<Option<T>>>
    where
        S: Mappable,
        T: Mappable,
        I: IntoIterator<Item = Option<&'a S>>,
        J: IntoIterator<Item = Option<T>>,
    {
        let Some(sources) = sources else {
            return Ok(Vec::new());
        };
        let mut targets = targets.map(|targets| targets.into_iter().fuse());

        sources
            .into_iter()
            .map(|source| {
                let paired = targets.as_mut().and_then(Iterator::next).flatten();
                self.map(source, paired)
            })
            .collect()
    }

    pub(crate) fn map_present<S, T>(&self, source: &S, target: Option<T>) -> MapResult<T>
    where
        S: Mappable,
        T: Mappable,
    {
        let source_properties: Vec<PropertyDescriptor> = S::properties()
            .into_iter()
            .filter(|property| property.readable)
            .collect();

        let (mut target, propagate) = match target {
            Some(target) => (target, true),
            None => (
                self.construct::<S, T>(source, &source_properties)?,
                self.options.propagate_after_construction,
            ),
        };

        if propagate {
            Self::propagate(source, &source_properties, &mut target);
        }
        Ok(target)
    }

    fn construct<S, T>(&self, source: &S, source_properties: &[PropertyDescriptor]) -> MapResult<T>
    where
        S: Mappable,
        T: Mappable,
    {
        let constructor = self
            .select_constructor(T::constructors(), source_properties)
            .ok_or_else(|| MapError::constructor_not_found(T::type_name()))?;

        debug!(
            target = T::type_name(),
            constructor = constructor.name,
            arity = constructor.arity(),
            "Constructing target"
        );

        let args = constructor
            .params
            .iter()
            .map(|param| Self::resolve_argument(source, source_properties, param))
            .collect();
        constructor.invoke(args)
    }

    fn select_constructor<T>(
        &self,
        constructors: Vec<ConstructorDescriptor<T>>,
        source_properties: &[PropertyDescriptor],
    ) -> Option<ConstructorDescriptor<T>> {
        match self.options.constructor_selection {
            ConstructorSelection::FirstDeclared => constructors.into_iter().next(),
            ConstructorSelection::MostResolvable => {
                let mut best: Option<(usize, ConstructorDescriptor<T>)> = None;
                for constructor in constructors {
                    let resolvable = constructor
                        .params
                        .iter()
                        .filter(|param| resolvable_property(source_properties, param).is_some())
                        .count();
                    if best.as_ref().map_or(true, |(score, _)| resolvable > *score) {
                        best = Some((resolvable, constructor));
                    }
                }
                best.map(|(_, constructor)| constructor)
            }
        }
    }

    fn resolve_argument<S: Mappable>(
        source: &S,
        source_properties: &[PropertyDescriptor],
        param: &ParameterDescriptor,
    ) -> Value {
        if let Some(property) = resolvable_property(source_properties, param) {
            if let Some(value) = source.read_property(property.name) {
                trace!(parameter = param.name, property = property.name, "Resolved constructor argument");
                return value;
            }
        }
        trace!(parameter = param.name, nullable = param.ty.is_nullable(), "Using fallback argument");
        param.fallback()
    }

    fn propagate<S, T>(source: &S, source_properties: &[PropertyDescriptor], target: &mut T)
    where
        S: Mappable,
        T: Mappable,
    {
        let target_properties: HashMap<&'static str, PropertyDescriptor> = T::properties()
            .into_iter()
            .filter(|property| property.writable)
            .map(|property| (property.name, property))
            .collect();

        let mut copied = 0_usize;
        for property in source_properties {
            let Some(slot) = target_properties.get(property.name) else {
                trace!(property = property.name, "No writable target property");
                continue;
            };
            if !slot.ty.is_assignable_from(&property.ty) {
                trace!(
                    property = property.name,
                    source_type = property.ty.name(),
                    target_type = slot.ty.name(),
                    "Incompatible property types"
                );
                continue;
            }
            let Some(value) = source.read_property(property.name) else {
                continue;
            };
            match target.write_property(slot.name, value) {
                Ok(()) => copied += 1,
                Err(err) => warn!(property = property.name, error = %err, "Target rejected property value"),
            }
        }

        debug!(
            source = S::type_name(),
            target = T::type_name(),
            copied,
            "Propagated properties"
        );
    }
}

/// Finds the first source property whose name matches the parameter name
/// case-insensitively, provided its type fits the parameter.
fn resolvable_property<'p>(
    source_properties: &'p [PropertyDescriptor],
    param: &ParameterDescriptor,
) -> Option<&'p PropertyDescriptor> {
    source_properties
        .iter()
        .find(|property| names_match_ignore_case(property.name, param.name))
        .filter(|property| param.ty.is_assignable_from(&property.ty))
}

fn names_match_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Maps with default options. See [`Mapper::map`].
///
/// # Errors
///
/// Returns [`MapError::ConstructorNotFound`] when `T` cannot be constructed.
pub fn map<S, T>(source: Option<&S>, target: Option<T>) -> MapResult<Option<T>>
where
    S: Mappable,
    T: Mappable,
{
    Mapper::default().map(source, target)
}

/// Maps a sequence with default options. See [`Mapper::map_all`].
///
/// # Errors
///
/// Returns [`MapError::ConstructorNotFound`] when `T` cannot be constructed.
pub fn map_all<'a, S, T, I, J>(sources: Option<I>, targets: Option<J>) -> MapResult<Vec<Option<T>>>
where
    S: Mappable,
    T: Mappable,
    I: IntoIterator<Item = Option<&'a S>>,
    J: IntoIterator<Item = Option<T>>,
{
    Mapper::default().map_all(sources, targets)
}

/// Method-style mapping for present values.
pub trait MapInto: Mappable {
    /// Maps `self` onto a newly constructed `T`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::ConstructorNotFound`] when `T` cannot be constructed.
    fn map_into<T: Mappable>(&self) -> MapResult<T> {
        Mapper::default().map_present(self, None)
    }

    /// Populates an existing `target` from `self`.
    ///
    /// # Errors
    ///
    /// Never fails for a consistent `Mappable` implementation; the `Result`
    /// mirrors [`MapInto::map_into`].
    fn map_onto<T: Mappable>(&self, target: T) -> MapResult<T> {
        Mapper::default().map_present(self, Some(target))
    }
}

impl<S: Mappable> MapInto for S {}

/// Method-style mapping for slices of present values.
pub trait MapAllInto {
    /// Maps every element onto a newly constructed `T`, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::ConstructorNotFound`] when `T` cannot be constructed.
    fn map_all_into<T: Mappable>(&self) -> MapResult<Vec<T>>;
}

impl<S: Mappable> MapAllInto for [S] {
    fn map_all_into<T: Mappable>(&self) -> MapResult<Vec<T>> {
        let mapper = Mapper::default();
        self.iter()
            .map(|source| mapper.map_present(source, None))
            .collect()
    }
}
