//! Mapper options.

use serde::{Deserialize, Serialize};

/// How the mapper picks a constructor when it has to build the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructorSelection {
    /// The first constructor in declaration order.
    #[default]
    FirstDeclared,
    /// The constructor with the most parameters resolvable from the source.
    /// Ties go to the earliest declared.
    MostResolvable,
}

/// Options controlling a [`Mapper`](crate::Mapper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperOptions {
    /// Constructor selection policy.
    #[serde(default)]
    pub constructor_selection: ConstructorSelection,

    /// Whether properties are copied onto a freshly constructed target.
    /// Supplied targets are always populated.
    #[serde(default = "default_propagate_after_construction")]
    pub propagate_after_construction: bool,
}

fn default_propagate_after_construction() -> bool {
    true
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            constructor_selection: ConstructorSelection::default(),
            propagate_after_construction: default_propagate_after_construction(),
        }
    }
}

impl MapperOptions {
    /// Sets the constructor selection policy.
    #[must_use]
    pub const fn with_constructor_selection(mut self, selection: ConstructorSelection) -> Self {
        self.constructor_selection = selection;
        self
    }

    /// Sets whether constructed targets are also populated property by property.
    #[must_use]
    pub const fn with_propagate_after_construction(mut self, enabled: bool) -> Self {
        self.propagate_after_construction = enabled;
        self
    }
}
