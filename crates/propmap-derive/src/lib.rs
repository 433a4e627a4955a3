//! # Propmap Derive
//!
//! `#[derive(Mappable)]` generates the introspection adapter the structural
//! mapper reads: property descriptors, constructor descriptors, and
//! name-dispatched property accessors.
//!
//! ```rust,ignore
//! use propmap::Mappable;
//!
//! #[derive(Mappable, Clone, Default)]
//! #[mapper(default)]
//! pub struct UserView {
//!     pub username: String,
//!     pub age: u32,
//!     #[mapper(readonly)]
//!     pub id: u64,
//!     pub nickname: Option<String>,
//! }
//!
//! #[derive(Mappable, Clone)]
//! #[mapper(constructor = new(username: String, age: u32))]
//! pub struct UserRecord {
//!     #[mapper(readonly)]
//!     pub username: String,
//!     #[mapper(readonly)]
//!     pub age: u32,
//! }
//! ```
//!
//! Only `pub` fields are properties. Field types must be `Clone + 'static`;
//! non-`Option` constructor parameters must implement `Default`, which
//! supplies the value passed when the source has no matching property.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attr;
mod expand;

/// Derives `propmap::Mappable` for a struct with named fields.
///
/// Struct attributes declare public constructors in order:
/// `#[mapper(default)]` and `#[mapper(constructor = func(name: Type, ...))]`.
/// Field attributes: `#[mapper(readonly)]`, `#[mapper(writeonly)]`,
/// `#[mapper(skip)]`.
#[proc_macro_derive(Mappable, attributes(mapper))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::derive_mappable(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
