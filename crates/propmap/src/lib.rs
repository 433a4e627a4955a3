//! # Propmap
//!
//! Name-based property mapping between structurally similar types, for the
//! entity ↔ DTO conversions of a layered application.
//!
//! ```rust,ignore
//! use propmap::{MapInto, Mappable};
//!
//! #[derive(Mappable, Clone)]
//! pub struct User {
//!     pub username: String,
//!     pub age: u32,
//!     pub password_hash: String,
//! }
//!
//! #[derive(Mappable, Clone, Default)]
//! #[mapper(default)]
//! pub struct UserResponse {
//!     pub username: String,
//!     pub age: u32,
//! }
//!
//! let response: UserResponse = user.map_into()?;
//! ```
//!
//! [`map`] and [`map_all`] take and return `Option`s: an absent source maps
//! to an absent target. [`Mapper`] carries [`MapperOptions`] when the
//! defaults are not wanted.

pub use propmap_core::*;
pub use propmap_derive::Mappable;
