//! # Propmap Core
//!
//! Introspection model, the [`Mappable`] capability trait, and the
//! name-based structural mapper used to convert between layered
//! data-transfer types (entity ↔ response DTO and similar).

pub mod descriptor;
pub mod error;
pub mod mapper;
pub mod options;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod types;

pub use descriptor::*;
pub use error::*;
pub use mapper::*;
pub use options::*;
pub use result::*;
pub use telemetry::*;
pub use traits::*;
pub use types::*;
