//! Save property model.
//!
//! - [`TypePath`] - closed set of legal property shapes
//! - [`PropertyValue`] / [`PropertyRef`] - owned and borrowed typed values
//! - [`Gvas`] - per-save property collection with key order
//! - [`GvasHeader`] - header fields carried for re-encoding

mod type_path;
mod value;
mod header;
mod collection;
#[cfg(feature = "serde")]
mod json;

pub use type_path::{PropertyKind, TypePath};
pub use value::{Permission, PropertyRef, PropertyValue};
pub use header::{CustomData, EngineVersion, GvasHeader};
pub use collection::Gvas;
