//! Utility types and functions for GVAS values.
//!
//! This module contains fundamental types used throughout the library:
//! - [`Error`] / [`Result`] - Error handling
//! - Engine math types built on glam and single-precision coercion

mod error;
mod math;

pub use error::*;
pub use math::*;

/// Engine string value: `None` is the null string, distinct from `""`.
pub type GvasString = Option<String>;
