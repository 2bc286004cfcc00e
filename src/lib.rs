//! # GVAS
//!
//! Text codec and typed property model for Unreal Engine GVAS save files.
//!
//! The byte-level reader and writer live elsewhere; this crate owns the
//! values they exchange and the conversions editing tools need on top:
//!
//! - [`util`] - Errors, engine math types, single-precision coercion
//! - [`text`] - Localized text (FText) model and its string codec
//! - [`property`] - Property type paths and the per-save property collection
//!
//! ## Example
//!
//! ```
//! use gvas::text::{decode, encode, to_display_string};
//!
//! let text = encode(Some("Line 1<br>Line 2"));
//! let flat = decode(&text)?;
//! assert_eq!(flat.as_deref(), Some("Line 1<br>Line 2"));
//! assert_eq!(to_display_string(flat.as_deref()), "Line 1\nLine 2");
//! # Ok::<(), gvas::Error>(())
//! ```

pub mod util;
pub mod text;
pub mod property;

// Re-export commonly used types
pub use util::{coerce32, Error, Fp32, GvasString, Result};
pub use text::{decode, encode, to_display_string, RichText};
pub use property::{Gvas, PropertyValue, TypePath};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{
        coerce32, Error, Fp32, GvasString, Quaternion, Result, Rotator, Transform, Vector,
    };
    pub use crate::text::{
        decode, encode, to_display_string, ArgumentValue, NamedArgument, RichText,
    };
    pub use crate::property::{Gvas, GvasHeader, PropertyRef, PropertyValue, TypePath};
}
