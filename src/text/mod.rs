//! Localized text (FText) values.
//!
//! - [`RichText`] and its argument types - the value model
//! - [`encode`] / [`decode`] - conversion to and from flat strings
//! - [`to_display_string`] - lossy rendering for editors and logs

mod model;
mod codec;
mod display;

pub use model::*;
pub use codec::{
    decode, encode, KNOWN_TEMPLATE_GUIDS, LINE_SEPARATOR, MAX_DECODE_DEPTH,
    MULTILINE_TEMPLATE_GUID,
};
pub use display::to_display_string;
