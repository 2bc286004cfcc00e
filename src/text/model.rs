//! Rich text (FText) value model.
//!
//! Each [`RichText`] variant corresponds to one on-disk text history type.
//! The discriminant is explicit: the reader picks the variant from the
//! history byte, never from which fields happen to be present.

use crate::util::{Error, GvasString, Result};
use smallvec::SmallVec;
use std::fmt;

/// On-disk text history type byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TextHistoryType {
    /// Plain culture-invariant text
    None = 255,
    /// Localized string with namespace and key
    Base = 0,
    /// Pattern with named arguments
    ArgumentFormat = 3,
    /// Number formatted as text
    AsNumber = 4,
}

impl TextHistoryType {
    /// Convert from the on-disk byte.
    pub fn from_u8(v: u8) -> Result<Self> {
        match v {
            255 => Ok(Self::None),
            0 => Ok(Self::Base),
            3 => Ok(Self::ArgumentFormat),
            4 => Ok(Self::AsNumber),
            _ => Err(Error::UnknownHistoryType(v)),
        }
    }

    /// The on-disk byte.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for TextHistoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Localized text value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RichText {
    /// Plain text with zero or one string.
    None {
        flags: u32,
        values: SmallVec<[GvasString; 1]>,
    },
    /// Leaf localized string.
    Base {
        flags: u32,
        namespace: GvasString,
        key: GvasString,
        value: GvasString,
    },
    /// Pattern (a `Base` text) plus positional/named arguments.
    ArgumentFormat {
        flags: u32,
        source_format: Box<RichText>,
        args: Vec<NamedArgument>,
    },
    /// Value rendered as a number, or recursively as text.
    AsNumber {
        flags: u32,
        source_value: Box<ArgumentValue>,
        format_options: Option<NumberFormatOptions>,
        target_culture: GvasString,
    },
}

impl RichText {
    /// Plain text holding `value`, or nothing for the null string.
    pub fn none(flags: u32, value: GvasString) -> Self {
        Self::None {
            flags,
            values: value.into_iter().map(Some).collect(),
        }
    }

    /// Leaf text with the empty namespace.
    pub fn base(flags: u32, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Base {
            flags,
            namespace: Some(String::new()),
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    /// History type of this value.
    pub const fn history_type(&self) -> TextHistoryType {
        match self {
            Self::None { .. } => TextHistoryType::None,
            Self::Base { .. } => TextHistoryType::Base,
            Self::ArgumentFormat { .. } => TextHistoryType::ArgumentFormat,
            Self::AsNumber { .. } => TextHistoryType::AsNumber,
        }
    }

    /// Flags common to every variant.
    pub const fn flags(&self) -> u32 {
        match self {
            Self::None { flags, .. }
            | Self::Base { flags, .. }
            | Self::ArgumentFormat { flags, .. }
            | Self::AsNumber { flags, .. } => *flags,
        }
    }
}

impl Default for RichText {
    fn default() -> Self {
        Self::None {
            flags: 0,
            values: SmallVec::new(),
        }
    }
}

/// Argument value of an `ArgumentFormat` or `AsNumber` text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgumentValue {
    Int(i64),
    Text(RichText),
}

impl From<i64> for ArgumentValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<RichText> for ArgumentValue {
    fn from(v: RichText) -> Self {
        Self::Text(v)
    }
}

/// Named argument of an `ArgumentFormat` text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedArgument {
    pub name: GvasString,
    pub value: ArgumentValue,
}

impl NamedArgument {
    pub fn new(name: impl Into<String>, value: impl Into<ArgumentValue>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }
}

/// Number formatting options of an `AsNumber` text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberFormatOptions {
    pub always_include_sign: bool,
    pub use_grouping: bool,
    pub rounding_mode: RoundingMode,
    pub minimum_integral_digits: i32,
    pub maximum_integral_digits: i32,
    pub minimum_fractional_digits: i32,
    pub maximum_fractional_digits: i32,
}

/// Rounding mode of [`NumberFormatOptions`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum RoundingMode {
    #[default]
    HalfToEven = 0,
    HalfFromZero = 1,
    HalfToZero = 2,
    FromZero = 3,
    ToZero = 4,
    ToNegativeInfinity = 5,
    ToPositiveInfinity = 6,
}

impl RoundingMode {
    /// Convert from the on-disk byte.
    pub fn from_u8(v: u8) -> Result<Self> {
        match v {
            0 => Ok(Self::HalfToEven),
            1 => Ok(Self::HalfFromZero),
            2 => Ok(Self::HalfToZero),
            3 => Ok(Self::FromZero),
            4 => Ok(Self::ToZero),
            5 => Ok(Self::ToNegativeInfinity),
            6 => Ok(Self::ToPositiveInfinity),
            _ => Err(Error::UnknownRoundingMode(v)),
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}
