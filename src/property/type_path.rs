//! Property type paths - the closed set of on-disk property shapes.
//!
//! A type path is the property type name, followed by the element type for
//! arrays and the struct name for struct properties, e.g.
//! `ArrayProperty/StructProperty/Vector`.

use crate::util::{Error, Result};
use std::fmt;

/// Engine property type names that appear in type paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
    Array,
    Bool,
    Byte,
    Enum,
    Float,
    Int,
    Name,
    Str,
    Struct,
    Text,
}

impl PropertyKind {
    /// Engine name of this property type.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Array => "ArrayProperty",
            Self::Bool => "BoolProperty",
            Self::Byte => "ByteProperty",
            Self::Enum => "EnumProperty",
            Self::Float => "FloatProperty",
            Self::Int => "IntProperty",
            Self::Name => "NameProperty",
            Self::Str => "StrProperty",
            Self::Struct => "StructProperty",
            Self::Text => "TextProperty",
        }
    }

    /// Parse a property type from its engine name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrayProperty" => Some(Self::Array),
            "BoolProperty" => Some(Self::Bool),
            "ByteProperty" => Some(Self::Byte),
            "EnumProperty" => Some(Self::Enum),
            "FloatProperty" => Some(Self::Float),
            "IntProperty" => Some(Self::Int),
            "NameProperty" => Some(Self::Name),
            "StrProperty" => Some(Self::Str),
            "StructProperty" => Some(Self::Struct),
            "TextProperty" => Some(Self::Text),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Legal on-disk shape of a save property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypePath {
    BoolArray,
    ByteArray,
    EnumArray,
    FloatArray,
    IntArray,
    NameArray,
    StrArray,
    PermissionArray,
    RotatorArray,
    TransformArray,
    VectorArray,
    TextArray,
    Bool,
    Float,
    Int,
    Name,
    Str,
    DateTime,
    /// Empty path, for properties without a stored type.
    Untyped,
}

impl TypePath {
    /// Number of legal type paths.
    pub const COUNT: usize = 19;

    /// Every legal type path.
    pub const ALL: [Self; Self::COUNT] = [
        Self::BoolArray,
        Self::ByteArray,
        Self::EnumArray,
        Self::FloatArray,
        Self::IntArray,
        Self::NameArray,
        Self::StrArray,
        Self::PermissionArray,
        Self::RotatorArray,
        Self::TransformArray,
        Self::VectorArray,
        Self::TextArray,
        Self::Bool,
        Self::Float,
        Self::Int,
        Self::Name,
        Self::Str,
        Self::DateTime,
        Self::Untyped,
    ];

    /// Classify a type path given as its components.
    ///
    /// # Example
    ///
    /// ```
    /// use gvas::property::TypePath;
    ///
    /// let path = TypePath::classify(&["ArrayProperty", "StructProperty", "Vector"]).unwrap();
    /// assert_eq!(path, TypePath::VectorArray);
    /// assert!(TypePath::classify(&["StructProperty", "Vector"]).is_err());
    /// ```
    pub fn classify<S: AsRef<str>>(components: &[S]) -> Result<Self> {
        let parts: Vec<&str> = components.iter().map(|c| c.as_ref()).collect();
        let path = match parts.as_slice() {
            ["ArrayProperty", "BoolProperty"] => Self::BoolArray,
            ["ArrayProperty", "ByteProperty"] => Self::ByteArray,
            ["ArrayProperty", "EnumProperty"] => Self::EnumArray,
            ["ArrayProperty", "FloatProperty"] => Self::FloatArray,
            ["ArrayProperty", "IntProperty"] => Self::IntArray,
            ["ArrayProperty", "NameProperty"] => Self::NameArray,
            ["ArrayProperty", "StrProperty"] => Self::StrArray,
            ["ArrayProperty", "StructProperty", "Permission"] => Self::PermissionArray,
            ["ArrayProperty", "StructProperty", "Rotator"] => Self::RotatorArray,
            ["ArrayProperty", "StructProperty", "Transform"] => Self::TransformArray,
            ["ArrayProperty", "StructProperty", "Vector"] => Self::VectorArray,
            ["ArrayProperty", "TextProperty"] => Self::TextArray,
            ["BoolProperty"] => Self::Bool,
            ["FloatProperty"] => Self::Float,
            ["IntProperty"] => Self::Int,
            ["NameProperty"] => Self::Name,
            ["StrProperty"] => Self::Str,
            ["StructProperty", "DateTime"] => Self::DateTime,
            [] => Self::Untyped,
            _ => return Err(Error::UnknownTypePath(parts.join("/"))),
        };
        Ok(path)
    }

    /// Components of this type path.
    pub const fn components(self) -> &'static [&'static str] {
        match self {
            Self::BoolArray => &["ArrayProperty", "BoolProperty"],
            Self::ByteArray => &["ArrayProperty", "ByteProperty"],
            Self::EnumArray => &["ArrayProperty", "EnumProperty"],
            Self::FloatArray => &["ArrayProperty", "FloatProperty"],
            Self::IntArray => &["ArrayProperty", "IntProperty"],
            Self::NameArray => &["ArrayProperty", "NameProperty"],
            Self::StrArray => &["ArrayProperty", "StrProperty"],
            Self::PermissionArray => &["ArrayProperty", "StructProperty", "Permission"],
            Self::RotatorArray => &["ArrayProperty", "StructProperty", "Rotator"],
            Self::TransformArray => &["ArrayProperty", "StructProperty", "Transform"],
            Self::VectorArray => &["ArrayProperty", "StructProperty", "Vector"],
            Self::TextArray => &["ArrayProperty", "TextProperty"],
            Self::Bool => &["BoolProperty"],
            Self::Float => &["FloatProperty"],
            Self::Int => &["IntProperty"],
            Self::Name => &["NameProperty"],
            Self::Str => &["StrProperty"],
            Self::DateTime => &["StructProperty", "DateTime"],
            Self::Untyped => &[],
        }
    }

    /// Top-level property type, `None` for [`TypePath::Untyped`].
    pub fn kind(self) -> Option<PropertyKind> {
        self.components().first().and_then(|c| PropertyKind::from_name(c))
    }

    /// Returns true for array shapes.
    #[inline]
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            Self::BoolArray
                | Self::ByteArray
                | Self::EnumArray
                | Self::FloatArray
                | Self::IntArray
                | Self::NameArray
                | Self::StrArray
                | Self::PermissionArray
                | Self::RotatorArray
                | Self::TransformArray
                | Self::VectorArray
                | Self::TextArray
        )
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untyped => write!(f, "<untyped>"),
            _ => write!(f, "{}", self.components().join("/")),
        }
    }
}
