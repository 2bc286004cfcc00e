//! Typed property values, one variant per [`TypePath`] shape.

use super::TypePath;
use crate::text::RichText;
use crate::util::{GvasString, Rotator, Transform, Vector};

/// Per-player permission flags stored as a struct array element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permission {
    pub values: Vec<bool>,
}

/// Owned property value.
///
/// [`TypePath::Untyped`] has no value shape and therefore no variant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyValue {
    BoolArray(Vec<bool>),
    ByteArray(Vec<u8>),
    EnumArray(Vec<GvasString>),
    FloatArray(Vec<f32>),
    IntArray(Vec<i32>),
    NameArray(Vec<GvasString>),
    StrArray(Vec<GvasString>),
    PermissionArray(Vec<Permission>),
    RotatorArray(Vec<Rotator>),
    TransformArray(Vec<Transform>),
    VectorArray(Vec<Vector>),
    TextArray(Vec<RichText>),
    Bool(bool),
    Float(f32),
    Int(i32),
    Name(GvasString),
    Str(GvasString),
    /// Engine `DateTime` ticks (100 ns since 0001-01-01).
    DateTime(i64),
}

impl PropertyValue {
    /// Type path of this value.
    pub const fn type_path(&self) -> TypePath {
        match self {
            Self::BoolArray(_) => TypePath::BoolArray,
            Self::ByteArray(_) => TypePath::ByteArray,
            Self::EnumArray(_) => TypePath::EnumArray,
            Self::FloatArray(_) => TypePath::FloatArray,
            Self::IntArray(_) => TypePath::IntArray,
            Self::NameArray(_) => TypePath::NameArray,
            Self::StrArray(_) => TypePath::StrArray,
            Self::PermissionArray(_) => TypePath::PermissionArray,
            Self::RotatorArray(_) => TypePath::RotatorArray,
            Self::TransformArray(_) => TypePath::TransformArray,
            Self::VectorArray(_) => TypePath::VectorArray,
            Self::TextArray(_) => TypePath::TextArray,
            Self::Bool(_) => TypePath::Bool,
            Self::Float(_) => TypePath::Float,
            Self::Int(_) => TypePath::Int,
            Self::Name(_) => TypePath::Name,
            Self::Str(_) => TypePath::Str,
            Self::DateTime(_) => TypePath::DateTime,
        }
    }
}

/// Borrowed view of a property value stored in a [`Gvas`](super::Gvas).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyRef<'a> {
    BoolArray(&'a [bool]),
    ByteArray(&'a [u8]),
    EnumArray(&'a [GvasString]),
    FloatArray(&'a [f32]),
    IntArray(&'a [i32]),
    NameArray(&'a [GvasString]),
    StrArray(&'a [GvasString]),
    PermissionArray(&'a [Permission]),
    RotatorArray(&'a [Rotator]),
    TransformArray(&'a [Transform]),
    VectorArray(&'a [Vector]),
    TextArray(&'a [RichText]),
    Bool(bool),
    Float(f32),
    Int(i32),
    Name(Option<&'a str>),
    Str(Option<&'a str>),
    DateTime(i64),
}

impl PropertyRef<'_> {
    /// Type path of the referenced value.
    pub const fn type_path(&self) -> TypePath {
        match self {
            Self::BoolArray(_) => TypePath::BoolArray,
            Self::ByteArray(_) => TypePath::ByteArray,
            Self::EnumArray(_) => TypePath::EnumArray,
            Self::FloatArray(_) => TypePath::FloatArray,
            Self::IntArray(_) => TypePath::IntArray,
            Self::NameArray(_) => TypePath::NameArray,
            Self::StrArray(_) => TypePath::StrArray,
            Self::PermissionArray(_) => TypePath::PermissionArray,
            Self::RotatorArray(_) => TypePath::RotatorArray,
            Self::TransformArray(_) => TypePath::TransformArray,
            Self::VectorArray(_) => TypePath::VectorArray,
            Self::TextArray(_) => TypePath::TextArray,
            Self::Bool(_) => TypePath::Bool,
            Self::Float(_) => TypePath::Float,
            Self::Int(_) => TypePath::Int,
            Self::Name(_) => TypePath::Name,
            Self::Str(_) => TypePath::Str,
            Self::DateTime(_) => TypePath::DateTime,
        }
    }

    /// Copy the referenced value into an owned [`PropertyValue`].
    pub fn to_value(&self) -> PropertyValue {
        match *self {
            Self::BoolArray(v) => PropertyValue::BoolArray(v.to_vec()),
            Self::ByteArray(v) => PropertyValue::ByteArray(v.to_vec()),
            Self::EnumArray(v) => PropertyValue::EnumArray(v.to_vec()),
            Self::FloatArray(v) => PropertyValue::FloatArray(v.to_vec()),
            Self::IntArray(v) => PropertyValue::IntArray(v.to_vec()),
            Self::NameArray(v) => PropertyValue::NameArray(v.to_vec()),
            Self::StrArray(v) => PropertyValue::StrArray(v.to_vec()),
            Self::PermissionArray(v) => PropertyValue::PermissionArray(v.to_vec()),
            Self::RotatorArray(v) => PropertyValue::RotatorArray(v.to_vec()),
            Self::TransformArray(v) => PropertyValue::TransformArray(v.to_vec()),
            Self::VectorArray(v) => PropertyValue::VectorArray(v.to_vec()),
            Self::TextArray(v) => PropertyValue::TextArray(v.to_vec()),
            Self::Bool(v) => PropertyValue::Bool(v),
            Self::Float(v) => PropertyValue::Float(v),
            Self::Int(v) => PropertyValue::Int(v),
            Self::Name(v) => PropertyValue::Name(v.map(String::from)),
            Self::Str(v) => PropertyValue::Str(v.map(String::from)),
            Self::DateTime(v) => PropertyValue::DateTime(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_paths_are_distinct() {
        let values = [
            PropertyValue::BoolArray(vec![]),
            PropertyValue::ByteArray(vec![]),
            PropertyValue::EnumArray(vec![]),
            PropertyValue::FloatArray(vec![]),
            PropertyValue::IntArray(vec![]),
            PropertyValue::NameArray(vec![]),
            PropertyValue::StrArray(vec![]),
            PropertyValue::PermissionArray(vec![]),
            PropertyValue::RotatorArray(vec![]),
            PropertyValue::TransformArray(vec![]),
            PropertyValue::VectorArray(vec![]),
            PropertyValue::TextArray(vec![]),
            PropertyValue::Bool(false),
            PropertyValue::Float(0.0),
            PropertyValue::Int(0),
            PropertyValue::Name(None),
            PropertyValue::Str(None),
            PropertyValue::DateTime(0),
        ];
        let mut paths: Vec<TypePath> = values.iter().map(PropertyValue::type_path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), TypePath::COUNT - 1);
        assert!(!paths.contains(&TypePath::Untyped));
    }

    #[test]
    fn test_ref_to_value() {
        let names = vec![Some("a".to_string()), None];
        let r = PropertyRef::NameArray(&names);
        assert_eq!(r.type_path(), TypePath::NameArray);
        assert_eq!(r.to_value(), PropertyValue::NameArray(names.clone()));
        assert_eq!(
            PropertyRef::Str(Some("x")).to_value(),
            PropertyValue::Str(Some("x".into()))
        );
    }
}
