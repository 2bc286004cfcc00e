//! Save property collection.
//!
//! [`Gvas`] keeps one map per value shape plus the on-disk key order. Every
//! key lives in exactly one map, so its [`TypePath`] is always known, and the
//! binary writer can replay [`Gvas::iter`] to reproduce the original layout.

use super::{GvasHeader, Permission, PropertyRef, PropertyValue, TypePath};
use crate::text::RichText;
use crate::util::{Error, Fp32, GvasString, Result, Rotator, Transform, Vector};
use std::collections::{HashMap, HashSet};

/// Contents of a GVAS save file.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gvas {
    pub header: GvasHeader,
    order: Vec<String>,
    bool_arrays: HashMap<String, Vec<bool>>,
    byte_arrays: HashMap<String, Vec<u8>>,
    enum_arrays: HashMap<String, Vec<GvasString>>,
    float_arrays: HashMap<String, Vec<f32>>,
    int_arrays: HashMap<String, Vec<i32>>,
    name_arrays: HashMap<String, Vec<GvasString>>,
    string_arrays: HashMap<String, Vec<GvasString>>,
    permission_arrays: HashMap<String, Vec<Permission>>,
    rotator_arrays: HashMap<String, Vec<Rotator>>,
    transform_arrays: HashMap<String, Vec<Transform>>,
    vector_arrays: HashMap<String, Vec<Vector>>,
    text_arrays: HashMap<String, Vec<RichText>>,
    bools: HashMap<String, bool>,
    floats: HashMap<String, f32>,
    ints: HashMap<String, i32>,
    names: HashMap<String, GvasString>,
    strings: HashMap<String, GvasString>,
    date_times: HashMap<String, i64>,
}

impl Gvas {
    /// Create an empty collection with the given header.
    pub fn new(header: GvasHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Store `value` under `key`.
    ///
    /// New keys are appended to the key order. Replacing a value keeps the
    /// key's position and returns the previous value; the new value must have
    /// the same type path as the old one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: PropertyValue,
    ) -> Result<Option<PropertyValue>> {
        let key = key.into();
        let path = value.type_path();

        match self.type_path(&key) {
            Some(existing) if existing != path => {
                return Err(Error::TypeMismatch {
                    key,
                    expected: existing,
                    actual: path,
                });
            }
            Some(_) => tracing::debug!(%key, %path, "replacing property"),
            None => {
                tracing::debug!(%key, %path, "adding property");
                self.order.push(key.clone());
            }
        }

        let old = match value {
            PropertyValue::BoolArray(v) => {
                self.bool_arrays.insert(key, v).map(PropertyValue::BoolArray)
            }
            PropertyValue::ByteArray(v) => {
                self.byte_arrays.insert(key, v).map(PropertyValue::ByteArray)
            }
            PropertyValue::EnumArray(v) => {
                self.enum_arrays.insert(key, v).map(PropertyValue::EnumArray)
            }
            PropertyValue::FloatArray(v) => {
                self.float_arrays.insert(key, v).map(PropertyValue::FloatArray)
            }
            PropertyValue::IntArray(v) => {
                self.int_arrays.insert(key, v).map(PropertyValue::IntArray)
            }
            PropertyValue::NameArray(v) => {
                self.name_arrays.insert(key, v).map(PropertyValue::NameArray)
            }
            PropertyValue::StrArray(v) => {
                self.string_arrays.insert(key, v).map(PropertyValue::StrArray)
            }
            PropertyValue::PermissionArray(v) => self
                .permission_arrays
                .insert(key, v)
                .map(PropertyValue::PermissionArray),
            PropertyValue::RotatorArray(v) => self
                .rotator_arrays
                .insert(key, v)
                .map(PropertyValue::RotatorArray),
            PropertyValue::TransformArray(v) => self
                .transform_arrays
                .insert(key, v)
                .map(PropertyValue::TransformArray),
            PropertyValue::VectorArray(v) => self
                .vector_arrays
                .insert(key, v)
                .map(PropertyValue::VectorArray),
            PropertyValue::TextArray(v) => {
                self.text_arrays.insert(key, v).map(PropertyValue::TextArray)
            }
            PropertyValue::Bool(v) => self.bools.insert(key, v).map(PropertyValue::Bool),
            PropertyValue::Float(v) => self.floats.insert(key, v).map(PropertyValue::Float),
            PropertyValue::Int(v) => self.ints.insert(key, v).map(PropertyValue::Int),
            PropertyValue::Name(v) => self.names.insert(key, v).map(PropertyValue::Name),
            PropertyValue::Str(v) => self.strings.insert(key, v).map(PropertyValue::Str),
            PropertyValue::DateTime(v) => {
                self.date_times.insert(key, v).map(PropertyValue::DateTime)
            }
        };
        Ok(old)
    }

    /// Borrow the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<PropertyRef<'_>> {
        self.bool_arrays
            .get(key)
            .map(|v| PropertyRef::BoolArray(v))
            .or_else(|| self.byte_arrays.get(key).map(|v| PropertyRef::ByteArray(v)))
            .or_else(|| self.enum_arrays.get(key).map(|v| PropertyRef::EnumArray(v)))
            .or_else(|| self.float_arrays.get(key).map(|v| PropertyRef::FloatArray(v)))
            .or_else(|| self.int_arrays.get(key).map(|v| PropertyRef::IntArray(v)))
            .or_else(|| self.name_arrays.get(key).map(|v| PropertyRef::NameArray(v)))
            .or_else(|| self.string_arrays.get(key).map(|v| PropertyRef::StrArray(v)))
            .or_else(|| {
                self.permission_arrays
                    .get(key)
                    .map(|v| PropertyRef::PermissionArray(v))
            })
            .or_else(|| {
                self.rotator_arrays
                    .get(key)
                    .map(|v| PropertyRef::RotatorArray(v))
            })
            .or_else(|| {
                self.transform_arrays
                    .get(key)
                    .map(|v| PropertyRef::TransformArray(v))
            })
            .or_else(|| self.vector_arrays.get(key).map(|v| PropertyRef::VectorArray(v)))
            .or_else(|| self.text_arrays.get(key).map(|v| PropertyRef::TextArray(v)))
            .or_else(|| self.bools.get(key).map(|v| PropertyRef::Bool(*v)))
            .or_else(|| self.floats.get(key).map(|v| PropertyRef::Float(*v)))
            .or_else(|| self.ints.get(key).map(|v| PropertyRef::Int(*v)))
            .or_else(|| self.names.get(key).map(|v| PropertyRef::Name(v.as_deref())))
            .or_else(|| self.strings.get(key).map(|v| PropertyRef::Str(v.as_deref())))
            .or_else(|| self.date_times.get(key).map(|v| PropertyRef::DateTime(*v)))
    }

    /// Remove `key` and its value.
    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        let removed = self
            .bool_arrays
            .remove(key)
            .map(PropertyValue::BoolArray)
            .or_else(|| self.byte_arrays.remove(key).map(PropertyValue::ByteArray))
            .or_else(|| self.enum_arrays.remove(key).map(PropertyValue::EnumArray))
            .or_else(|| self.float_arrays.remove(key).map(PropertyValue::FloatArray))
            .or_else(|| self.int_arrays.remove(key).map(PropertyValue::IntArray))
            .or_else(|| self.name_arrays.remove(key).map(PropertyValue::NameArray))
            .or_else(|| self.string_arrays.remove(key).map(PropertyValue::StrArray))
            .or_else(|| {
                self.permission_arrays
                    .remove(key)
                    .map(PropertyValue::PermissionArray)
            })
            .or_else(|| self.rotator_arrays.remove(key).map(PropertyValue::RotatorArray))
            .or_else(|| {
                self.transform_arrays
                    .remove(key)
                    .map(PropertyValue::TransformArray)
            })
            .or_else(|| self.vector_arrays.remove(key).map(PropertyValue::VectorArray))
            .or_else(|| self.text_arrays.remove(key).map(PropertyValue::TextArray))
            .or_else(|| self.bools.remove(key).map(PropertyValue::Bool))
            .or_else(|| self.floats.remove(key).map(PropertyValue::Float))
            .or_else(|| self.ints.remove(key).map(PropertyValue::Int))
            .or_else(|| self.names.remove(key).map(PropertyValue::Name))
            .or_else(|| self.strings.remove(key).map(PropertyValue::Str))
            .or_else(|| self.date_times.remove(key).map(PropertyValue::DateTime))?;

        self.order.retain(|k| k != key);
        tracing::debug!(%key, path = %removed.type_path(), "removed property");
        Some(removed)
    }

    /// Type path of the value stored under `key`.
    pub fn type_path(&self, key: &str) -> Option<TypePath> {
        self.get(key).map(|v| v.type_path())
    }

    /// Check if `key` holds a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in on-disk order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Iterate over `(key, value)` pairs in on-disk order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PropertyRef<'_>)> + '_ {
        self.order
            .iter()
            .filter_map(move |k| self.get(k).map(|v| (k.as_str(), v)))
    }

    /// Round every vector, rotator and transform to single precision.
    ///
    /// Afterwards the collection holds exactly what the engine would read
    /// back from disk.
    pub fn coerce32(&mut self) {
        for v in self.vector_arrays.values_mut().flatten() {
            *v = v.fp32();
        }
        for r in self.rotator_arrays.values_mut().flatten() {
            *r = r.fp32();
        }
        for t in self.transform_arrays.values_mut().flatten() {
            *t = t.fp32();
        }
    }

    /// Check that the key order and the value maps agree.
    ///
    /// Every key must appear once in the order and be stored in exactly one
    /// map. Collections built through [`Gvas::insert`] always pass; this is for
    /// collections deserialized from elsewhere.
    pub fn validate(&self) -> Result<()> {
        let mut ordered = HashSet::with_capacity(self.order.len());
        for key in &self.order {
            if !ordered.insert(key.as_str()) {
                return Err(Error::invalid(format!("duplicate key in order: {key}")));
            }
        }

        let mut stored: HashSet<&str> = HashSet::with_capacity(self.order.len());
        for key in self.stored_keys() {
            if !ordered.contains(key.as_str()) {
                return Err(Error::invalid(format!("key missing from order: {key}")));
            }
            if !stored.insert(key.as_str()) {
                return Err(Error::invalid(format!(
                    "key stored under more than one type path: {key}"
                )));
            }
        }

        if let Some(key) = self.order.iter().find(|k| !stored.contains(k.as_str())) {
            return Err(Error::invalid(format!("ordered key has no value: {key}")));
        }
        Ok(())
    }

    fn stored_keys(&self) -> impl Iterator<Item = &String> {
        self.bool_arrays
            .keys()
            .chain(self.byte_arrays.keys())
            .chain(self.enum_arrays.keys())
            .chain(self.float_arrays.keys())
            .chain(self.int_arrays.keys())
            .chain(self.name_arrays.keys())
            .chain(self.string_arrays.keys())
            .chain(self.permission_arrays.keys())
            .chain(self.rotator_arrays.keys())
            .chain(self.transform_arrays.keys())
            .chain(self.vector_arrays.keys())
            .chain(self.text_arrays.keys())
            .chain(self.bools.keys())
            .chain(self.floats.keys())
            .chain(self.ints.keys())
            .chain(self.names.keys())
            .chain(self.strings.keys())
            .chain(self.date_times.keys())
    }

    // === Typed views ===

    pub fn bool_arrays(&self) -> &HashMap<String, Vec<bool>> {
        &self.bool_arrays
    }

    pub fn byte_arrays(&self) -> &HashMap<String, Vec<u8>> {
        &self.byte_arrays
    }

    pub fn enum_arrays(&self) -> &HashMap<String, Vec<GvasString>> {
        &self.enum_arrays
    }

    pub fn float_arrays(&self) -> &HashMap<String, Vec<f32>> {
        &self.float_arrays
    }

    pub fn int_arrays(&self) -> &HashMap<String, Vec<i32>> {
        &self.int_arrays
    }

    pub fn name_arrays(&self) -> &HashMap<String, Vec<GvasString>> {
        &self.name_arrays
    }

    /// `StrProperty` arrays.
    pub fn string_arrays(&self) -> &HashMap<String, Vec<GvasString>> {
        &self.string_arrays
    }

    pub fn permission_arrays(&self) -> &HashMap<String, Vec<Permission>> {
        &self.permission_arrays
    }

    pub fn rotator_arrays(&self) -> &HashMap<String, Vec<Rotator>> {
        &self.rotator_arrays
    }

    pub fn transform_arrays(&self) -> &HashMap<String, Vec<Transform>> {
        &self.transform_arrays
    }

    pub fn vector_arrays(&self) -> &HashMap<String, Vec<Vector>> {
        &self.vector_arrays
    }

    pub fn text_arrays(&self) -> &HashMap<String, Vec<RichText>> {
        &self.text_arrays
    }

    pub fn bools(&self) -> &HashMap<String, bool> {
        &self.bools
    }

    pub fn floats(&self) -> &HashMap<String, f32> {
        &self.floats
    }

    pub fn ints(&self) -> &HashMap<String, i32> {
        &self.ints
    }

    pub fn names(&self) -> &HashMap<String, GvasString> {
        &self.names
    }

    /// `StrProperty` scalars.
    pub fn strings(&self) -> &HashMap<String, GvasString> {
        &self.strings
    }

    /// `DateTime` ticks.
    pub fn date_times(&self) -> &HashMap<String, i64> {
        &self.date_times
    }
}
