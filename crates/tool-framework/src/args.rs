//! # Canonical Argument Map
//!
//! [`ModuleArgs`] is the ordered, flat key/value mapping handed to a module runner.
//! Every resource kind builds one from its typed config using the same small set of
//! inclusion rules:
//!
//! - [`ModuleArgs::insert`] - required fields and fields with a default. Always written.
//! - [`ModuleArgs::insert_present`] - optional fields. Written only when the value is
//!   set *and* non-empty (see [`ArgValue::is_present`]).
//! - [`ModuleArgs::insert_some`] - optional fields where an explicit `false` or `0` is
//!   meaningful. Written whenever the value is set.
//! - [`ModuleArgs::merge_extra`] - the per-config extension map, applied last.
//!
//! Keys keep insertion order, so normalizing the same config twice yields the same
//! serialized map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A value that can be written into a [`ModuleArgs`] map.
pub trait ArgValue {
    /// Converts the value into its JSON form.
    fn to_arg(&self) -> Value;

    /// Whether the value counts as supplied for omit-if-absent fields.
    ///
    /// Empty strings, empty collections and zero numbers are treated as absent.
    fn is_present(&self) -> bool {
        true
    }
}

impl ArgValue for String {
    fn to_arg(&self) -> Value {
        Value::String(self.clone())
    }

    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl ArgValue for str {
    fn to_arg(&self) -> Value {
        Value::String(self.to_string())
    }

    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: ArgValue + ?Sized> ArgValue for &T {
    fn to_arg(&self) -> Value {
        (**self).to_arg()
    }

    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl ArgValue for bool {
    fn to_arg(&self) -> Value {
        Value::Bool(*self)
    }

    fn is_present(&self) -> bool {
        *self
    }
}

macro_rules! impl_arg_value_for_int {
    ($($ty:ty),*) => {
        $(
            impl ArgValue for $ty {
                fn to_arg(&self) -> Value {
                    Value::from(*self)
                }

                fn is_present(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_arg_value_for_int!(u16, u32, u64, i32, i64);

impl ArgValue for f64 {
    fn to_arg(&self) -> Value {
        Value::from(*self)
    }

    fn is_present(&self) -> bool {
        *self != 0.0
    }
}

impl ArgValue for Value {
    fn to_arg(&self) -> Value {
        self.clone()
    }

    fn is_present(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        }
    }
}

impl<T: ArgValue> ArgValue for Vec<T> {
    fn to_arg(&self) -> Value {
        Value::Array(self.iter().map(ArgValue::to_arg).collect())
    }

    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<V: ArgValue> ArgValue for BTreeMap<String, V> {
    fn to_arg(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_arg()))
                .collect(),
        )
    }

    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl ArgValue for Map<String, Value> {
    fn to_arg(&self) -> Value {
        Value::Object(self.clone())
    }

    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

/// Implements [`ArgValue`] for a fieldless enum that exposes `as_str()`.
///
/// The enum is written as its wire string and is always considered present.
#[macro_export]
macro_rules! string_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::args::ArgValue for $ty {
                fn to_arg(&self) -> $crate::serde_json::Value {
                    $crate::serde_json::Value::String(self.as_str().to_string())
                }
            }
        )*
    };
}

/// The canonical argument map for one module invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleArgs(Map<String, Value>);

impl ModuleArgs {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Writes a field unconditionally. Re-inserting a key replaces its value in place.
    pub fn insert(&mut self, key: &str, value: impl ArgValue) -> &mut Self {
        self.0.insert(key.to_string(), value.to_arg());
        self
    }

    /// Writes a field only when it is set and non-empty.
    pub fn insert_present<V: ArgValue>(&mut self, key: &str, value: &Option<V>) -> &mut Self {
        if let Some(v) = value {
            if v.is_present() {
                self.0.insert(key.to_string(), v.to_arg());
            }
        }
        self
    }

    /// Writes a field whenever it is set, including explicit `false` and `0`.
    pub fn insert_some<V: ArgValue>(&mut self, key: &str, value: &Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.0.insert(key.to_string(), v.to_arg());
        }
        self
    }

    /// Writes a field only when `condition` holds and the value is present.
    pub fn insert_present_when<V: ArgValue>(
        &mut self,
        condition: bool,
        key: &str,
        value: &Option<V>,
    ) -> &mut Self {
        if condition {
            self.insert_present(key, value);
        }
        self
    }

    /// Copies every entry of `other` into this map, last write wins.
    pub fn extend(&mut self, other: ModuleArgs) -> &mut Self {
        for (k, v) in other.0 {
            self.0.insert(k, v);
        }
        self
    }

    /// Merges caller-supplied overflow fields verbatim, last write wins.
    pub fn merge_extra(&mut self, extra: &Map<String, Value>) -> &mut Self {
        for (k, v) in extra {
            self.0.insert(k.clone(), v.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for ModuleArgs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl IntoIterator for ModuleArgs {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Returns the first present value, in argument order.
///
/// Used where two parameter names denote one canonical field.
pub fn first_present<'a, V: ArgValue>(candidates: &[&'a Option<V>]) -> Option<&'a V> {
    candidates
        .iter()
        .filter_map(|c| Option::as_ref(*c))
        .find(|v| v.is_present())
}
