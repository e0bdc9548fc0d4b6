use std::ops::Index;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::{ByteArray, IntArray, List, LongArray, Value};

/// An NBT Compound: a map from names to values.
///
/// Entries keep their insertion order, and decoded compounds keep the order
/// they had on the wire, so re-encoding an unmodified tree reproduces the
/// same bytes.
///
/// A compound is either explicit, which is every compound nested inside a
/// tree, or implicit, which is the root of a file. An implicit root is
/// written without a trailing End tag. The flag only applies at the top of
/// a tree: a compound stored inside another one is always written with End.
///
/// Equality compares entries only. It ignores their order and the implicit
/// flag, so a tree compares equal to itself after a decode, which always
/// gives an implicit root.
#[derive(Debug, Clone, Default)]
pub struct Compound {
    entries: IndexMap<String, Value>,
    implicit: bool,
}

// One getter and one setter per scalar kind. A missing key and a value of
// another kind both give None.
macro_rules! scalar_accessors {
    ($($get:ident, $put:ident, $ty:ty, $variant:ident;)*) => {
        $(
            pub fn $get(&self, key: &str) -> Option<$ty> {
                match self.entries.get(key) {
                    Some(Value::$variant(v)) => Some(*v),
                    _ => None,
                }
            }

            pub fn $put(&mut self, key: impl Into<String>, val: $ty) {
                self.entries.insert(key.into(), Value::$variant(val));
            }
        )*
    };
}

// Borrowing getters and an owning setter for the container and array kinds.
macro_rules! ref_accessors {
    ($($get:ident, $get_mut:ident, $put:ident, $ty:ty, $variant:ident;)*) => {
        $(
            pub fn $get(&self, key: &str) -> Option<&$ty> {
                match self.entries.get(key) {
                    Some(Value::$variant(v)) => Some(v),
                    _ => None,
                }
            }

            pub fn $get_mut(&mut self, key: &str) -> Option<&mut $ty> {
                match self.entries.get_mut(key) {
                    Some(Value::$variant(v)) => Some(v),
                    _ => None,
                }
            }

            pub fn $put(&mut self, key: impl Into<String>, val: $ty) {
                self.entries.insert(key.into(), Value::$variant(val));
            }
        )*
    };
}

impl Compound {
    /// Create an empty, explicit compound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty root compound.
    pub fn new_implicit() -> Self {
        Self {
            entries: IndexMap::new(),
            implicit: true,
        }
    }

    pub fn is_implicit(&self) -> bool {
        self.implicit
    }

    /// Mark this compound as a root or not. Has no effect on how it is
    /// written once it is stored inside another compound or a list.
    pub fn set_implicit(&mut self, implicit: bool) {
        self.implicit = implicit;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Like [`Compound::get`], but a missing key is an error.
    pub fn try_get(&self, key: &str) -> Result<&Value> {
        self.entries.get(key).ok_or_else(|| Error::not_found(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a value, returning the value previously stored under `key`.
    /// Overwriting keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.entries.values()
    }

    scalar_accessors! {
        get_byte, put_byte, i8, Byte;
        get_short, put_short, i16, Short;
        get_int, put_int, i32, Int;
        get_long, put_long, i64, Long;
        get_float, put_float, f32, Float;
        get_double, put_double, f64, Double;
    }

    ref_accessors! {
        get_byte_array, get_byte_array_mut, put_byte_array, ByteArray, ByteArray;
        get_int_array, get_int_array_mut, put_int_array, IntArray, IntArray;
        get_long_array, get_long_array_mut, put_long_array, LongArray, LongArray;
        get_list, get_list_mut, put_list, List, List;
        get_compound, get_compound_mut, put_compound, Compound, Compound;
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn put_string(&mut self, key: impl Into<String>, val: impl Into<String>) {
        self.entries.insert(key.into(), Value::String(val.into()));
    }

    pub fn put_bool(&mut self, key: impl Into<String>, val: bool) {
        self.entries.insert(key.into(), Value::from(val));
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Index<&str> for Compound {
    type Output = Value;

    /// Panics if the key is not present, like `HashMap`.
    fn index(&self, key: &str) -> &Value {
        &self.entries[key]
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    /// Collects into an explicit compound.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            implicit: false,
        }
    }
}

impl Serialize for Compound {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.entries.iter())
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let entries: Vec<(String, Value)> = u.arbitrary()?;
        Ok(entries.into_iter().collect())
    }
}
