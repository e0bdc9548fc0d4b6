use std::ops::Deref;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::Tag;

// The three array kinds only differ in their element type, so they share one
// definition. Length is never stored; it is whatever the inner Vec holds.
macro_rules! nbt_array {
    ($(#[$meta:meta])* $name:ident, $elem:ty, $tag:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        #[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            /// The tag kind of this array.
            pub const TAG: Tag = $tag;

            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            /// Get the element at `index`.
            pub fn get(&self, index: usize) -> Result<$elem> {
                self.data
                    .get(index)
                    .copied()
                    .ok_or_else(|| Error::out_of_range(index, self.data.len()))
            }

            /// Overwrite the element at `index`, returning the old value.
            pub fn set(&mut self, index: usize, val: $elem) -> Result<$elem> {
                let len = self.data.len();
                let slot = self
                    .data
                    .get_mut(index)
                    .ok_or_else(|| Error::out_of_range(index, len))?;
                Ok(std::mem::replace(slot, val))
            }

            pub fn push(&mut self, val: $elem) {
                self.data.push(val);
            }

            /// Remove the element at `index`, shifting later elements left.
            pub fn remove(&mut self, index: usize) -> Result<$elem> {
                if index >= self.data.len() {
                    return Err(Error::out_of_range(index, self.data.len()));
                }
                Ok(self.data.remove(index))
            }

            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = [$elem];

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_seq(self.data.iter())
            }
        }
    };
}

nbt_array!(
    /// NBT Byte Array. Elements are signed, as Java bytes are.
    ByteArray,
    i8,
    Tag::ByteArray
);

nbt_array!(
    /// NBT Int Array.
    IntArray,
    i32,
    Tag::IntArray
);

nbt_array!(
    /// NBT Long Array.
    LongArray,
    i64,
    Tag::LongArray
);
