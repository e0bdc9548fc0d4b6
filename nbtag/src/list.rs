use serde::Serialize;

use crate::error::{Error, Result};
use crate::{Tag, Value};

/// An NBT List: an ordered sequence of values that all share one declared
/// element kind.
///
/// The declared kind is kept even when the list is empty, since it is part
/// of the wire format. Every mutation checks the new element against it, so
/// a list built through this API is always homogeneous. Values reached
/// through [`List::get_mut`] can still be replaced with another kind, which
/// is caught when encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: Tag,
    values: Vec<Value>,
}

impl List {
    /// Create an empty list of the given element kind. An `End` list is
    /// what the game writes for lists that have never held anything; it can
    /// never hold elements.
    pub fn new(element: Tag) -> Self {
        Self {
            element,
            values: Vec::new(),
        }
    }

    /// Create a list from existing values, checking they are all of the
    /// `element` kind.
    pub fn from_values(element: Tag, values: Vec<Value>) -> Result<Self> {
        if let Some(bad) = values.iter().find(|v| v.tag() != element) {
            return Err(Error::type_mismatch(element, bad.tag()));
        }
        Ok(Self { element, values })
    }

    /// Skips the kind check. Only for the decoder, which builds each element
    /// from the declared kind.
    pub(crate) fn from_decoded(element: Tag, values: Vec<Value>) -> Self {
        Self { element, values }
    }

    /// The declared element kind.
    pub fn element_tag(&self) -> Tag {
        self.element
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.values.len()))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value> {
        let len = self.values.len();
        self.values
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range(index, len))
    }

    /// Replace the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value> {
        let value = self.check(value.into())?;
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = self.check(value.into())?;
        self.values.push(value);
        Ok(())
    }

    /// Insert at `index`, shifting later elements right. `index` may equal
    /// the length.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        if index > self.values.len() {
            return Err(Error::out_of_range(index, self.values.len()));
        }
        let value = self.check(value.into())?;
        self.values.insert(index, value);
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements left.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        if index >= self.values.len() {
            return Err(Error::out_of_range(index, self.values.len()));
        }
        Ok(self.values.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Confirm every element still matches the declared kind.
    pub fn validate(&self) -> Result<()> {
        match self.values.iter().find(|v| v.tag() != self.element) {
            Some(bad) => Err(Error::type_mismatch(self.element, bad.tag())),
            None => Ok(()),
        }
    }

    fn check(&self, value: Value) -> Result<Value> {
        if value.tag() != self.element {
            return Err(Error::type_mismatch(self.element, value.tag()));
        }
        Ok(value)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.values.iter())
    }
}

#[cfg(feature = "arbitrary1")]
fn same_kind<'a, T, F>(u: &mut arbitrary::Unstructured<'a>, f: F) -> arbitrary::Result<Vec<Value>>
where
    F: FnMut(T) -> Value,
    T: arbitrary::Arbitrary<'a>,
{
    Ok(u.arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect())
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for List {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let element = u.arbitrary::<Tag>()?;

        // Lists need to all be the same type.
        let values = match element {
            Tag::End => vec![],
            Tag::Byte => same_kind(u, Value::Byte)?,
            Tag::Short => same_kind(u, Value::Short)?,
            Tag::Int => same_kind(u, Value::Int)?,
            Tag::Long => same_kind(u, Value::Long)?,
            Tag::Float => same_kind(u, Value::Float)?,
            Tag::Double => same_kind(u, Value::Double)?,
            Tag::ByteArray => same_kind(u, Value::ByteArray)?,
            Tag::String => same_kind(u, Value::String)?,
            Tag::List => same_kind(u, Value::List)?,
            Tag::Compound => same_kind(u, Value::Compound)?,
            Tag::IntArray => same_kind(u, Value::IntArray)?,
            Tag::LongArray => same_kind(u, Value::LongArray)?,
        };

        Ok(Self { element, values })
    }
}
