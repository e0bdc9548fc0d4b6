//! Encoding of [`Compound`] trees and single values to NBT.
//!
//! Use [`to_bytes`] or [`to_writer`] for a whole tree. Whether the root gets
//! a trailing End tag depends on [`Compound::is_implicit`]: a root decoded
//! from a file is implicit, so re-encoding it gives back the same layout.
//! Compounds nested inside the tree always get an End tag.
//!
//! Trees nested deeper than [`crate::de::DEFAULT_MAX_DEPTH`] fail with
//! `NestingTooDeep`, since a default decoder would refuse them.
//!
//! ```
//! use nbtag::{to_bytes, Compound};
//!
//! let mut root = Compound::new_implicit();
//! root.put_short("s", 300);
//!
//! // tag, name length, name, payload. No End tag for an implicit root.
//! assert_eq!(to_bytes(&root).unwrap(), [2, 0, 1, b's', 0x01, 0x2c]);
//! ```
//!
//! Lists are checked while encoding: an element whose kind differs from the
//! list's declared kind fails with `TypeMismatch` and nothing more is
//! written for that list.
use std::convert::TryInto;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::de::DEFAULT_MAX_DEPTH;
use crate::error::{Error, Result};
use crate::{Compound, Tag, Value};

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, key: &str) -> Result<()> {
        let key = cesu8::to_java_cesu8(key);
        let len: u16 = key
            .len()
            .try_into()
            .map_err(|_| Error::length_overflow("string", key.len()))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(&key)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_u32::<BigEndian>(
            len.try_into()
                .map_err(|_| Error::length_overflow("sequence", len))?,
        )?;

        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write + ?Sized {}

/// Encode a compound to a new buffer.
pub fn to_bytes(root: &Compound) -> Result<Vec<u8>> {
    let mut result = vec![];
    to_writer(&mut result, root)?;
    Ok(result)
}

/// Encode a compound to a writer. Only here, at the top of the tree, does
/// [`Compound::is_implicit`] drop the trailing End tag.
pub fn to_writer<W: Write>(mut writer: W, root: &Compound) -> Result<()> {
    let open = Open::Compound {
        entries: root.iter(),
        end: !root.is_implicit(),
    };
    write_nested(&mut writer, open, 0)
}

/// Write a complete named tag: ID, name and payload. This is how each entry
/// of a compound appears, and how files with an explicit root compound begin.
pub fn write_named<W: Write>(mut writer: W, name: &str, value: &Value) -> Result<()> {
    writer.write_tag(value.tag())?;
    writer.write_size_prefixed_str(name)?;
    write_payload(&mut writer, value)
}

/// Write the payload of any value. A compound payload always ends with End,
/// whatever its implicit flag says.
pub(crate) fn write_payload<W: Write + ?Sized>(w: &mut W, value: &Value) -> Result<()> {
    match begin(w, value, 1)? {
        Some(open) => write_nested(w, open, 1),
        None => Ok(()),
    }
}

/// A list or compound with children left to write.
enum Open<'a> {
    List(std::slice::Iter<'a, Value>),
    Compound {
        entries: indexmap::map::Iter<'a, String, Value>,
        end: bool,
    },
}

// Walks the tree with an explicit stack so deep trees cannot overflow the
// call stack. `depth` is the nesting level of `first`.
fn write_nested<W: Write + ?Sized>(w: &mut W, first: Open<'_>, depth: usize) -> Result<()> {
    let mut stack = vec![first];

    while let Some(top) = stack.last_mut() {
        let child = match top {
            Open::List(values) => values.next(),
            Open::Compound { entries, end } => match entries.next() {
                Some((name, value)) => {
                    w.write_tag(value.tag())?;
                    w.write_size_prefixed_str(name)?;
                    Some(value)
                }
                None => {
                    if *end {
                        w.write_tag(Tag::End)?;
                    }
                    None
                }
            },
        };

        match child {
            Some(value) => {
                if let Some(open) = begin(w, value, depth + stack.len())? {
                    stack.push(open);
                }
            }
            None => {
                stack.pop();
            }
        }
    }
    Ok(())
}

/// Write a scalar or array payload whole. For a container at nesting level
/// `depth`, write its header and hand back what is left.
fn begin<'a, W: Write + ?Sized>(w: &mut W, value: &'a Value, depth: usize) -> Result<Option<Open<'a>>> {
    match value {
        Value::Byte(v) => w.write_i8(*v)?,
        Value::Short(v) => w.write_i16::<BigEndian>(*v)?,
        Value::Int(v) => w.write_i32::<BigEndian>(*v)?,
        Value::Long(v) => w.write_i64::<BigEndian>(*v)?,
        Value::Float(v) => w.write_f32::<BigEndian>(*v)?,
        Value::Double(v) => w.write_f64::<BigEndian>(*v)?,
        Value::String(v) => w.write_size_prefixed_str(v)?,
        Value::ByteArray(arr) => {
            w.write_len(arr.len())?;
            let bytes: Vec<u8> = arr.iter().map(|b| *b as u8).collect();
            w.write_all(&bytes)?;
        }
        Value::IntArray(arr) => {
            w.write_len(arr.len())?;
            for v in arr.iter() {
                w.write_i32::<BigEndian>(*v)?;
            }
        }
        Value::LongArray(arr) => {
            w.write_len(arr.len())?;
            for v in arr.iter() {
                w.write_i64::<BigEndian>(*v)?;
            }
        }
        Value::List(list) => {
            check_depth(depth)?;
            // Check up front so a bad list does not leave a half written header.
            list.validate()?;
            w.write_tag(list.element_tag())?;
            w.write_len(list.len())?;
            return Ok(Some(Open::List(list.iter())));
        }
        Value::Compound(compound) => {
            check_depth(depth)?;
            return Ok(Some(Open::Compound {
                entries: compound.iter(),
                end: true,
            }));
        }
    }
    Ok(None)
}

// Anything deeper would be refused by a default decoder.
fn check_depth(depth: usize) -> Result<()> {
    if depth > DEFAULT_MAX_DEPTH {
        return Err(Error::too_deep(DEFAULT_MAX_DEPTH));
    }
    Ok(())
}
