//! Dotted paths for locating a value inside a tree.
//!
//! A path is a sequence of compound keys separated by `.`, each optionally
//! followed by one or more `[n]` indexes into a list or array:
//!
//! ```text
//! Data.Player.Inventory[0].id
//! Level.Sections[3].BlockStates[17]
//! ```
//!
//! Paths resolve left to right from the root compound. The empty path
//! selects the root itself. Keys may be empty: files written by the game
//! keep everything under a root entry called `""`, which is reached with a
//! leading dot, as in `.Data.SpawnX`.
//!
//! ```
//! use nbtag::{Compound, List, Tag, Value};
//! use nbtag::path::Selected;
//!
//! let mut item = Compound::new();
//! item.put_string("id", "minecraft:stone");
//!
//! let mut inventory = List::new(Tag::Compound);
//! inventory.push(item).unwrap();
//!
//! let mut root = Compound::new_implicit();
//! root.insert("Inventory", inventory);
//!
//! match root.query("Inventory[0].id").unwrap() {
//!     Selected::Value(Value::String(id)) => assert_eq!(id, "minecraft:stone"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::{Compound, Tag, Value};

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Look up a key in a compound.
    Key(String),
    /// Index into a list or array.
    Index(usize),
}

/// A parsed path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn parse(input: &str) -> Result<Path> {
        let mut segments = vec![];
        if input.is_empty() {
            return Ok(Path { segments });
        }

        for part in input.split('.') {
            let (key, mut rest) = match part.find('[') {
                Some(i) => part.split_at(i),
                None => (part, ""),
            };

            if key.contains(']') {
                return Err(Error::invalid_path(input, "unmatched ']'"));
            }
            segments.push(Segment::Key(key.to_owned()));

            while !rest.is_empty() {
                let close = rest
                    .find(']')
                    .ok_or_else(|| Error::invalid_path(input, "unterminated '['"))?;

                // rest always starts with '[' here.
                let index = rest[1..close]
                    .parse::<usize>()
                    .map_err(|_| Error::invalid_path(input, "index is not a number"))?;
                segments.push(Segment::Index(index));

                rest = &rest[close + 1..];
                if !rest.is_empty() && !rest.starts_with('[') {
                    return Err(Error::invalid_path(input, "unexpected text after index"));
                }
            }
        }

        Ok(Path { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            match segment {
                Segment::Key(k) => {
                    if !first {
                        f.write_str(".")?;
                    }
                    f.write_str(k)?;
                }
                Segment::Index(i) => write!(f, "[{}]", i)?,
            }
            first = false;
        }
        Ok(())
    }
}

/// The result of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selected<'a> {
    /// The root compound, selected by the empty path.
    Root(&'a Compound),
    /// A value stored in a compound or list.
    Value(&'a Value),
    /// An element of a Byte Array.
    Byte(i8),
    /// An element of an Int Array.
    Int(i32),
    /// An element of a Long Array.
    Long(i64),
}

impl<'a> Selected<'a> {
    /// The tag kind of the selection.
    pub fn tag(&self) -> Tag {
        match self {
            Selected::Root(_) => Tag::Compound,
            Selected::Value(v) => v.tag(),
            Selected::Byte(_) => Tag::Byte,
            Selected::Int(_) => Tag::Int,
            Selected::Long(_) => Tag::Long,
        }
    }

    fn compound(&self) -> Option<&'a Compound> {
        match *self {
            Selected::Root(c) => Some(c),
            Selected::Value(Value::Compound(c)) => Some(c),
            _ => None,
        }
    }
}

impl Compound {
    /// Parse `path` and resolve it from this compound.
    pub fn query(&self, path: &str) -> Result<Selected<'_>> {
        self.query_path(&Path::parse(path)?)
    }

    /// Resolve an already parsed path from this compound.
    pub fn query_path(&self, path: &Path) -> Result<Selected<'_>> {
        let mut current = Selected::Root(self);

        for segment in path.segments() {
            current = match segment {
                Segment::Key(key) => {
                    let compound = current
                        .compound()
                        .ok_or_else(|| Error::type_mismatch(Tag::Compound, current.tag()))?;
                    Selected::Value(compound.try_get(key)?)
                }
                Segment::Index(i) => match current {
                    Selected::Value(Value::List(list)) => Selected::Value(list.get(*i)?),
                    Selected::Value(Value::ByteArray(arr)) => Selected::Byte(arr.get(*i)?),
                    Selected::Value(Value::IntArray(arr)) => Selected::Int(arr.get(*i)?),
                    Selected::Value(Value::LongArray(arr)) => Selected::Long(arr.get(*i)?),
                    other => return Err(Error::type_mismatch(Tag::List, other.tag())),
                },
            };
        }

        Ok(current)
    }
}
