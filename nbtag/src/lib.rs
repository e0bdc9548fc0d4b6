//! nbtag reads and writes NBT-style binary tag trees: a root compound
//! holding named, possibly nested values of fixed scalar, array, list or
//! compound kinds, all big-endian on the wire.
//!
//! * For loading a whole file, compressed or not, see [`load`].
//! * For the tree types see [`Value`], [`List`], [`Compound`] and the array
//!   types [`ByteArray`], [`IntArray`] and [`LongArray`].
//! * For lower level decoding with limits see [`de`], for encoding see
//!   [`ser`].
//! * For dotted path lookups like `Data.Player.Inventory[0]` see [`path`].
//!
//! # Quick example
//!
//! ```no_run
//! use nbtag::{load, Compound};
//! use nbtag::error::Result;
//!
//! fn main() -> Result<()> {
//!     let root: Compound = load::load_file("level.dat")?;
//!
//!     let data = root
//!         .get_compound("")
//!         .and_then(|c| c.get_compound("Data"));
//!
//!     if let Some(spawn_x) = data.and_then(|d| d.get_int("SpawnX")) {
//!         println!("spawn x: {}", spawn_x);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # The root compound
//!
//! The top level of a file is an *implicit* compound: it has no tag ID, no
//! name, and no trailing End marker. Decoding it simply reads entries until
//! the stream runs out. Compounds nested inside it are explicit and always
//! end with an End tag on the wire.

pub mod de;
pub mod error;
pub mod load;
pub mod path;
pub mod ser;

mod arrays;
mod compound;
mod list;
mod value;

pub use arrays::*;
pub use compound::Compound;
pub use de::{from_bytes, from_reader, DecodeOpts};
pub use list::List;
pub use ser::{to_bytes, to_writer};
pub use value::Value;

#[cfg(test)]
mod test;

use std::convert::TryFrom;
use std::fmt;

/// The kind of a tag, as given by its one byte ID. Carries no payload or
/// name.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Terminates an explicit compound. Has no payload.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Length-prefixed i8 elements.
    ByteArray = 7,
    /// u16 length then modified UTF-8 bytes.
    String = 8,
    /// Element kind, length, then bare payloads of that kind.
    List = 9,
    /// Named entries up to an End tag.
    Compound = 10,
    /// Length-prefixed i32 elements.
    IntArray = 11,
    /// Length-prefixed i64 elements.
    LongArray = 12,
}

impl Tag {
    /// The name the NBT documentation uses for this kind, eg `Byte_Array`.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::End => "End",
            Tag::Byte => "Byte",
            Tag::Short => "Short",
            Tag::Int => "Int",
            Tag::Long => "Long",
            Tag::Float => "Float",
            Tag::Double => "Double",
            Tag::ByteArray => "Byte_Array",
            Tag::String => "String",
            Tag::List => "List",
            Tag::Compound => "Compound",
            Tag::IntArray => "Int_Array",
            Tag::LongArray => "Long_Array",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// The tags will very rarely change, so we write the conversions out by hand
// rather than pull in a derive crate for them.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}
