use std::io::{Read, Write};

use serde::Serialize;

use crate::{
    de::{DecodeOpts, Decoder},
    error::Result,
    ser, ByteArray, Compound, IntArray, List, LongArray, Tag,
};

/// A complete NBT value that owns its data. Lists and compounds hold their
/// children directly.
///
/// There is no End variant: End only ever appears on the wire as the
/// terminator of a compound, so it can never be stored inside a tree.
///
/// ```
/// # use nbtag::{Compound, Value};
/// let mut root = Compound::new_implicit();
/// root.insert("DataVersion", 3465i32);
///
/// match root["DataVersion"] {
///     Value::Int(ver) => println!("Version: {}", ver),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(IntArray),
    LongArray(LongArray),
}

// Getters that only match their own variant, for the Copy kinds.
macro_rules! exact {
    ($($name:ident, $variant:ident -> $ty:ty;)*) => {
        $(
            pub fn $name(&self) -> Option<$ty> {
                match *self {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        )*
    };
}

// As `exact`, borrowing the arrays and containers.
macro_rules! exact_ref {
    ($($name:ident, $variant:ident -> $ty:ty;)*) => {
        $(
            pub fn $name(&self) -> Option<&$ty> {
                match self {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        )*
    };
}

// Getters that accept any numeric variant and convert with `as`.
macro_rules! widen {
    ($($name:ident -> $ty:ty;)*) => {
        $(
            pub fn $name(&self) -> Option<$ty> {
                Some(match *self {
                    Value::Byte(v) => v as $ty,
                    Value::Short(v) => v as $ty,
                    Value::Int(v) => v as $ty,
                    Value::Long(v) => v as $ty,
                    Value::Float(v) => v as $ty,
                    Value::Double(v) => v as $ty,
                    _ => return None,
                })
            }
        )*
    };
}

impl Value {
    /// The tag kind of this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    /// Decode the payload of a value of the given kind from a reader. The tag
    /// ID and name must already have been consumed.
    pub fn decode<R: Read>(tag: Tag, reader: R) -> Result<Value> {
        Decoder::new(reader, DecodeOpts::default()).read_value(tag)
    }

    /// Encode the payload of this value, without a tag ID or name.
    pub fn encode<W: Write>(&self, mut writer: W) -> Result<()> {
        ser::write_payload(&mut writer, self)
    }

    /// Encode the payload of this value into a new buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = vec![];
        self.encode(&mut buf)?;
        Ok(buf)
    }

    exact! {
        as_i8, Byte -> i8;
        as_i16, Short -> i16;
        as_i32, Int -> i32;
        as_f32, Float -> f32;
    }

    exact_ref! {
        as_byte_array, ByteArray -> ByteArray;
        as_int_array, IntArray -> IntArray;
        as_long_array, LongArray -> LongArray;
        as_list, List -> List;
        as_compound, Compound -> Compound;
    }

    widen! {
        as_i64 -> i64;
        as_f64 -> f64;
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Byte(v) => v.serialize(serializer),
            Value::Short(v) => v.serialize(serializer),
            Value::Int(v) => v.serialize(serializer),
            Value::Long(v) => v.serialize(serializer),
            Value::Float(v) => v.serialize(serializer),
            Value::Double(v) => v.serialize(serializer),
            Value::String(v) => v.serialize(serializer),
            Value::ByteArray(v) => v.serialize(serializer),
            Value::IntArray(v) => v.serialize(serializer),
            Value::LongArray(v) => v.serialize(serializer),
            Value::List(v) => v.serialize(serializer),
            Value::Compound(v) => v.serialize(serializer),
        }
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let tag: Tag = u.arbitrary()?;
        let value = match tag {
            Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Value::from(u.arbitrary::<i8>()?),
            Tag::Short => Value::from(u.arbitrary::<i16>()?),
            Tag::Int => Value::from(u.arbitrary::<i32>()?),
            Tag::Long => Value::from(u.arbitrary::<i64>()?),
            Tag::Float => Value::from(u.arbitrary::<f32>()?),
            Tag::Double => Value::from(u.arbitrary::<f64>()?),
            Tag::String => Value::from(u.arbitrary::<String>()?),
            Tag::ByteArray => Value::from(u.arbitrary::<ByteArray>()?),
            Tag::IntArray => Value::from(u.arbitrary::<IntArray>()?),
            Tag::LongArray => Value::from(u.arbitrary::<LongArray>()?),
            Tag::List => Value::from(u.arbitrary::<List>()?),
            Tag::Compound => Value::from(u.arbitrary::<Compound>()?),
        };
        Ok(value)
    }
}

// Conversions into a value. Unsigned integers keep their bits.
macro_rules! into_value {
    ($($from:ty => $variant:ident $(via $conv:ty)?;)*) => {
        $(
            impl From<$from> for Value {
                fn from(v: $from) -> Self {
                    Value::$variant(v $(as $conv)?)
                }
            }
        )*
    };
}

into_value! {
    i8 => Byte;
    u8 => Byte via i8;
    i16 => Short;
    u16 => Short via i16;
    i32 => Int;
    u32 => Int via i32;
    i64 => Long;
    u64 => Long via i64;
    f32 => Float;
    f64 => Double;
    String => String;
    ByteArray => ByteArray;
    IntArray => IntArray;
    LongArray => LongArray;
    List => List;
    Compound => Compound;
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

/// Stored as a Byte of 0 or 1, as the game does.
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Byte(v.into())
    }
}
