use std::convert::TryInto;

use crate::Tag;

/// Builds raw NBT bytes for tests. Nothing here checks that the result is
/// valid, which is the point: most decode tests want broken input.
#[derive(Default)]
pub struct Builder {
    payload: Vec<u8>,
}

// `$payload` writes a bare big-endian value, `$named` writes ID, name and
// value.
macro_rules! scalars {
    ($($named:ident, $payload:ident, $ty:ty, $tag:ident;)*) => {
        $(
            pub fn $payload(mut self, v: $ty) -> Self {
                self.payload.extend_from_slice(&v.to_be_bytes());
                self
            }

            pub fn $named(self, name: &str, v: $ty) -> Self {
                self.tag(Tag::$tag).name(name).$payload(v)
            }
        )*
    };
}

// Length prefixed arrays, with the elements written by an existing payload
// method.
macro_rules! arrays {
    ($($named:ident, $payload:ident, $elem_payload:ident, $ty:ty, $tag:ident;)*) => {
        $(
            pub fn $payload(mut self, elems: &[$ty]) -> Self {
                for e in elems {
                    self = self.$elem_payload(*e);
                }
                self
            }

            pub fn $named(self, name: &str, elems: &[$ty]) -> Self {
                let len = elems.len().try_into().expect("test array too long");
                self.tag(Tag::$tag).name(name).len_payload(len).$payload(elems)
            }
        )*
    };
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(self, t: Tag) -> Self {
        self.raw_tag(t.into())
    }

    /// A byte where an ID is expected, in range or not.
    pub fn raw_tag(mut self, t: u8) -> Self {
        self.payload.push(t);
        self
    }

    /// A string as it appears on the wire: u16 length then modified UTF-8.
    pub fn name(self, name: &str) -> Self {
        let bytes = cesu8::to_java_cesu8(name);
        self.raw_str_len(bytes.len()).raw_bytes(&bytes)
    }

    pub fn string_payload(self, s: &str) -> Self {
        self.name(s)
    }

    pub fn string(self, name: &str, s: &str) -> Self {
        self.tag(Tag::String).name(name).string_payload(s)
    }

    pub fn start_compound(self, name: &str) -> Self {
        self.tag(Tag::Compound).name(name)
    }

    /// Marks where a compound inside a list begins. Writes nothing.
    pub fn start_anon_compound(self) -> Self {
        self
    }

    pub fn end_compound(self) -> Self {
        self.tag(Tag::End)
    }

    /// List header. `size` is written as given, so it can lie.
    pub fn start_list(self, name: &str, element: Tag, size: u32) -> Self {
        self.tag(Tag::List).name(name).start_anon_list(element, size)
    }

    pub fn start_anon_list(self, element: Tag, size: u32) -> Self {
        self.tag(element).len_payload(size)
    }

    pub fn len_payload(mut self, len: u32) -> Self {
        self.payload.extend_from_slice(&len.to_be_bytes());
        self
    }

    scalars! {
        byte, byte_payload, i8, Byte;
        short, short_payload, i16, Short;
        int, int_payload, i32, Int;
        long, long_payload, i64, Long;
        float, float_payload, f32, Float;
        double, double_payload, f64, Double;
    }

    arrays! {
        byte_array, byte_array_payload, byte_payload, i8, ByteArray;
        int_array, int_array_payload, int_payload, i32, IntArray;
        long_array, long_array_payload, long_payload, i64, LongArray;
    }

    /// A string length prefix on its own.
    pub fn raw_str_len(mut self, len: usize) -> Self {
        let len: u16 = len.try_into().expect("test string too long");
        self.payload.extend_from_slice(&len.to_be_bytes());
        self
    }

    pub fn raw_bytes(mut self, bs: &[u8]) -> Self {
        self.payload.extend_from_slice(bs);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.payload
    }
}
