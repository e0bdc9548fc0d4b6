//! Decoding of NBT data into a [`Compound`] tree.
//!
//! Most users want [`from_bytes`] for data already in memory, or
//! [`crate::load::load_root`] if the data might be compressed. The
//! [`Decoder`] can be used directly to decode from any [`Read`], or to
//! decode a single payload when the tag ID and name have been read some
//! other way.
//!
//! # Limits
//!
//! Nesting is bounded by [`DecodeOpts::max_depth`] (512 by default). The
//! decoder itself does not recurse, but trees deeper than the limit are
//! rejected so that dropping, comparing or encoding a decoded tree stays
//! within reasonable stack use. Declared lengths of
//! arrays and lists can optionally be capped with
//! [`DecodeOpts::max_seq_len`].
//!
//! # Example
//!
//! ```
//! use nbtag::{from_bytes, DecodeOpts, de::from_bytes_with_opts};
//!
//! // An implicit root with one Int entry called "a".
//! let input = [3, 0, 1, b'a', 0, 0, 0, 42];
//!
//! let root = from_bytes(&input).unwrap();
//! assert_eq!(root.get_int("a"), Some(42));
//!
//! let root = from_bytes_with_opts(&input, DecodeOpts::new().max_depth(4)).unwrap();
//! assert_eq!(root.len(), 1);
//! ```
use std::convert::TryFrom;
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::{Compound, IntArray, List, LongArray, Tag, Value};

/// Default bound on container nesting, matching what the game itself
/// enforces.
pub const DEFAULT_MAX_DEPTH: usize = 512;

// Declared lengths are untrusted until the bytes arrive, so never reserve
// more than this many elements up front.
const PREALLOC_LIMIT: usize = 4096;

/// Options for customizing decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOpts {
    max_depth: usize,
    max_seq_len: Option<usize>,
}

impl Default for DecodeOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeOpts {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_seq_len: None,
        }
    }

    /// Maximum number of nested lists and compounds below the root. Going
    /// deeper fails with `NestingTooDeep`.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Maximum declared length of any array or list. Longer sequences fail
    /// with `LengthOverflow` before any of their elements are read.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = Some(value);
        self
    }
}

/// Primitive reads shared by everything that consumes NBT. Every read fails
/// with `TruncatedInput` if the input ends early.
pub(crate) trait ReadNbt: Read {
    fn read_tag(&mut self) -> Result<Tag> {
        let tag = self.read_u8()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }

    fn read_size_prefixed_str(&mut self) -> Result<String> {
        let len = self.read_u16::<BigEndian>()? as usize;
        let buf = self.read_exact_vec(len)?;

        match cesu8::from_java_cesu8(&buf) {
            Ok(s) => Ok(s.into_owned()),
            Err(_) => Err(Error::nonunicode(buf)),
        }
    }

    fn read_len(&mut self) -> Result<usize> {
        Ok(self.read_u32::<BigEndian>()? as usize)
    }

    /// Read exactly `len` bytes without trusting `len` for the allocation.
    fn read_exact_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        Read::take(&mut *self, len as u64).read_to_end(&mut buf)?;
        if buf.len() != len {
            return Err(Error::truncated());
        }
        Ok(buf)
    }
}

impl<R: Read + ?Sized> ReadNbt for R {}

/// Decoder for NBT data from any reader. It does not do decompression.
///
/// Nested lists and compounds are decoded with an explicit stack of open
/// containers rather than by recursion, so the call stack stays flat however
/// deep the input goes. Depth is still bounded by [`DecodeOpts::max_depth`].
///
/// ```
/// use nbtag::de::Decoder;
/// use nbtag::{DecodeOpts, Tag, Value};
///
/// // A bare Short payload.
/// let mut decoder = Decoder::new(&[0x01, 0x2c][..], DecodeOpts::default());
/// assert_eq!(decoder.read_value(Tag::Short).unwrap(), Value::Short(300));
/// ```
pub struct Decoder<R: Read> {
    reader: R,
    opts: DecodeOpts,
}

/// A list or compound whose children are still being read.
enum Frame {
    List {
        element: Tag,
        remaining: usize,
        values: Vec<Value>,
    },
    Compound(Compound),
}

impl Frame {
    fn attach(&mut self, name: String, value: Value) {
        match self {
            Frame::List { values, .. } => values.push(value),
            Frame::Compound(compound) => {
                compound.insert(name, value);
            }
        }
    }

    fn into_value(self) -> Value {
        match self {
            Frame::List {
                element, values, ..
            } => Value::List(List::from_decoded(element, values)),
            Frame::Compound(compound) => Value::Compound(compound),
        }
    }
}

/// A payload is either finished straight away or opens a container.
enum Payload {
    Done(Value),
    Open(Frame),
}

/// What the innermost open container needs next.
enum Step {
    /// A child container was opened. Carries its name in the parent, empty
    /// for list elements.
    Descend(String, Frame),
    /// Every child has been read.
    Finished,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R, opts: DecodeOpts) -> Self {
        Self { reader, opts }
    }

    /// Decode the rest of the input as an implicit root compound.
    pub fn read_root(&mut self) -> Result<Compound> {
        match self.run(Frame::Compound(Compound::new_implicit()), 0)? {
            Value::Compound(root) => Ok(root),
            other => Err(Error::type_mismatch(Tag::Compound, other.tag())),
        }
    }

    /// Decode the payload for a value of kind `tag`. A list or compound
    /// counts as the first level of nesting.
    pub fn read_value(&mut self, tag: Tag) -> Result<Value> {
        match self.read_payload(tag, 1)? {
            Payload::Done(value) => Ok(value),
            Payload::Open(frame) => self.run(frame, 1),
        }
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consumes this decoder, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read children until `first` is complete. `depth` is the nesting level
    /// of `first` itself.
    fn run(&mut self, first: Frame, depth: usize) -> Result<Value> {
        let mut current = first;
        let mut parents: Vec<(String, Frame)> = Vec::new();

        loop {
            match self.step(&mut current, depth + parents.len())? {
                Step::Descend(name, child) => {
                    let parent = std::mem::replace(&mut current, child);
                    parents.push((name, parent));
                }
                Step::Finished => {
                    let done = current.into_value();
                    match parents.pop() {
                        Some((name, mut parent)) => {
                            parent.attach(name, done);
                            current = parent;
                        }
                        None => return Ok(done),
                    }
                }
            }
        }
    }

    /// Read children of `frame` until one of them is a container, or there
    /// are none left.
    fn step(&mut self, frame: &mut Frame, depth: usize) -> Result<Step> {
        match frame {
            Frame::List {
                element,
                remaining,
                values,
            } => {
                while *remaining > 0 {
                    *remaining -= 1;
                    match self.read_payload(*element, depth + 1)? {
                        Payload::Done(value) => values.push(value),
                        Payload::Open(child) => return Ok(Step::Descend(String::new(), child)),
                    }
                }
                Ok(Step::Finished)
            }
            Frame::Compound(compound) => loop {
                // The root has no End tag, so running out of input between
                // entries is its natural end.
                let tag = match self.reader.read_u8() {
                    Ok(t) => t,
                    Err(e)
                        if compound.is_implicit()
                            && e.kind() == std::io::ErrorKind::UnexpectedEof =>
                    {
                        return Ok(Step::Finished)
                    }
                    Err(e) => return Err(e.into()),
                };
                let tag = Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))?;

                if tag == Tag::End {
                    return Ok(Step::Finished);
                }

                let name = self.reader.read_size_prefixed_str()?;
                log::trace!("decoding {} '{}' at depth {}", tag, name, depth);

                match self.read_payload(tag, depth + 1)? {
                    Payload::Done(value) => {
                        compound.insert(name, value);
                    }
                    Payload::Open(child) => return Ok(Step::Descend(name, child)),
                }
            },
        }
    }

    /// Read a whole scalar or array payload, or the header of a container
    /// that would sit at nesting level `depth`.
    fn read_payload(&mut self, tag: Tag, depth: usize) -> Result<Payload> {
        let value = match tag {
            Tag::End => return Err(Error::invalid_tag(tag.into())),
            Tag::Byte => Value::Byte(self.reader.read_i8()?),
            Tag::Short => Value::Short(self.reader.read_i16::<BigEndian>()?),
            Tag::Int => Value::Int(self.reader.read_i32::<BigEndian>()?),
            Tag::Long => Value::Long(self.reader.read_i64::<BigEndian>()?),
            Tag::Float => Value::Float(self.reader.read_f32::<BigEndian>()?),
            Tag::Double => Value::Double(self.reader.read_f64::<BigEndian>()?),
            Tag::String => Value::String(self.reader.read_size_prefixed_str()?),
            Tag::ByteArray => {
                let len = self.read_seq_len()?;
                let buf = self.reader.read_exact_vec(len)?;
                Value::ByteArray(buf.into_iter().map(|b| b as i8).collect())
            }
            Tag::IntArray => {
                let len = self.read_seq_len()?;
                let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
                for _ in 0..len {
                    buf.push(self.reader.read_i32::<BigEndian>()?);
                }
                Value::IntArray(IntArray::new(buf))
            }
            Tag::LongArray => {
                let len = self.read_seq_len()?;
                let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
                for _ in 0..len {
                    buf.push(self.reader.read_i64::<BigEndian>()?);
                }
                Value::LongArray(LongArray::new(buf))
            }
            Tag::List => {
                self.check_depth(depth)?;
                return Ok(Payload::Open(self.open_list()?));
            }
            Tag::Compound => {
                self.check_depth(depth)?;
                return Ok(Payload::Open(Frame::Compound(Compound::new())));
            }
        };
        Ok(Payload::Done(value))
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.opts.max_depth {
            return Err(Error::too_deep(self.opts.max_depth));
        }
        Ok(())
    }

    fn read_seq_len(&mut self) -> Result<usize> {
        let len = self.reader.read_len()?;
        match self.opts.max_seq_len {
            Some(max) if len > max => Err(Error::length_overflow("sequence", len)),
            _ => Ok(len),
        }
    }

    fn open_list(&mut self) -> Result<Frame> {
        let element = self.reader.read_tag()?;
        let len = self.read_seq_len()?;

        // An End list is how an empty list is usually written. It cannot
        // have elements since End has no payload.
        if element == Tag::End && len > 0 {
            return Err(Error::invalid_tag(element.into()));
        }

        Ok(Frame::List {
            element,
            remaining: len,
            values: Vec::with_capacity(len.min(PREALLOC_LIMIT)),
        })
    }
}

/// Decode an implicit root compound from a byte slice.
pub fn from_bytes(input: &[u8]) -> Result<Compound> {
    from_bytes_with_opts(input, DecodeOpts::default())
}

/// Decode an implicit root compound from a byte slice, with options.
pub fn from_bytes_with_opts(input: &[u8], opts: DecodeOpts) -> Result<Compound> {
    Decoder::new(input, opts).read_root()
}

/// Decode an implicit root compound from a reader, consuming it to the end.
pub fn from_reader<R: Read>(reader: R) -> Result<Compound> {
    from_reader_with_opts(reader, DecodeOpts::default())
}

/// Decode an implicit root compound from a reader, with options.
pub fn from_reader_with_opts<R: Read>(reader: R, opts: DecodeOpts) -> Result<Compound> {
    Decoder::new(reader, opts).read_root()
}
