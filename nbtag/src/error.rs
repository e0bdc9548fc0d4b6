//! Contains the Error and Result type used by the whole crate.
use crate::Tag;

/// Various errors that can occur while decoding, encoding or navigating a
/// tag tree. Use [`Error::kind`] to tell them apart.
#[derive(Debug)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The underlying stream could not be read or written, or compressed
    /// input could not be inflated.
    Io(std::io::Error),

    /// The input ended part way through a value.
    TruncatedInput,

    /// A byte outside 0..=12 was found where a tag ID was expected, or an End
    /// tag was found somewhere a value is required.
    InvalidTagId(u8),

    /// A string was not valid (modified) UTF-8. Contains the raw bytes.
    InvalidEncoding(Vec<u8>),

    /// An operation expected one kind of value but found another.
    TypeMismatch { expected: Tag, found: Tag },

    /// An index was outside the bounds of a list or array.
    IndexOutOfRange { index: usize, len: usize },

    /// Containers were nested deeper than the configured limit.
    NestingTooDeep(usize),

    /// A compound did not contain the requested key.
    NotFound(String),

    /// A length did not fit the wire format, or exceeded a configured limit.
    LengthOverflow,

    /// A path expression could not be parsed.
    InvalidPath(String),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.kind, ErrorKind::TruncatedInput)
    }

    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_))
    }

    /// Wrap an IO error without reinterpreting it. Unlike the `From` impl an
    /// unexpected EOF stays an IO error, which is what we want for failures
    /// that happen below the tag layer, such as decompression.
    pub(crate) fn io(e: std::io::Error) -> Self {
        Self {
            msg: format!("io error: {}", e),
            kind: ErrorKind::Io(e),
        }
    }

    pub(crate) fn truncated() -> Self {
        Self {
            msg: "eof: unexpectedly ran out of input".into(),
            kind: ErrorKind::TruncatedInput,
        }
    }

    pub(crate) fn invalid_tag(tag: u8) -> Self {
        Self {
            msg: format!("invalid nbt tag value: {}", tag),
            kind: ErrorKind::InvalidTagId(tag),
        }
    }

    pub(crate) fn nonunicode(data: Vec<u8>) -> Self {
        Self {
            msg: format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(&data)
            ),
            kind: ErrorKind::InvalidEncoding(data),
        }
    }

    pub(crate) fn type_mismatch(expected: Tag, found: Tag) -> Self {
        Self {
            msg: format!("type mismatch: expected {}, found {}", expected, found),
            kind: ErrorKind::TypeMismatch { expected, found },
        }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self {
            msg: format!("index {} out of range for length {}", index, len),
            kind: ErrorKind::IndexOutOfRange { index, len },
        }
    }

    pub(crate) fn too_deep(limit: usize) -> Self {
        Self {
            msg: format!("nesting exceeded maximum depth of {}", limit),
            kind: ErrorKind::NestingTooDeep(limit),
        }
    }

    pub(crate) fn not_found(key: &str) -> Self {
        Self {
            msg: format!("key not found: '{}'", key),
            kind: ErrorKind::NotFound(key.to_owned()),
        }
    }

    pub(crate) fn length_overflow(what: &str, len: usize) -> Self {
        Self {
            msg: format!("{} length too large: {}", what, len),
            kind: ErrorKind::LengthOverflow,
        }
    }

    pub(crate) fn invalid_path(path: &str, reason: &str) -> Self {
        Self {
            msg: format!("invalid path '{}': {}", path, reason),
            kind: ErrorKind::InvalidPath(path.to_owned()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::truncated(),
            _ => Self::io(e),
        }
    }
}
