//! Loading and saving whole files.
//!
//! NBT files are usually GZip compressed (`level.dat`, player data), but
//! zlib compressed and uncompressed data is also common. [`load_root`]
//! detects which it has been given and decodes the result as an implicit
//! root compound.
//!
//! ```
//! use nbtag::load::{load_root, save_root, Compression};
//! use nbtag::Compound;
//!
//! let mut root = Compound::new_implicit();
//! root.put_string("name", "world");
//!
//! let gz = save_root(&root, Compression::Gzip).unwrap();
//! assert_eq!(Compression::detect(&gz), Compression::Gzip);
//! assert_eq!(load_root(&gz).unwrap(), root);
//! ```
use std::borrow::Cow;
use std::io::{Read, Write};
use std::path::Path;

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};

use crate::de::{from_bytes_with_opts, DecodeOpts};
use crate::error::{Error, Result};
use crate::ser::to_writer;
use crate::Compound;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Various compression schemes that NBT data is typically compressed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Zlib,
    Uncompressed,
}

impl Compression {
    /// Guess the compression of some data from its header.
    ///
    /// Zlib has no magic number, only a header checksum, so a zlib guess can
    /// be wrong. Uncompressed NBT almost never passes the check though, as
    /// the first byte would have to be a String tag followed by a name over
    /// 7000 bytes long.
    pub fn detect(data: &[u8]) -> Compression {
        match data {
            [a, b, ..] if [*a, *b] == GZIP_MAGIC => Compression::Gzip,
            [cmf, flg, ..] if is_zlib_header(*cmf, *flg) => Compression::Zlib,
            _ => Compression::Uncompressed,
        }
    }
}

fn is_zlib_header(cmf: u8, flg: u8) -> bool {
    let deflate = cmf & 0x0f == 8;
    let window_ok = cmf >> 4 <= 7;
    let check = ((cmf as u16) << 8 | flg as u16) % 31 == 0;
    deflate && window_ok && check
}

/// Load an implicit root compound from data that may be compressed.
pub fn load_root(data: &[u8]) -> Result<Compound> {
    load_root_with_opts(data, DecodeOpts::default())
}

/// Like [`load_root`] with custom decoding options.
pub fn load_root_with_opts(data: &[u8], opts: DecodeOpts) -> Result<Compound> {
    let compression = Compression::detect(data);
    log::debug!("detected {:?} input of {} bytes", compression, data.len());

    let raw = match decompress(data, compression) {
        Ok(raw) => raw,
        // A zlib guess rests on a two byte checksum, so give the data a
        // chance as plain NBT before giving up on it.
        Err(e) if compression == Compression::Zlib => {
            log::debug!("zlib inflate failed ({}), trying uncompressed", e);
            Cow::Borrowed(data)
        }
        Err(e) => return Err(e),
    };

    from_bytes_with_opts(&raw, opts)
}

/// Read a file and load it with [`load_root`].
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Compound> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(Error::io)?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    load_root(&data)
}

/// Encode a compound and wrap it in the given compression.
pub fn save_root(root: &Compound, compression: Compression) -> Result<Vec<u8>> {
    match compression {
        Compression::Gzip => {
            let mut encoder = GzEncoder::new(vec![], flate2::Compression::default());
            to_writer(&mut encoder, root)?;
            encoder.finish().map_err(Error::io)
        }
        Compression::Zlib => {
            let mut encoder = ZlibEncoder::new(vec![], flate2::Compression::default());
            to_writer(&mut encoder, root)?;
            encoder.finish().map_err(Error::io)
        }
        Compression::Uncompressed => crate::to_bytes(root),
    }
}

/// Encode a compound with [`save_root`] and write it to a file.
pub fn save_file<P: AsRef<Path>>(path: P, root: &Compound, compression: Compression) -> Result<()> {
    let data = save_root(root, compression)?;
    let mut file = std::fs::File::create(path).map_err(Error::io)?;
    file.write_all(&data).map_err(Error::io)?;
    Ok(())
}

fn decompress(data: &[u8], compression: Compression) -> Result<Cow<'_, [u8]>> {
    let mut buf = vec![];
    match compression {
        Compression::Gzip => {
            GzDecoder::new(data)
                .read_to_end(&mut buf)
                .map_err(Error::io)?;
        }
        Compression::Zlib => {
            ZlibDecoder::new(data)
                .read_to_end(&mut buf)
                .map_err(Error::io)?;
        }
        Compression::Uncompressed => return Ok(Cow::Borrowed(data)),
    }
    Ok(Cow::Owned(buf))
}
