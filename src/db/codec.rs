//! Versioned binary layout of a collection file.
//!
//! ```text
//! magic   [u8; 4]   b"BUSF"
//! version u16 LE    FORMAT_VERSION
//! kind    u8        1 = routes, 2 = students
//! count   u32 LE    followed by `count` borsh-encoded records
//! ```
//!
//! Records are encoded field by field: `u32` ids, `f64` little-endian
//! floats, strings as a `u32` byte length plus UTF-8 bytes.

use std::io;
use std::path::Path;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::{Error, Result};
use crate::models::{Record, Route, Student};

const MAGIC: [u8; 4] = *b"BUSF";
const FORMAT_VERSION: u16 = 1;

/// A record type with its own collection file.
pub(crate) trait Persisted: Record + BorshSerialize + BorshDeserialize {
    /// Collection tag written into the header.
    const KIND: u8;
}

impl Persisted for Route {
    const KIND: u8 = 1;
}

impl Persisted for Student {
    const KIND: u8 = 2;
}

fn kind_name(kind: u8) -> &'static str {
    if kind == Route::KIND {
        Route::COLLECTION
    } else if kind == Student::KIND {
        Student::COLLECTION
    } else {
        "unknown"
    }
}

#[derive(BorshSerialize, BorshDeserialize)]
struct Header {
    magic: [u8; 4],
    version: u16,
    kind: u8,
}

/// Encode a whole collection, header included.
pub(crate) fn encode<T: Persisted>(records: &[T]) -> io::Result<Vec<u8>> {
    let header = Header {
        magic: MAGIC,
        version: FORMAT_VERSION,
        kind: T::KIND,
    };
    let mut bytes = borsh::to_vec(&header)?;
    records.serialize(&mut bytes)?;
    Ok(bytes)
}

/// Decode a whole collection read from `path`. Nothing is returned unless
/// every record decodes and no bytes are left over.
pub(crate) fn decode<T: Persisted>(path: &Path, bytes: &[u8]) -> Result<Vec<T>> {
    if !bytes.starts_with(&MAGIC) {
        return Err(Error::BadMagic {
            path: path.to_path_buf(),
        });
    }

    let decode_err = |source: io::Error| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let mut buf = bytes;
    let header = Header::deserialize(&mut buf).map_err(decode_err)?;
    if header.version != FORMAT_VERSION {
        return Err(Error::UnsupportedVersion {
            path: path.to_path_buf(),
            version: header.version,
        });
    }
    if header.kind != T::KIND {
        return Err(Error::WrongCollection {
            path: path.to_path_buf(),
            expected: T::COLLECTION,
            found: kind_name(header.kind),
        });
    }

    let records = Vec::<T>::deserialize(&mut buf).map_err(decode_err)?;
    if !buf.is_empty() {
        return Err(decode_err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} trailing bytes after last record", buf.len()),
        )));
    }
    Ok(records)
}
