//! Error type for the serialization boundary.
//!
//! Key absence is not an error in this crate; lookups report it as
//! `Option::None`. The variants here only cover the file format adapter in
//! [`dump`][crate::TreeMap::dump] and [`load`][crate::TreeMap::load].

use std::io;

/// A convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`TreeMap`][crate::TreeMap] serialization.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The backing file could not be opened, read, or written.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// A serialized line was not of the form `key:value` or a token failed
    /// to parse. Carries the 1-based line number and the offending content.
    #[error("malformed line {line}: {content:?}")]
    Parse {
        /// 1-based line number within the file.
        line: usize,
        /// The raw line that failed to parse.
        content: String,
    },
}
