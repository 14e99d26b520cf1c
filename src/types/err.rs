//! Error types used in the library.
//!
//! - All are fail-fast: parsing returns an error rather than a partially-built instance, and nothing retries.
//! - The simplification and search procedures are pure functions over well-formed instances and raise no errors of their own.
//!
//! Names of the error enums --- for the most part --- overlap with the module the error arises in.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use std::path::PathBuf;

/// The general error, wrapping each specific error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Parse(ParseError),
    Literal(LiteralError),
    File(FileError),
}

/// Noted errors while parsing clause text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A token with no atom name after stripping any negation mark.
    EmptyName(String),

    /// A line of a formula could not be read.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors while decoding a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralError {
    /// An encoding outside `[2, 2n + 1]` for the owning table.
    ///
    /// A contract violation rather than a data-quality issue: no atom of the table could have produced the encoding.
    OutOfRange(u32),
}

impl From<LiteralError> for ErrorKind {
    fn from(e: LiteralError) -> Self {
        ErrorKind::Literal(e)
    }
}

/// Noted errors while loading a formula from a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileError {
    /// The file at the path could not be opened or read.
    Read(PathBuf),
}

impl From<FileError> for ErrorKind {
    fn from(e: FileError) -> Self {
        ErrorKind::File(e)
    }
}
