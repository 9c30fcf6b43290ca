//! Module containing the universal error type
use thiserror::Error;

/// Universal error type for `bijection`
///
/// Lookups and deletions never fail; missing entries are reported with
/// `None` or `false`.  Errors only come from converting a map to or from
/// text, e.g. [`Bimap::from_text`](crate::Bimap::from_text).
#[derive(Error, Debug)]
pub enum Error {
    /// Line does not contain a `=` separator
    #[error("line {0}: expected `key = value`")]
    MissingSeparator(usize),

    /// Key could not be parsed
    #[error("line {0}: could not parse key `{1}`")]
    BadKey(usize, String),

    /// Value could not be parsed
    #[error("line {0}: could not parse value `{1}`")]
    BadValue(usize, String),

    /// Key cannot be written as text and read back unchanged
    #[error("key `{0}` cannot be written as text")]
    UnwritableKey(String),

    /// Value cannot be written as text and read back unchanged
    #[error("value `{0}` cannot be written as text")]
    UnwritableValue(String),

    /// IO error; see inner code for details
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
