//! Line-based text import and export
use log::debug;
use std::{
    fmt::Display,
    hash::Hash,
    io::{BufRead, BufReader, Read, Write},
    str::FromStr,
};

use crate::{Bimap, Error};

impl<K, V> Bimap<K, V>
where
    K: Hash + Eq + Clone + FromStr,
    V: Hash + Eq + Clone + FromStr,
{
    /// Parses a map from `key = value` lines
    ///
    /// Blank lines and lines starting with `#` are skipped, and whitespace
    /// around keys and values is trimmed.  The line is split at the first
    /// `=`, so values may contain `=` but keys may not.
    ///
    /// Pairs are inserted in order with [`set`](Self::set), so a later line
    /// evicts any earlier pair which shares its key or value.
    ///
    /// ```
    /// # use bijection::Bimap;
    /// let text = "# users\nroot = 0\ndaemon = 1\n";
    /// let m = Bimap::<String, u32>::from_text(text.as_bytes())?;
    /// assert_eq!(m.get_by_value(&1).map(String::as_str), Some("daemon"));
    /// # Ok::<(), bijection::Error>(())
    /// ```
    pub fn from_text<R: Read>(r: R) -> Result<Self, Error> {
        let reader = BufReader::new(r);
        let mut out = Self::new();
        let mut evicted = 0;
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let lineno = i + 1;
            let (k, v) = line
                .split_once('=')
                .ok_or(Error::MissingSeparator(lineno))?;
            let (k, v) = (k.trim(), v.trim());
            let key: K = k
                .parse()
                .map_err(|_| Error::BadKey(lineno, k.to_owned()))?;
            let value: V = v
                .parse()
                .map_err(|_| Error::BadValue(lineno, v.to_owned()))?;
            if out.insert(key, value).did_overwrite() {
                evicted += 1;
            }
        }
        debug!("loaded {} pairs ({evicted} lines overrode others)", out.len());
        Ok(out)
    }
}

impl<K, V> Bimap<K, V>
where
    K: Display,
    V: Display,
{
    /// Writes the map as `key = value` lines, in iteration order
    ///
    /// Every pair is checked before anything is written, so that the output
    /// always reads back with [`from_text`](Self::from_text).  Keys may not
    /// contain `=` or start with `#`; neither keys nor values may contain
    /// line breaks or have surrounding whitespace.
    pub fn to_text<W: Write>(&self, mut w: W) -> Result<(), Error> {
        let lines = self
            .iter()
            .map(|(k, v)| {
                let (k, v) = (k.to_string(), v.to_string());
                if !is_writable(&k) || k.contains('=') || k.starts_with('#') {
                    Err(Error::UnwritableKey(k))
                } else if !is_writable(&v) {
                    Err(Error::UnwritableValue(v))
                } else {
                    Ok((k, v))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        for (k, v) in lines {
            writeln!(w, "{k} = {v}")?;
        }
        Ok(())
    }
}

/// Checks that text survives a trip through a single trimmed line
fn is_writable(s: &str) -> bool {
    !s.contains(['\n', '\r']) && s.trim() == s
}
