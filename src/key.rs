use std::fmt;
use std::iter::{Copied, Cycle};
use std::slice::Iter;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result, Role};

/// Repeats `keyword` until it is exactly `len` symbols long, truncating it
/// when `len` is shorter.
///
/// ```
/// use tabula::key::align_keystream;
///
/// let k: Vec<char> = "KEY".chars().collect();
/// let stream: String = align_keystream(&k, 8).unwrap().into_iter().collect();
/// assert_eq!(stream, "KEYKEYKE");
/// ```
pub fn align_keystream<T: Copy>(keyword: &[T], len: usize) -> Result<Vec<T>> {
    if keyword.is_empty() {
        return Err(Error::EmptyKeyword);
    }
    let stream = keyword.iter().copied().cycle().take(len).collect::<Vec<_>>();
    debug_assert_eq!(stream.len(), len);
    Ok(stream)
}

/// A keyword checked against an alphabet. Stores the table row selected by
/// each symbol so the transforms never look the keyword up again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    symbols: Vec<char>,
    rows: Vec<usize>,
}

impl Keyword {
    pub fn new(alphabet: &Alphabet, keyword: &str) -> Result<Keyword> {
        let mut symbols = Vec::with_capacity(keyword.len());
        let mut rows = Vec::with_capacity(keyword.len());
        for (position, c) in keyword.chars().enumerate() {
            rows.push(alphabet.locate(c, position, Role::Keyword)?);
            symbols.push(alphabet.fold(c));
        }
        if rows.is_empty() {
            return Err(Error::EmptyKeyword);
        }
        Ok(Keyword { symbols, rows })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; an empty keyword is rejected by [`Keyword::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// The row indices repeated forever. Zipping with a text yields the
    /// keystream without materializing it.
    #[inline]
    pub fn stream(&self) -> Cycle<Copied<Iter<'_, usize>>> {
        self.rows.iter().copied().cycle()
    }

    /// The keystream symbols for a text of `len` symbols.
    pub fn align(&self, len: usize) -> Vec<char> {
        self.symbols.iter().copied().cycle().take(len).collect()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
