use std::fmt;

use crate::alphabet::Alphabet;

/// The tabula recta: an N×N grid where row `r` is the alphabet shifted
/// left by `r`, so `table[r][c] == alphabet[(r + c) % N]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    size: usize,
    /// Row-major, `size * size` cells.
    cells: Vec<char>,
    /// Row labels, i.e. the alphabet itself.
    header: Vec<char>,
}

impl SubstitutionTable {
    pub fn build(alphabet: &Alphabet) -> SubstitutionTable {
        let symbols = alphabet.symbols();
        let size = symbols.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            cells.extend((0..size).map(|col| symbols[(row + col) % size]));
        }
        SubstitutionTable { size, cells, header: symbols.to_vec() }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// # Panics
    /// If `row` or `col` is not below [`size`](Self::size).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> char {
        assert!(col < self.size, "column {} out of range", col);
        self.cells[row * self.size + col]
    }

    pub fn row(&self, row: usize) -> &[char] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size)
    }

    /// Finds the column of `row` holding `symbol`. Since every row is a
    /// rotation this is `(index(symbol) - row) mod N`, no scan needed.
    pub fn column_of(&self, alphabet: &Alphabet, row: usize, symbol: char) -> Option<usize> {
        let idx = alphabet.position(symbol)?;
        let col = (idx + self.size - row % self.size) % self.size;
        debug_assert_eq!(self.get(row, col), symbol);
        Some(col)
    }
}

impl fmt::Display for SubstitutionTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "  ")?;
        for c in self.header.iter() {
            write!(f, " {}", c)?;
        }
        for (label, row) in self.header.iter().zip(self.rows()) {
            write!(f, "\n{} ", label)?;
            for c in row {
                write!(f, " {}", c)?;
            }
        }
        Ok(())
    }
}
