use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result, Role};

/// The 26 letter latin alphabet, in the form callers usually write it.
pub const LATIN: &str = "abcdefghijklmnopqrstuvwxyz";

/// How symbols are compared against the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Every symbol is folded to upper case before lookup.
    #[default]
    Fold,
    /// Symbols are used exactly as given.
    Sensitive,
}

impl CaseMode {
    /// Folds a single symbol. A char whose upper case form is longer than
    /// one char (e.g. `ß`) is left untouched so it stays a single symbol.
    #[inline]
    pub fn fold(self, symbol: char) -> char {
        match self {
            CaseMode::Sensitive => symbol,
            CaseMode::Fold => {
                let mut upper = symbol.to_uppercase();
                match (upper.next(), upper.next()) {
                    (Some(c), None) => c,
                    _ => symbol,
                }
            }
        }
    }
}

/// Maps each symbol to its zero-based position.
///
/// Fails with [`Error::DuplicateAlphabetSymbol`] if a symbol repeats.
pub fn build_reference_index(symbols: &[char]) -> Result<HashMap<char, usize>> {
    let mut index = HashMap::with_capacity(symbols.len());
    for (position, &symbol) in symbols.iter().enumerate() {
        if let Some(first) = index.insert(symbol, position) {
            return Err(Error::DuplicateAlphabetSymbol { symbol, first, second: position });
        }
    }
    Ok(index)
}

/// An ordered, duplicate-free set of symbols together with its reference
/// index. The sequence answers position -> symbol, the index answers
/// symbol -> position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
    case: CaseMode,
}

impl Alphabet {
    pub fn new(text: &str, case: CaseMode) -> Result<Alphabet> {
        Alphabet::from_symbols(text.chars().map(|c| case.fold(c)).collect(), case)
    }

    /// `symbols` must already be folded under `case`.
    fn from_symbols(symbols: Vec<char>, case: CaseMode) -> Result<Alphabet> {
        if symbols.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        let index = build_reference_index(&symbols)?;
        Ok(Alphabet { symbols, index, case })
    }

    pub fn latin() -> Alphabet {
        let symbols = ('A'..='Z').collect::<Vec<_>>();
        let index = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Alphabet { symbols, index, case: CaseMode::Fold }
    }

    /// Moves the distinct symbols of `word` to the front, keeping the rest
    /// of the alphabet in its original order.
    ///
    /// ```
    /// use tabula::alphabet::Alphabet;
    ///
    /// let keyed = Alphabet::latin().keyed("plane").unwrap();
    /// assert_eq!(keyed.to_string(), "PLANEBCDFGHIJKMOQRSTUVWXYZ");
    /// ```
    pub fn keyed(&self, word: &str) -> Result<Alphabet> {
        let mut front = Vec::with_capacity(self.len());
        for (position, c) in word.chars().enumerate() {
            let symbol = self.case.fold(c);
            if !self.contains(symbol) {
                return Err(Error::InvalidSymbol { symbol, position, role: Role::KeyedWord });
            }
            if !front.contains(&symbol) {
                front.push(symbol);
            }
        }
        let rest = self.symbols.iter().filter(|c| !front.contains(*c)).copied().collect::<Vec<_>>();
        front.extend(rest);
        Alphabet::from_symbols(front, self.case)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet cannot be constructed empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[inline]
    pub fn case_mode(&self) -> CaseMode {
        self.case
    }

    #[inline]
    pub fn fold(&self, symbol: char) -> char {
        self.case.fold(symbol)
    }

    /// Position of an already folded symbol.
    #[inline]
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Folds `symbol` and looks it up, reporting failures against `role`.
    pub fn locate(&self, symbol: char, position: usize, role: Role) -> Result<usize> {
        let symbol = self.fold(symbol);
        self.position(symbol).ok_or(Error::InvalidSymbol { symbol, position, role })
    }

    #[inline]
    pub fn symbol(&self, position: usize) -> char {
        self.symbols[position]
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
