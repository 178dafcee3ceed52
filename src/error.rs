//! Error types for the tabula engine.

use core::fmt;

use thiserror::Error;

/// Which input a rejected symbol came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Keyword,
    Plaintext,
    Ciphertext,
    /// The word used to build a keyed alphabet.
    KeyedWord,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Keyword => "keyword",
            Role::Plaintext => "plaintext",
            Role::Ciphertext => "ciphertext",
            Role::KeyedWord => "keyed alphabet word",
        };
        f.write_str(name)
    }
}

/// Errors produced while building an alphabet or transforming text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A symbol is not a member of the configured alphabet.
    #[error("symbol {symbol:?} at position {position} of the {role} is not in the alphabet")]
    InvalidSymbol {
        symbol: char,
        position: usize,
        role: Role,
    },

    /// The alphabet repeats a symbol, so the reference index is not bijective.
    #[error("alphabet symbol {symbol:?} appears at positions {first} and {second}")]
    DuplicateAlphabetSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },

    #[error("keyword must contain at least one symbol")]
    EmptyKeyword,

    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
}

pub type Result<T> = core::result::Result<T, Error>;
