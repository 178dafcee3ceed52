//! Table-driven Vigenère cipher over an arbitrary ordered alphabet.
//!
//! The alphabet is any sequence of distinct `char`s. From it the crate
//! derives a reference index (symbol to position) and the tabula recta,
//! where row `r` is the alphabet shifted left by `r`. A keyword is repeated
//! to the length of the text, and each text symbol is replaced by the table
//! cell at (keyword row, text column). Deciphering walks the same row back.
//!
//! ```
//! use tabula::{Options, Vigenere};
//!
//! let v = Vigenere::new("abcdefghijklmnopqrstuvwxyz", Options::default()).unwrap();
//! let cipher = v.encode("key", "attack at dawn").unwrap();
//! assert_eq!(cipher, "KXRKGIKXBKAL");
//! assert_eq!(v.decode("key", &cipher).unwrap(), "ATTACKATDAWN");
//! ```
//!
//! This is a classical cipher and offers no real secrecy.

pub mod alphabet;
pub mod cipher;
pub mod decipherer;
pub mod encrypt;
pub mod error;
pub mod key;
pub mod table;

pub use alphabet::{Alphabet, CaseMode};
pub use cipher::{Options, Vigenere};
pub use error::{Error, Result, Role};
pub use key::Keyword;
pub use table::SubstitutionTable;
