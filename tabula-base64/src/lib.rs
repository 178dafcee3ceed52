//! Enciphers arbitrary bytes by running the Vigenère engine over their
//! base64 form. The 64 symbols of the standard base64 alphabet form a
//! case-sensitive cipher alphabet, so the armored output is itself valid
//! (unpadded) base64.

use base64::{engine::general_purpose::STANDARD_NO_PAD as BASE64, Engine};
use tabula::{Alphabet, CaseMode, Options, Vigenere};
use thiserror::Error;

pub const BASE64_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] tabula::Error),

    #[error("deciphered text is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A cipher over the base64 alphabet. Keywords must be drawn from the same
/// 64 symbols and are matched case-sensitively.
pub fn base64_cipher() -> Result<Vigenere> {
    let alphabet = Alphabet::new(BASE64_ALPHABET, CaseMode::Sensitive)?;
    Ok(Vigenere::from_alphabet(
        alphabet,
        Options { case: CaseMode::Sensitive, strip_whitespace: false },
    ))
}

/// Base64-encodes `bytes` and enciphers the result.
pub fn encode_bytes(cipher: &Vigenere, keyword: &str, bytes: &[u8]) -> Result<String> {
    Ok(cipher.encode(keyword, &BASE64.encode(bytes))?)
}

/// Deciphers `armored` and decodes the base64 beneath. Trailing `=` padding
/// and surrounding whitespace are tolerated.
pub fn decode_bytes(cipher: &Vigenere, keyword: &str, armored: &str) -> Result<Vec<u8>> {
    let armored = armored.trim().trim_end_matches('=');
    let plain = cipher.decode(keyword, armored)?;
    Ok(BASE64.decode(plain)?)
}

pub fn decode_text(cipher: &Vigenere, keyword: &str, armored: &str) -> Result<String> {
    Ok(String::from_utf8(decode_bytes(cipher, keyword, armored)?)?)
}
