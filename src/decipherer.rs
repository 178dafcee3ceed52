use crate::alphabet::Alphabet;
use crate::error::{Error, Result, Role};
use crate::key::Keyword;
use crate::table::SubstitutionTable;

/// Recovers the plaintext symbol for a key row and ciphered symbol, or
/// `None` if the symbol is not in the alphabet. `cipher` must be folded.
#[inline(always)]
pub fn decipher_symbol(
    alphabet: &Alphabet,
    table: &SubstitutionTable,
    key_row: usize,
    cipher: char,
) -> Option<char> {
    table.column_of(alphabet, key_row, cipher).map(|col| alphabet.symbol(col))
}

/// Inverse of [`encode`](crate::encrypt::encode).
///
/// ```
/// use tabula::{alphabet::Alphabet, decipherer::decode, table::SubstitutionTable};
///
/// let a = Alphabet::latin();
/// let t = SubstitutionTable::build(&a);
/// assert_eq!(decode(&a, &t, "lemon", "LXFOPVEFRNHR").unwrap(), "ATTACKATDAWN");
/// ```
pub fn decode(
    alphabet: &Alphabet,
    table: &SubstitutionTable,
    keyword: &str,
    ciphertext: &str,
) -> Result<String> {
    let keyword = Keyword::new(alphabet, keyword)?;
    decode_with(alphabet, table, &keyword, ciphertext.chars())
}

pub fn decode_with<I>(
    alphabet: &Alphabet,
    table: &SubstitutionTable,
    keyword: &Keyword,
    ciphertext: I,
) -> Result<String>
where
    I: IntoIterator<Item = char>,
{
    ciphertext
        .into_iter()
        .zip(keyword.stream())
        .enumerate()
        .map(|(position, (c, row))| {
            let symbol = alphabet.fold(c);
            decipher_symbol(alphabet, table, row, symbol)
                .ok_or(Error::InvalidSymbol { symbol, position, role: Role::Ciphertext })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::CaseMode;

    #[test]
    fn test_decipher_symbol_every_cell() {
        let a = Alphabet::latin();
        let t = SubstitutionTable::build(&a);
        for row in 0..26 {
            for col in 0..26 {
                let plain = decipher_symbol(&a, &t, row, t.get(row, col));
                assert_eq!(plain, Some(a.symbol(col)));
            }
        }
    }

    #[test]
    fn test_decode_attack_at_dawn() {
        let a = Alphabet::latin();
        let t = SubstitutionTable::build(&a);
        assert_eq!(decode(&a, &t, "KEY", "KXRKGIKXBKAL").unwrap(), "ATTACKATDAWN");
        assert_eq!(decode(&a, &t, "key", "kxrkgikxbkal").unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn test_decode_rejects_foreign_symbol() {
        let a = Alphabet::latin();
        let t = SubstitutionTable::build(&a);
        assert_eq!(
            decode(&a, &t, "KEY", "KX RK"),
            Err(Error::InvalidSymbol { symbol: ' ', position: 2, role: Role::Ciphertext })
        );
    }

    #[test]
    fn test_decode_case_sensitive() {
        let a = Alphabet::new("aAbB", CaseMode::Sensitive).unwrap();
        let t = SubstitutionTable::build(&a);
        assert_eq!(decode(&a, &t, "A", "AbBa").unwrap(), "aAbB");
    }
}
