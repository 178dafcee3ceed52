use crate::alphabet::Alphabet;
use crate::error::{Result, Role};
use crate::key::Keyword;
use crate::table::SubstitutionTable;

/// Looks up the ciphered symbol for a key row and plaintext column.
#[inline(always)]
pub fn encipher_symbol(table: &SubstitutionTable, key_row: usize, col: usize) -> char {
    table.get(key_row, col)
}

/// Enciphers `plaintext`, returning a text of the same length.
///
/// Every symbol of `keyword` and `plaintext` must belong to `alphabet`
/// after case folding, and `table` must have been built from `alphabet`.
/// Nothing is returned on failure; the first foreign symbol is reported.
///
/// ```
/// use tabula::{alphabet::Alphabet, encrypt::encode, table::SubstitutionTable};
///
/// let a = Alphabet::latin();
/// let t = SubstitutionTable::build(&a);
/// assert_eq!(encode(&a, &t, "lemon", "attackatdawn").unwrap(), "LXFOPVEFRNHR");
/// ```
pub fn encode(
    alphabet: &Alphabet,
    table: &SubstitutionTable,
    keyword: &str,
    plaintext: &str,
) -> Result<String> {
    let keyword = Keyword::new(alphabet, keyword)?;
    encode_with(alphabet, table, &keyword, plaintext.chars())
}

/// Like [`encode`] with an already validated keyword.
pub fn encode_with<I>(
    alphabet: &Alphabet,
    table: &SubstitutionTable,
    keyword: &Keyword,
    plaintext: I,
) -> Result<String>
where
    I: IntoIterator<Item = char>,
{
    plaintext
        .into_iter()
        .zip(keyword.stream())
        .enumerate()
        .map(|(position, (c, row))| -> Result<char> {
            let col = alphabet.locate(c, position, Role::Plaintext)?;
            Ok(encipher_symbol(table, row, col))
        })
        .collect()
}
