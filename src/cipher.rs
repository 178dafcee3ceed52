use crate::alphabet::{Alphabet, CaseMode};
use crate::decipherer;
use crate::encrypt;
use crate::error::Result;
use crate::key::Keyword;
use crate::table::SubstitutionTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub case: CaseMode,
    /// Drop whitespace from plaintext unless the alphabet contains it.
    pub strip_whitespace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { case: CaseMode::Fold, strip_whitespace: true }
    }
}

/// An alphabet with its reference index and substitution table, built once
/// and reused for any number of encode/decode calls. Holds no mutable
/// state, so a single instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct Vigenere {
    alphabet: Alphabet,
    table: SubstitutionTable,
    options: Options,
}

impl Vigenere {
    pub fn new(alphabet: &str, options: Options) -> Result<Vigenere> {
        Ok(Vigenere::from_alphabet(Alphabet::new(alphabet, options.case)?, options))
    }

    /// Uses the alphabet reordered by [`Alphabet::keyed`].
    pub fn keyed(alphabet: &str, word: &str, options: Options) -> Result<Vigenere> {
        let keyed = Alphabet::new(alphabet, options.case)?.keyed(word)?;
        Ok(Vigenere::from_alphabet(keyed, options))
    }

    /// `options.case` is ignored in favour of the alphabet's own case mode.
    pub fn from_alphabet(alphabet: Alphabet, options: Options) -> Vigenere {
        let table = SubstitutionTable::build(&alphabet);
        let options = Options { case: alphabet.case_mode(), ..options };
        Vigenere { alphabet, table, options }
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    #[inline]
    pub fn options(&self) -> Options {
        self.options
    }

    pub fn keyword(&self, keyword: &str) -> Result<Keyword> {
        Keyword::new(&self.alphabet, keyword)
    }

    /// The keystream that would be used for a text of `len` symbols.
    pub fn keystream(&self, keyword: &str, len: usize) -> Result<String> {
        Ok(self.keyword(keyword)?.align(len).into_iter().collect())
    }

    /// Plaintext exactly as the forward transform will see it. Positions in
    /// [`InvalidSymbol`](crate::Error::InvalidSymbol) errors refer to this text.
    pub fn prepare(&self, plaintext: &str) -> String {
        plaintext
            .chars()
            .map(|c| self.alphabet.fold(c))
            .filter(|c| {
                !(self.options.strip_whitespace && c.is_whitespace() && !self.alphabet.contains(*c))
            })
            .collect()
    }

    pub fn encode(&self, keyword: &str, plaintext: &str) -> Result<String> {
        let keyword = self.keyword(keyword)?;
        encrypt::encode_with(&self.alphabet, &self.table, &keyword, self.prepare(plaintext).chars())
    }

    pub fn decode(&self, keyword: &str, ciphertext: &str) -> Result<String> {
        let keyword = self.keyword(keyword)?;
        decipherer::decode_with(&self.alphabet, &self.table, &keyword, ciphertext.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::LATIN;
    use crate::error::{Error, Role};

    fn latin() -> Vigenere {
        Vigenere::new(LATIN, Options::default()).unwrap()
    }

    #[test]
    fn test_strips_whitespace() {
        let v = latin();
        assert_eq!(v.prepare("attack at\tdawn\n"), "ATTACKATDAWN");
        assert_eq!(v.encode("key", "attack at dawn").unwrap(), "KXRKGIKXBKAL");
    }

    #[test]
    fn test_keeps_whitespace_member() {
        let v = Vigenere::new("ab ", Options::default()).unwrap();
        assert_eq!(v.prepare("a b"), "A B");
        assert_eq!(v.encode("b", "a b").unwrap(), "BA ");
    }

    #[test]
    fn test_keep_whitespace_option() {
        let options = Options { strip_whitespace: false, ..Options::default() };
        let v = Vigenere::new(LATIN, options).unwrap();
        assert_eq!(
            v.encode("key", "ab c"),
            Err(Error::InvalidSymbol { symbol: ' ', position: 2, role: Role::Plaintext })
        );
    }

    #[test]
    fn test_ciphertext_not_stripped() {
        assert!(matches!(
            latin().decode("key", "KXR KGI"),
            Err(Error::InvalidSymbol { symbol: ' ', position: 3, .. })
        ));
    }

    #[test]
    fn test_keystream() {
        assert_eq!(latin().keystream("key", 12).unwrap(), "KEYKEYKEYKEY");
        assert_eq!(latin().keystream("", 12), Err(Error::EmptyKeyword));
    }

    #[test]
    fn test_keyed_round_trip() {
        let v = Vigenere::keyed(LATIN, "plane", Options::default()).unwrap();
        assert_eq!(v.alphabet().symbol(0), 'P');
        let cipher = v.encode("feast", "lorem ipsum").unwrap();
        assert_ne!(cipher, "LOREMIPSUM");
        assert_eq!(v.decode("feast", &cipher).unwrap(), "LOREMIPSUM");
    }

    #[test]
    fn test_from_alphabet_takes_case_mode() {
        let a = Alphabet::new("aA", CaseMode::Sensitive).unwrap();
        let v = Vigenere::from_alphabet(a, Options::default());
        assert_eq!(v.options().case, CaseMode::Sensitive);
        assert_eq!(v.encode("A", "aA").unwrap(), "Aa");
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vigenere>();
    }
}
