use fxhash::FxHashSet;
use lazy_static::lazy_static;
use thiserror::Error;

use crate::{AA_AMBIGUITY, AA_CODES, DNA_BASES, DNA_CHARACTERS, RNA_BASES};

#[derive(Error, Debug, PartialEq)]
pub enum AlphabetError {
    #[error("expected a list of single characters, found {0:?}")]
    MultiCharacterSymbol(String),
}

/// Full-string membership check over a fixed character set.
///
/// A string is valid when it is non-empty and every character is in the
/// set. Validators never change after construction, so one instance can be
/// shared by any number of callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Validator {
    charset: FxHashSet<char>,
}

impl Validator {
    /// Build a validator from a string where each character is one symbol.
    pub fn new(alphabet: &str, case_sensitive: bool) -> Self {
        Self::from_chars(alphabet.chars(), case_sensitive)
    }

    /// Build a validator from a list of symbols. Every entry must be exactly
    /// one character long.
    pub fn from_symbols<S: AsRef<str>>(
        symbols: &[S],
        case_sensitive: bool,
    ) -> Result<Self, AlphabetError> {
        let mut chars = Vec::with_capacity(symbols.len());
        for s in symbols {
            let mut it = s.as_ref().chars();
            match (it.next(), it.next()) {
                (Some(c), None) => chars.push(c),
                _ => {
                    return Err(AlphabetError::MultiCharacterSymbol(
                        s.as_ref().to_string(),
                    ))
                }
            }
        }
        Ok(Self::from_chars(chars, case_sensitive))
    }

    pub fn from_chars<I>(chars: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut charset = FxHashSet::default();
        for c in chars {
            if case_sensitive {
                charset.insert(c);
            } else {
                charset.extend(c.to_uppercase());
                charset.extend(c.to_lowercase());
            }
        }
        Validator { charset }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.charset.contains(&c)
    }

    /// True if `s` is non-empty and made only of alphabet characters.
    pub fn is_valid(&self, s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| self.contains(c))
    }

    /// Position (0-based, in characters) and value of the first character
    /// outside the alphabet.
    pub fn first_invalid(&self, s: &str) -> Option<(usize, char)> {
        s.chars().enumerate().find(|(_, c)| !self.contains(*c))
    }

    /// The accepted characters, sorted.
    pub fn alphabet(&self) -> Vec<char> {
        let mut v: Vec<char> = self.charset.iter().copied().collect();
        v.sort_unstable();
        v
    }
}

lazy_static! {
    static ref DNA_BASES_VALIDATOR: Validator = Validator::from_chars(DNA_BASES, true);
    static ref DNA_CHARACTERS_VALIDATOR: Validator = Validator::from_chars(DNA_CHARACTERS, true);
    static ref RNA_BASES_VALIDATOR: Validator = Validator::from_chars(RNA_BASES, true);
    static ref AMINO_ACIDS_VALIDATOR: Validator =
        Validator::from_chars(AA_CODES.iter().map(|(c, _)| *c), true);
    static ref AMINO_ACIDS_ALL_VALIDATOR: Validator = Validator::from_chars(
        AA_CODES.iter().chain(AA_AMBIGUITY.iter()).map(|(c, _)| *c),
        true
    );
}

/// `ACGT`
pub fn dna_bases_validator() -> &'static Validator {
    &DNA_BASES_VALIDATOR
}

/// `ACGT` plus the IUPAC ambiguity characters.
pub fn dna_characters_validator() -> &'static Validator {
    &DNA_CHARACTERS_VALIDATOR
}

/// `ACGU`
pub fn rna_bases_validator() -> &'static Validator {
    &RNA_BASES_VALIDATOR
}

/// The 20 standard amino acids and `*`.
pub fn amino_acids_validator() -> &'static Validator {
    &AMINO_ACIDS_VALIDATOR
}

/// Amino acids, `*`, and the `B`/`Z`/`X` ambiguity codes.
pub fn amino_acids_all_validator() -> &'static Validator {
    &AMINO_ACIDS_ALL_VALIDATOR
}
