//! Codon tables and DNA to protein translation.

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use thiserror::Error;

pub mod ncbi;
pub mod translate;

pub use ncbi::{parse_ncbi_table, parse_ncbi_table_with, GeneticCode, TableMode};
pub use translate::translate_dna;

#[derive(Error, Debug, PartialEq)]
pub enum TranslateError {
    #[error("frame must be 0, 1 or 2, got {0}")]
    InvalidFrame(usize),
    #[error("unrecognized codon '{codon}' at nt position {position}")]
    CodonNotFound { codon: String, position: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("transl_table string must have 5 lines, found {0}")]
    WrongLineCount(usize),
    #[error("transl_table line did not contain '=' separator: {0:?}")]
    MissingSeparator(String),
    #[error("unmatched transl_table row labels: {0:?}")]
    UnmatchedLabels(Vec<String>),
    #[error("transl_table row {label} has {length} characters, expected 64")]
    WrongRowLength { label: String, length: usize },
    #[error("transl_table row {0} contains invalid characters")]
    InvalidRowCharacters(String),
    #[error("transl_table codon {0} appears more than once")]
    DuplicateCodon(String),
    #[error("transl_table is missing codons {0:?}")]
    IncompleteCoverage(Vec<String>),
}

const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// All 64 codons over `ACGT`, in sorted order.
pub fn all_codons() -> impl Iterator<Item = String> {
    BASES.into_iter().flat_map(|a| {
        BASES
            .into_iter()
            .flat_map(move |b| BASES.into_iter().map(move |c| [a, b, c].iter().collect::<String>()))
    })
}

/// Map from codons to single-letter amino acid codes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodonTable {
    inner: FxHashMap<String, char>,
}

impl CodonTable {
    pub fn new() -> Self {
        CodonTable {
            inner: FxHashMap::default(),
        }
    }

    pub fn get(&self, codon: &str) -> Option<char> {
        self.inner.get(codon).copied()
    }

    /// Returns the previous amino acid if the codon was already present.
    pub fn insert(&mut self, codon: impl Into<String>, aa: char) -> Option<char> {
        self.inner.insert(codon.into(), aa)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, char)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Codons over `ACGT` that have no entry.
    pub fn missing_codons(&self) -> Vec<String> {
        all_codons().filter(|c| !self.inner.contains_key(c)).collect()
    }

    /// True if the keys are exactly the 64 codons over `ACGT`.
    pub fn is_complete(&self) -> bool {
        self.inner.len() == 64 && self.missing_codons().is_empty()
    }

    pub fn inner(&self) -> &FxHashMap<String, char> {
        &self.inner
    }
}

impl FromIterator<(String, char)> for CodonTable {
    fn from_iter<I: IntoIterator<Item = (String, char)>>(iter: I) -> Self {
        CodonTable {
            inner: iter.into_iter().collect(),
        }
    }
}

/// The standard genetic code (NCBI transl_table=1), sorted by codon.
pub static STANDARD_CODONS: [(&str, char); 64] = [
    ("AAA", 'K'),
    ("AAC", 'N'),
    ("AAG", 'K'),
    ("AAT", 'N'),
    ("ACA", 'T'),
    ("ACC", 'T'),
    ("ACG", 'T'),
    ("ACT", 'T'),
    ("AGA", 'R'),
    ("AGC", 'S'),
    ("AGG", 'R'),
    ("AGT", 'S'),
    ("ATA", 'I'),
    ("ATC", 'I'),
    ("ATG", 'M'),
    ("ATT", 'I'),
    ("CAA", 'Q'),
    ("CAC", 'H'),
    ("CAG", 'Q'),
    ("CAT", 'H'),
    ("CCA", 'P'),
    ("CCC", 'P'),
    ("CCG", 'P'),
    ("CCT", 'P'),
    ("CGA", 'R'),
    ("CGC", 'R'),
    ("CGG", 'R'),
    ("CGT", 'R'),
    ("CTA", 'L'),
    ("CTC", 'L'),
    ("CTG", 'L'),
    ("CTT", 'L'),
    ("GAA", 'E'),
    ("GAC", 'D'),
    ("GAG", 'E'),
    ("GAT", 'D'),
    ("GCA", 'A'),
    ("GCC", 'A'),
    ("GCG", 'A'),
    ("GCT", 'A'),
    ("GGA", 'G'),
    ("GGC", 'G'),
    ("GGG", 'G'),
    ("GGT", 'G'),
    ("GTA", 'V'),
    ("GTC", 'V'),
    ("GTG", 'V'),
    ("GTT", 'V'),
    ("TAA", '*'),
    ("TAC", 'Y'),
    ("TAG", '*'),
    ("TAT", 'Y'),
    ("TCA", 'S'),
    ("TCC", 'S'),
    ("TCG", 'S'),
    ("TCT", 'S'),
    ("TGA", '*'),
    ("TGC", 'C'),
    ("TGG", 'W'),
    ("TGT", 'C'),
    ("TTA", 'L'),
    ("TTC", 'F'),
    ("TTG", 'L'),
    ("TTT", 'F'),
];

lazy_static! {
    static ref STANDARD_TABLE: CodonTable = STANDARD_CODONS
        .iter()
        .map(|(codon, aa)| (codon.to_string(), *aa))
        .collect();
}

/// Shared instance of the standard genetic code.
pub fn standard_table() -> &'static CodonTable {
    &STANDARD_TABLE
}
