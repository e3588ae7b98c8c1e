//! Parser for NCBI `transl_table` descriptions.
//!
//! A table is five `label = value` rows in the order `AAs`, `Starts`,
//! `Base1`, `Base2`, `Base3`, each value 64 characters long. Column `i`
//! maps the codon `Base1[i] Base2[i] Base3[i]` to the amino acid `AAs[i]`.
//! Blank lines and lines whose first character is `#` are ignored.

use fxhash::FxHashSet;
use ligase_common::validator::{
    amino_acids_validator, dna_bases_validator, dna_characters_validator,
};
use nom::{
    bytes::complete::take_till, character::complete::char, combinator::all_consuming,
    sequence::separated_pair, IResult,
};

use crate::{CodonTable, TableError};

const ROW_LABELS: [&str; 5] = ["AAs", "Starts", "Base1", "Base2", "Base3"];
const ROW_LENGTH: usize = 64;

/// How strictly the base rows are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableMode {
    /// Base rows are `ACGT` only and the table covers all 64 codons.
    #[default]
    Strict,
    /// Base rows may hold IUPAC ambiguity codes and coverage is not checked.
    Lenient,
}

fn row(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(
        take_till(|c: char| c == '='),
        char('='),
        take_till(|c: char| c == '='),
    ))(input)
}

// comments must start in the first column
fn is_ignored(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('#')
}

/// Parse an NCBI table, requiring full codon coverage.
pub fn parse_ncbi_table(text: &str) -> Result<CodonTable, TableError> {
    parse_ncbi_table_with(text, TableMode::Strict)
}

pub fn parse_ncbi_table_with(text: &str, mode: TableMode) -> Result<CodonTable, TableError> {
    let lines: Vec<&str> = text.lines().filter(|l| !is_ignored(l)).collect();
    if lines.len() != ROW_LABELS.len() {
        return Err(TableError::WrongLineCount(lines.len()));
    }

    let mut rows = Vec::with_capacity(ROW_LABELS.len());
    for line in &lines {
        match row(line) {
            Ok((_, (label, value))) => rows.push((label.trim(), value.trim())),
            Err(_) => return Err(TableError::MissingSeparator(line.to_string())),
        }
    }

    if rows.iter().map(|(label, _)| *label).ne(ROW_LABELS) {
        return Err(TableError::UnmatchedLabels(
            rows.iter().map(|(label, _)| label.to_string()).collect(),
        ));
    }

    for (label, value) in &rows {
        let length = value.chars().count();
        if length != ROW_LENGTH {
            return Err(TableError::WrongRowLength {
                label: label.to_string(),
                length,
            });
        }
    }

    // labels are in fixed order from here on
    let aas = rows[0].1;
    let (base1, base2, base3) = (rows[2].1, rows[3].1, rows[4].1);

    let bases = match mode {
        TableMode::Strict => dna_bases_validator(),
        TableMode::Lenient => dna_characters_validator(),
    };
    for (label, value) in &rows[2..] {
        if !bases.is_valid(value) {
            return Err(TableError::InvalidRowCharacters(label.to_string()));
        }
    }
    if !amino_acids_validator().is_valid(aas) {
        return Err(TableError::InvalidRowCharacters(ROW_LABELS[0].to_string()));
    }

    let mut seen = FxHashSet::default();
    let mut table = CodonTable::new();
    let columns = base1.chars().zip(base2.chars()).zip(base3.chars());
    for (((a, b), c), aa) in columns.zip(aas.chars()) {
        let codon: String = [a, b, c].iter().collect();
        if !seen.insert(codon.clone()) {
            return Err(TableError::DuplicateCodon(codon));
        }
        table.insert(codon, aa);
    }

    if mode == TableMode::Strict && !table.is_complete() {
        return Err(TableError::IncompleteCoverage(table.missing_codons()));
    }
    Ok(table)
}

const BASE_ROWS: &str = "  Base1  = TTTTTTTTTTTTTTTTCCCCCCCCCCCCCCCCAAAAAAAAAAAAAAAAGGGGGGGGGGGGGGGG
  Base2  = TTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGGTTTTCCCCAAAAGGGG
  Base3  = TCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAGTCAG
";

const STANDARD_ROWS: &str = "    AAs  = FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG
  Starts = ---M------**--*----M---------------M----------------------------
";

const VERTEBRATE_MITOCHONDRIAL_ROWS: &str =
    "    AAs  = FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG
  Starts = ----------**--------------------MMMM----------**---M------------
";

const BACTERIAL_PLASTID_ROWS: &str =
    "    AAs  = FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG
  Starts = ---M------**--*----M------------MMMM---------------M------------
";

/// Genetic codes bundled as NCBI text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneticCode {
    Standard,
    VertebrateMitochondrial,
    BacterialPlastid,
}

impl GeneticCode {
    /// NCBI `transl_table` number.
    pub fn id(&self) -> u8 {
        match self {
            GeneticCode::Standard => 1,
            GeneticCode::VertebrateMitochondrial => 2,
            GeneticCode::BacterialPlastid => 11,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(GeneticCode::Standard),
            2 => Some(GeneticCode::VertebrateMitochondrial),
            11 => Some(GeneticCode::BacterialPlastid),
            _ => None,
        }
    }

    pub fn ncbi_text(&self) -> String {
        let rows = match self {
            GeneticCode::Standard => STANDARD_ROWS,
            GeneticCode::VertebrateMitochondrial => VERTEBRATE_MITOCHONDRIAL_ROWS,
            GeneticCode::BacterialPlastid => BACTERIAL_PLASTID_ROWS,
        };
        format!("{rows}{BASE_ROWS}")
    }

    pub fn table(&self) -> Result<CodonTable, TableError> {
        parse_ncbi_table(&self.ncbi_text())
    }
}
