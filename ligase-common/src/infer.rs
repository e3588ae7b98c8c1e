//! Sequence type inference on top of the shared validators.

use std::fmt::{self, Display};

use crate::validator::{
    amino_acids_all_validator, amino_acids_validator, dna_bases_validator,
    dna_characters_validator, rna_bases_validator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceType {
    Dna,
    /// DNA with ambiguity characters
    DnaIupac,
    Rna,
    Protein,
    /// protein with ambiguity codes
    ProteinIupac,
}

impl Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceType::Dna => write!(f, "dna"),
            SequenceType::DnaIupac => write!(f, "dna-iupac"),
            SequenceType::Rna => write!(f, "rna"),
            SequenceType::Protein => write!(f, "protein"),
            SequenceType::ProteinIupac => write!(f, "protein-iupac"),
        }
    }
}

/// First type that validates, checked in the order DNA, DNA with
/// ambiguity, RNA, protein, protein with ambiguity.
///
/// With `report_iupac` off the IUPAC variants are reported as their plain
/// type.
pub fn infer_sequence_type(seq: &str, report_iupac: bool) -> Option<SequenceType> {
    if dna_bases_validator().is_valid(seq) {
        Some(SequenceType::Dna)
    } else if dna_characters_validator().is_valid(seq) {
        Some(if report_iupac {
            SequenceType::DnaIupac
        } else {
            SequenceType::Dna
        })
    } else if rna_bases_validator().is_valid(seq) {
        Some(SequenceType::Rna)
    } else if amino_acids_validator().is_valid(seq) {
        Some(SequenceType::Protein)
    } else if amino_acids_all_validator().is_valid(seq) {
        Some(if report_iupac {
            SequenceType::ProteinIupac
        } else {
            SequenceType::Protein
        })
    } else {
        None
    }
}

/// Every type the sequence validates as, in the same priority order.
pub fn infer_all_sequence_types(seq: &str, report_iupac: bool) -> Option<Vec<SequenceType>> {
    let mut valid = Vec::new();

    if dna_bases_validator().is_valid(seq) {
        valid.push(SequenceType::Dna);
        if report_iupac {
            valid.push(SequenceType::DnaIupac);
        }
    } else if dna_characters_validator().is_valid(seq) {
        valid.push(if report_iupac {
            SequenceType::DnaIupac
        } else {
            SequenceType::Dna
        });
    }

    if rna_bases_validator().is_valid(seq) {
        valid.push(SequenceType::Rna);
    }

    if amino_acids_validator().is_valid(seq) {
        valid.push(SequenceType::Protein);
        if report_iupac {
            valid.push(SequenceType::ProteinIupac);
        }
    } else if amino_acids_all_validator().is_valid(seq) {
        valid.push(if report_iupac {
            SequenceType::ProteinIupac
        } else {
            SequenceType::Protein
        });
    }

    if valid.is_empty() {
        None
    } else {
        Some(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceType::*;
    use super::*;

    #[test]
    fn infer_priority() {
        assert_eq!(infer_sequence_type("ACGT", true), Some(Dna));
        assert_eq!(infer_sequence_type("ACGTN", true), Some(DnaIupac));
        assert_eq!(infer_sequence_type("ACGTN", false), Some(Dna));
        assert_eq!(infer_sequence_type("ACGU", true), Some(Rna));
        assert_eq!(infer_sequence_type("MKLF*", true), Some(Protein));
        assert_eq!(infer_sequence_type("MKLFX", true), Some(ProteinIupac));
        assert_eq!(infer_sequence_type("MKLFX", false), Some(Protein));
        assert_eq!(infer_sequence_type("ACGT1", true), None);
        assert_eq!(infer_sequence_type("", true), None);
    }

    #[test]
    fn infer_all() {
        // ACG is valid DNA, RNA and protein
        assert_eq!(
            infer_all_sequence_types("ACG", true),
            Some(vec![Dna, DnaIupac, Rna, Protein, ProteinIupac])
        );
        assert_eq!(
            infer_all_sequence_types("ACG", false),
            Some(vec![Dna, Rna, Protein])
        );
        assert_eq!(
            infer_all_sequence_types("ACGN", true),
            Some(vec![DnaIupac, Protein, ProteinIupac])
        );
        assert_eq!(infer_all_sequence_types("ACGU", false), Some(vec![Rna]));
        assert_eq!(infer_all_sequence_types("123", true), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(DnaIupac.to_string(), "dna-iupac");
        assert_eq!(ProteinIupac.to_string(), "protein-iupac");
    }
}
