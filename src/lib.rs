//! FASTA/FASTQ parsing, read trimming and DNA translation.
//!
//! The work is split across the `ligase-*` crates; this crate re-exports
//! them and adds helpers for opening plain or gzipped files.

pub mod io;

pub use ligase_common as common;
pub use ligase_fasta as fasta;
pub use ligase_fastq as fastq;
pub use ligase_translate as translate;

pub use ligase_common::{AlphabetError, Validator};
pub use ligase_fasta::{FastaError, FastaReader, FastaWriter};
pub use ligase_fastq::{FastqError, FastqRead, FastqReader, PairedReader};
pub use ligase_translate::{
    parse_ncbi_table, standard_table, translate_dna, CodonTable, GeneticCode, TableError,
    TranslateError,
};
