use thiserror::Error;

pub mod paired;
pub mod parser;
pub mod read;
pub mod reader;

pub use paired::PairedReader;
pub use read::{FastqRead, DEFAULT_QUALITY_OFFSET, MAX_QUALITY};
pub use reader::FastqReader;

#[derive(Error, Debug)]
pub enum FastqError {
    #[error("unexpected value for FASTQ header: {0:?}")]
    MissingId(String),
    #[error("unexpected value for FASTQ secondary header: {0:?}")]
    MissingSecondaryId(String),
    #[error("unequal number of quality values and bases ({seq} bases, {qual} quality values)")]
    SeqQualMismatch { seq: usize, qual: usize },
    #[error("unexpected character {base:?} in sequence at position {position}")]
    InvalidBase { position: usize, base: char },
    #[error("sequence quality value {value} at position {position} is outside 0-93")]
    QualityOutOfRange { position: usize, value: i64 },
    #[error("read has no bases")]
    EmptyRead,
    #[error("invalid trimming parameters: {0}")]
    InvalidTrim(&'static str),
    #[error("incomplete FASTQ record starting at line {line}")]
    IncompleteRecord { line: usize },
    #[error("paired files have different numbers of records (one ends after {pairs} pairs)")]
    MismatchedLength { pairs: usize },
    #[error("paired read headers do not match: {fwd:?} and {rev:?}")]
    HeaderMismatch { fwd: String, rev: String },
    #[error("io error")]
    IoError(#[from] std::io::Error),
}
