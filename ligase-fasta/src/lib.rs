use std::fmt::Display;
use thiserror::Error;

pub mod parser;
pub mod reader;
pub mod writer;

pub use reader::FastaReader;
pub use writer::{write_record, write_record_with_width, FastaWriter, DEFAULT_WIDTH};

#[derive(Error, Debug)]
pub enum FastaError {
    #[error("header is empty after removing whitespace")]
    EmptyHeader,
    #[error("sequence is empty after removing whitespace")]
    EmptySequence,
    #[error("line width must be at least 1")]
    InvalidWidth,
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// A header and its sequence. The header has its `>` marker removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    header: String,
    seq: String,
}

impl Record {
    pub fn new(header: impl Into<String>, seq: impl Into<String>) -> Self {
        Record {
            header: header.into(),
            seq: seq.into(),
        }
    }

    pub fn header(&self) -> &str {
        self.header.as_ref()
    }

    pub fn seq(&self) -> &str {
        self.seq.as_ref()
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn into_parts(self) -> (String, String) {
        (self.header, self.seq)
    }
}

impl From<Record> for (String, String) {
    fn from(r: Record) -> Self {
        r.into_parts()
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, ">{}", self.header)?;
        write!(f, "{}", self.seq)
    }
}
