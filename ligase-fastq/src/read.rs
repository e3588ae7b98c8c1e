use std::fmt::{self, Display};

use lazy_static::lazy_static;
use ligase_common::util::reverse_complement;
use ligase_common::Validator;

use crate::parser;
use crate::FastqError;

pub const DEFAULT_QUALITY_OFFSET: u8 = 33;
pub const MAX_QUALITY: u8 = 93;

lazy_static! {
    static ref READ_BASES: Validator = Validator::new("ACGTN", true);
}

/// A single four-line FASTQ record with decoded quality scores.
///
/// Invariants, checked on construction and kept by every mutating method:
/// the header starts with `@`, the secondary header with `+`, the sequence
/// is a non-empty run of `ACGTN`, and there is exactly one quality score in
/// `0..=93` per base. Mutating methods either succeed completely or leave
/// the read untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct FastqRead {
    header: String,
    sequence: String,
    header2: String,
    quality: Vec<u8>,
    quality_offset: u8,
}

fn check_fields(header: &str, sequence: &str, header2: &str) -> Result<(), FastqError> {
    if !header.starts_with('@') {
        return Err(FastqError::MissingId(header.to_string()));
    }
    if !header2.starts_with('+') {
        return Err(FastqError::MissingSecondaryId(header2.to_string()));
    }
    if sequence.is_empty() {
        return Err(FastqError::EmptyRead);
    }
    if let Some((i, base)) = READ_BASES.first_invalid(sequence) {
        return Err(FastqError::InvalidBase {
            position: i + 1,
            base,
        });
    }
    Ok(())
}

fn decode_quality(quality: &str, offset: u8) -> Result<Vec<u8>, FastqError> {
    quality
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let value = c as u32 as i64 - offset as i64;
            if (0..=MAX_QUALITY as i64).contains(&value) {
                Ok(value as u8)
            } else {
                Err(FastqError::QualityOutOfRange {
                    position: i + 1,
                    value,
                })
            }
        })
        .collect()
}

impl FastqRead {
    /// Build a read from its four lines, decoding quality with offset 33.
    pub fn new(
        header: impl Into<String>,
        sequence: impl Into<String>,
        header2: impl Into<String>,
        quality: &str,
    ) -> Result<Self, FastqError> {
        Self::with_offset(header, sequence, header2, quality, DEFAULT_QUALITY_OFFSET)
    }

    pub fn with_offset(
        header: impl Into<String>,
        sequence: impl Into<String>,
        header2: impl Into<String>,
        quality: &str,
        quality_offset: u8,
    ) -> Result<Self, FastqError> {
        let (header, sequence, header2) = (header.into(), sequence.into(), header2.into());

        let (seq_len, qual_len) = (sequence.chars().count(), quality.chars().count());
        if seq_len != qual_len {
            return Err(FastqError::SeqQualMismatch {
                seq: seq_len,
                qual: qual_len,
            });
        }
        check_fields(&header, &sequence, &header2)?;
        let quality = decode_quality(quality, quality_offset)?;

        Ok(FastqRead {
            header,
            sequence,
            header2,
            quality,
            quality_offset,
        })
    }

    /// Build a read from already-decoded quality scores.
    pub fn from_scores(
        header: impl Into<String>,
        sequence: impl Into<String>,
        header2: impl Into<String>,
        quality: Vec<u8>,
        quality_offset: u8,
    ) -> Result<Self, FastqError> {
        let read = FastqRead {
            header: header.into(),
            sequence: sequence.into(),
            header2: header2.into(),
            quality,
            quality_offset,
        };
        read.valid()?;
        Ok(read)
    }

    /// Check every invariant of the read.
    pub fn valid(&self) -> Result<(), FastqError> {
        if self.sequence.chars().count() != self.quality.len() {
            return Err(FastqError::SeqQualMismatch {
                seq: self.sequence.chars().count(),
                qual: self.quality.len(),
            });
        }
        check_fields(&self.header, &self.sequence, &self.header2)?;
        if let Some((i, &q)) = self.quality.iter().enumerate().find(|&(_, &q)| q > MAX_QUALITY) {
            return Err(FastqError::QualityOutOfRange {
                position: i + 1,
                value: q as i64,
            });
        }
        Ok(())
    }

    pub fn header(&self) -> &str {
        self.header.as_ref()
    }

    pub fn sequence(&self) -> &str {
        self.sequence.as_ref()
    }

    pub fn header2(&self) -> &str {
        self.header2.as_ref()
    }

    pub fn quality(&self) -> &[u8] {
        &self.quality
    }

    pub fn quality_offset(&self) -> u8 {
        self.quality_offset
    }

    /// Identifier shared by both mates of a pair.
    pub fn read_id(&self) -> &str {
        parser::read_id(&self.header)
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always false for a read that passed construction.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Quality scores re-encoded with the read's offset.
    pub fn quality_string(&self) -> String {
        self.quality
            .iter()
            .map(|&q| {
                char::from_u32(q as u32 + self.quality_offset as u32)
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
            })
            .collect()
    }

    /// The four-line record, without a trailing newline.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    pub fn average_quality(&self) -> f64 {
        let total: u64 = self.quality.iter().map(|&q| q as u64).sum();
        total as f64 / self.quality.len() as f64
    }

    pub fn min_quality(&self) -> u8 {
        self.quality.iter().copied().min().unwrap_or_default()
    }

    /// Keep bases `start..=end` (1-indexed). `None` keeps everything from
    /// `start` to the end of the read; an `end` past the read is clamped.
    pub fn trim(&mut self, start: usize, end: Option<usize>) -> Result<(), FastqError> {
        if start < 1 {
            return Err(FastqError::InvalidTrim("start must be at least 1"));
        }
        if start > self.len() {
            return Err(FastqError::InvalidTrim(
                "start must be less than or equal to the read length",
            ));
        }
        if let Some(end) = end {
            if end < start {
                return Err(FastqError::InvalidTrim("end must not be less than start"));
            }
        }
        let stop = end.map_or(self.len(), |end| end.min(self.len()));

        self.sequence.truncate(stop);
        self.sequence.drain(..start - 1);
        self.quality.truncate(stop);
        self.quality.drain(..start - 1);
        Ok(())
    }

    /// Keep `length` bases beginning at `start` (1-indexed).
    pub fn trim_length(&mut self, length: usize, start: usize) -> Result<(), FastqError> {
        if start < 1 {
            return Err(FastqError::InvalidTrim("start must be at least 1"));
        }
        if length < 1 {
            return Err(FastqError::InvalidTrim("length must be at least 1"));
        }
        let end = match start.checked_add(length - 1) {
            Some(end) if end <= self.len() => end,
            _ => return Err(FastqError::InvalidTrim("trim length exceeds read length")),
        };
        self.trim(start, Some(end))
    }

    /// Reverse-complement the sequence and reverse the quality scores to
    /// match.
    pub fn reverse_complement(&mut self) {
        self.sequence = reverse_complement(&self.sequence);
        self.quality.reverse();
    }
}

impl Display for FastqRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f, "{}", self.sequence)?;
        writeln!(f, "{}", self.header2)?;
        write!(f, "{}", self.quality_string())
    }
}
