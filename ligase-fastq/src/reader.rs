use std::io::BufRead;

use crate::parser;
use crate::read::DEFAULT_QUALITY_OFFSET;
use crate::{FastqError, FastqRead};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FastqReaderState {
    Reading,
    Complete,
    Failed,
}

/// Streaming reader producing one validated [`FastqRead`] per four lines.
///
/// After yielding an error the reader is finished and returns `None`.
#[derive(Debug)]
pub struct FastqReader<T> {
    state: FastqReaderState,
    inner: T,
    lines: [String; 4],
    quality_offset: u8,
    line: usize,
    records: usize,
}

impl<T> FastqReader<T>
where
    T: BufRead,
{
    pub fn new(f: T) -> Self {
        Self::with_offset(f, DEFAULT_QUALITY_OFFSET)
    }

    /// Reader for quality strings encoded with a non-default offset,
    /// e.g. 64 for old Illumina files.
    pub fn with_offset(f: T, quality_offset: u8) -> Self {
        FastqReader {
            state: FastqReaderState::Reading,
            inner: f,
            lines: Default::default(),
            quality_offset,
            line: 0,
            records: 0,
        }
    }

    pub fn state(&self) -> FastqReaderState {
        self.state
    }

    /// Number of reads produced so far.
    pub fn records_read(&self) -> usize {
        self.records
    }

    #[inline]
    /// FASTQ records are always 4 lines; returns how many were present.
    fn read_lines(&mut self) -> Result<usize, std::io::Error> {
        let mut present = 0;
        for buf in self.lines.iter_mut() {
            buf.clear();
            if self.inner.read_line(buf)? > 0 {
                present += 1;
            }
        }
        Ok(present)
    }

    fn fail(&mut self, e: FastqError) -> Option<Result<FastqRead, FastqError>> {
        self.state = FastqReaderState::Failed;
        Some(Err(e))
    }

    pub fn read_record(&mut self) -> Option<Result<FastqRead, FastqError>> {
        if self.state != FastqReaderState::Reading {
            return None;
        }
        match self.read_lines() {
            Ok(0) => {
                self.state = FastqReaderState::Complete;
                return None;
            }
            Ok(4) => {}
            Ok(_) => {
                let line = self.line + 1;
                return self.fail(FastqError::IncompleteRecord { line });
            }
            Err(e) => return self.fail(FastqError::IoError(e)),
        }

        let [header, sequence, header2, quality] = &self.lines;
        let read = FastqRead::with_offset(
            parser::strip_line_ending(header),
            parser::strip_line_ending(sequence),
            parser::strip_line_ending(header2),
            parser::strip_line_ending(quality),
            self.quality_offset,
        );
        self.line += 4;
        match read {
            Ok(read) => {
                self.records += 1;
                Some(Ok(read))
            }
            Err(e) => self.fail(e),
        }
    }
}

impl<T> Iterator for FastqReader<T>
where
    T: BufRead,
{
    type Item = Result<FastqRead, FastqError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::fs::File;
    use std::io::{BufReader, Cursor};
    use std::path::PathBuf;

    fn init_path(s: &str) -> PathBuf {
        let mut test_data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_data_dir.push("../resources/test_data");
        test_data_dir.push(s);
        test_data_dir
    }

    fn open(s: &str) -> FastqReader<BufReader<File>> {
        FastqReader::new(BufReader::new(File::open(init_path(s)).unwrap()))
    }

    #[test]
    fn test_empty() {
        let mut reader = FastqReader::new(Cursor::new(""));
        assert!(reader.next().is_none());
        assert_eq!(reader.state(), FastqReaderState::Complete);
    }

    #[test]
    fn test_single() {
        let mut reader = FastqReader::new(Cursor::new("@TEST:123:456 AAA\nAAGNCT\n+\n!~ABCD\n"));
        let read = reader.next().unwrap().unwrap();
        assert_eq!(read.header(), "@TEST:123:456 AAA");
        assert_eq!(read.sequence(), "AAGNCT");
        assert_eq!(read.header2(), "+");
        assert_eq!(read.quality(), &[0, 93, 32, 33, 34, 35]);
        assert!(reader.next().is_none());
        assert_eq!(reader.records_read(), 1);
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let mut reader = FastqReader::new(Cursor::new("@r1\r\nACGT\r\n+\r\nIIII\r\n@r2\nTT\n+\nII"));
        assert_eq!(reader.next().unwrap().unwrap().sequence(), "ACGT");
        assert_eq!(reader.next().unwrap().unwrap().sequence(), "TT");
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_truncated() {
        let mut reader = FastqReader::new(Cursor::new("@TEST:123:456 AAA\nAAGN"));
        assert!(matches!(
            reader.next(),
            Some(Err(FastqError::IncompleteRecord { line: 1 }))
        ));
        assert!(reader.next().is_none());
        assert_eq!(reader.state(), FastqReaderState::Failed);
    }

    #[test]
    fn test_with_offset() {
        let mut reader = FastqReader::with_offset(Cursor::new("@r\nACGT\n+\n@AIh\n"), 64);
        assert_eq!(reader.next().unwrap().unwrap().quality(), &[0, 1, 9, 40]);
    }

    #[test]
    fn test_read_fq() {
        let reads: Vec<FastqRead> = open("test.fastq").map(|r| r.unwrap()).collect();
        assert_eq!(reads.len(), 3);
        assert_eq!(reads[0].read_id(), "SRR22092847.1.1");
        assert_eq!(reads[0].header2(), "+SRR22092847.1.1 1 length=37");
        assert_eq!(reads[0].sequence(), "GNTTAAAGCACATAAAGACAAATCGCTCCAGGGCAAA");
        assert_eq!(reads[0].quality_string(), "F#FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
        assert_eq!(reads[1].len(), 40);
    }

    #[test]
    fn test_round_trip() {
        let text = std::fs::read_to_string(init_path("test.fastq")).unwrap();
        let rebuilt: String = FastqReader::new(Cursor::new(text.as_str()))
            .map(|r| r.unwrap().serialize() + "\n")
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_bad_fq_is_recoverable() {
        let mut reader = open("trunc.fastq");
        assert!(reader.next().unwrap().is_ok());
        assert!(matches!(
            reader.next(),
            Some(Err(FastqError::IncompleteRecord { line: 5 }))
        ));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_corrupt_fq_stops_at_error() {
        let mut reader = open("corrupt.fastq");
        assert!(reader.next().unwrap().is_ok());
        assert!(matches!(
            reader.next(),
            Some(Err(FastqError::InvalidBase { position: 1, base: 'X' }))
        ));
        assert!(reader.next().is_none());
    }
}
