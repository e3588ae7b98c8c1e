//! Lock-step reading of paired FASTQ files.
//!
//! Both readers advance exactly once per pair. A pair is accepted only
//! when both headers share the same read identifier; the mate annotation
//! after the first whitespace is ignored.

use std::io::BufRead;

use crate::reader::{FastqReader, FastqReaderState};
use crate::{FastqError, FastqRead};

pub struct PairedReader<A, B> {
    fwd: FastqReader<A>,
    rev: FastqReader<B>,
    reverse_complement_rev: bool,
    state: FastqReaderState,
    pairs: usize,
}

impl<A, B> PairedReader<A, B>
where
    A: BufRead,
    B: BufRead,
{
    pub fn new(fwd: A, rev: B) -> Self {
        Self::from_readers(FastqReader::new(fwd), FastqReader::new(rev), false)
    }

    /// Pairs whose second read is reverse-complemented before it is
    /// returned.
    pub fn with_reverse_complement(fwd: A, rev: B) -> Self {
        Self::from_readers(FastqReader::new(fwd), FastqReader::new(rev), true)
    }

    pub fn from_readers(
        fwd: FastqReader<A>,
        rev: FastqReader<B>,
        reverse_complement_rev: bool,
    ) -> Self {
        PairedReader {
            fwd,
            rev,
            reverse_complement_rev,
            state: FastqReaderState::Reading,
            pairs: 0,
        }
    }

    pub fn state(&self) -> FastqReaderState {
        self.state
    }

    /// Number of pairs produced so far.
    pub fn records_read(&self) -> usize {
        self.pairs
    }

    fn fail(&mut self, e: FastqError) -> Option<Result<(FastqRead, FastqRead), FastqError>> {
        self.state = FastqReaderState::Failed;
        Some(Err(e))
    }

    pub fn read_pair(&mut self) -> Option<Result<(FastqRead, FastqRead), FastqError>> {
        if self.state != FastqReaderState::Reading {
            return None;
        }
        match (self.fwd.next(), self.rev.next()) {
            (None, None) => {
                self.state = FastqReaderState::Complete;
                None
            }
            (Some(Err(e)), _) | (_, Some(Err(e))) => self.fail(e),
            (Some(Ok(_)), None) | (None, Some(Ok(_))) => {
                let pairs = self.pairs;
                self.fail(FastqError::MismatchedLength { pairs })
            }
            (Some(Ok(fwd)), Some(Ok(mut rev))) => {
                if fwd.read_id() != rev.read_id() {
                    return self.fail(FastqError::HeaderMismatch {
                        fwd: fwd.header().to_string(),
                        rev: rev.header().to_string(),
                    });
                }
                if self.reverse_complement_rev {
                    rev.reverse_complement();
                }
                self.pairs += 1;
                Some(Ok((fwd, rev)))
            }
        }
    }
}

impl<A, B> Iterator for PairedReader<A, B>
where
    A: BufRead,
    B: BufRead,
{
    type Item = Result<(FastqRead, FastqRead), FastqError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_pair()
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

    fn open(s: &str) -> BufReader<File> {
        BufReader::new(File::open(init_path(s)).unwrap())
    }

    const FWD: &str = "@read1 1:N:0:ATCACG\nAAGNCT\n+\n!~ABCD\n";
    const REV: &str = "@read1 2:N:0:ATCACG\nGGTACA\n+\nABCDEF\n";

    #[test]
    fn test_single_pair() {
        let mut paired = PairedReader::new(Cursor::new(FWD), Cursor::new(REV));
        let (fwd, rev) = paired.next().unwrap().unwrap();
        assert_eq!(fwd.sequence(), "AAGNCT");
        assert_eq!(rev.sequence(), "GGTACA");
        assert!(paired.next().is_none());
        assert_eq!(paired.records_read(), 1);
        assert_eq!(paired.state(), FastqReaderState::Complete);
    }

    #[test]
    fn test_reverse_complement_second_mate() {
        let mut paired = PairedReader::with_reverse_complement(Cursor::new(FWD), Cursor::new(REV));
        let (fwd, rev) = paired.next().unwrap().unwrap();
        assert_eq!(fwd.sequence(), "AAGNCT");
        assert_eq!(rev.sequence(), "TGTACC");
        assert_eq!(rev.quality(), &[37, 36, 35, 34, 33, 32]);
    }

    #[test]
    fn test_header_mismatch() {
        let rev = "@read2 2:N:0:ATCACG\nGGTACC\n+\nABCDEF\n";
        let mut paired = PairedReader::new(Cursor::new(FWD), Cursor::new(rev));
        assert!(matches!(
            paired.next(),
            Some(Err(FastqError::HeaderMismatch { .. }))
        ));
        assert!(paired.next().is_none());
    }

    #[test]
    fn test_length_mismatch() {
        let mut paired = PairedReader::new(Cursor::new(FWD), Cursor::new(""));
        assert!(matches!(
            paired.next(),
            Some(Err(FastqError::MismatchedLength { pairs: 0 }))
        ));

        let mut paired = PairedReader::new(Cursor::new(""), Cursor::new(REV));
        assert!(matches!(
            paired.next(),
            Some(Err(FastqError::MismatchedLength { pairs: 0 }))
        ));
    }

    #[test]
    fn test_errors_from_either_side() {
        let mut paired = PairedReader::new(Cursor::new(FWD), Cursor::new("@read1\nAC"));
        assert!(matches!(
            paired.next(),
            Some(Err(FastqError::IncompleteRecord { line: 1 }))
        ));
        assert!(paired.next().is_none());
    }

    #[test]
    fn test_read_paired_files() {
        let paired = PairedReader::new(open("test_R1.fastq"), open("test_R2.fastq"));
        let pairs: Vec<(FastqRead, FastqRead)> = paired.map(|p| p.unwrap()).collect();
        assert_eq!(pairs.len(), 3);
        for (i, (fwd, rev)) in pairs.iter().enumerate() {
            assert_eq!(fwd.read_id(), format!("read{}", i + 1));
            assert_eq!(fwd.read_id(), rev.read_id());
            assert_ne!(fwd.header(), rev.header());
        }
    }

    #[test]
    fn test_short_mate_file() {
        let mut paired = PairedReader::new(open("test_R1.fastq"), open("test_R2_short.fastq"));
        assert!(paired.next().unwrap().is_ok());
        assert!(paired.next().unwrap().is_ok());
        assert!(matches!(
            paired.next(),
            Some(Err(FastqError::MismatchedLength { pairs: 2 }))
        ));
        assert!(paired.next().is_none());
    }

    #[test]
    fn test_swapped_mate_file() {
        let mut paired = PairedReader::new(open("test_R1.fastq"), open("test_R2_swapped.fastq"));
        assert!(paired.next().unwrap().is_ok());
        match paired.next() {
            Some(Err(FastqError::HeaderMismatch { fwd, rev })) => {
                assert_eq!(fwd, "@read2 1:N:0:ATCACG");
                assert_eq!(rev, "@read9 2:N:0:ATCACG");
            }
            other => panic!("expected HeaderMismatch, got {:?}", other),
        }
    }
}
