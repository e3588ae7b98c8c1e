use std::io::BufRead;

use crate::parser;
use crate::FastaError;
use crate::Record;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FastaReaderState {
    Reading,
    Complete,
    Failed,
}

/// Streaming reader over header/sequence records.
///
/// Lines before the first header are skipped. Sequence lines are trimmed
/// and concatenated; no character validation happens here. Only the record
/// currently being assembled is held in memory.
pub struct FastaReader<T>
where
    T: BufRead,
{
    state: FastaReaderState,
    inner: T,
    buffer: String,
    header: Option<String>,
    seq: String,
}

impl<T> FastaReader<T>
where
    T: BufRead,
{
    pub fn new(f: T) -> Self {
        FastaReader {
            state: FastaReaderState::Reading,
            inner: f,
            buffer: String::new(),
            header: None,
            seq: String::new(),
        }
    }

    pub fn state(&self) -> FastaReaderState {
        self.state
    }

    #[inline]
    fn take_record(&mut self, header: String) -> Record {
        Record {
            header,
            seq: std::mem::take(&mut self.seq),
        }
    }

    pub fn read_record(&mut self) -> Option<Result<Record, FastaError>> {
        if self.state != FastaReaderState::Reading {
            return None;
        }
        loop {
            self.buffer.clear();
            match self.inner.read_line(&mut self.buffer) {
                Ok(0) => {
                    self.state = FastaReaderState::Complete;
                    let header = self.header.take()?;
                    return Some(Ok(self.take_record(header)));
                }
                Ok(_) => {}
                Err(e) => {
                    self.state = FastaReaderState::Failed;
                    return Some(Err(FastaError::IoError(e)));
                }
            }

            match parser::header(&self.buffer) {
                Ok((_, h)) => {
                    let h = h.to_string();
                    if let Some(prev) = self.header.replace(h) {
                        return Some(Ok(self.take_record(prev)));
                    }
                }
                Err(_) if self.header.is_some() => {
                    self.seq.push_str(parser::sequence_line(&self.buffer));
                }
                Err(_) => {}
            }
        }
    }
}

impl<T> Iterator for FastaReader<T>
where
    T: BufRead,
{
    type Item = Result<Record, FastaError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record()
    }
}
