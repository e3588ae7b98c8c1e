use std::io::Write;

use crate::FastaError;

pub const DEFAULT_WIDTH: usize = 60;

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Write one record, wrapping the sequence at `DEFAULT_WIDTH` characters.
pub fn write_record<W: Write>(sink: &mut W, header: &str, sequence: &str) -> Result<(), FastaError> {
    write_record_with_width(sink, header, sequence, DEFAULT_WIDTH)
}

/// Write one record, wrapping the sequence at `width` characters.
///
/// All whitespace is removed from both the header and the sequence first;
/// either one ending up empty is an error and nothing is written.
pub fn write_record_with_width<W: Write>(
    sink: &mut W,
    header: &str,
    sequence: &str,
    width: usize,
) -> Result<(), FastaError> {
    if width == 0 {
        return Err(FastaError::InvalidWidth);
    }
    let header = strip_whitespace(header);
    if header.is_empty() {
        return Err(FastaError::EmptyHeader);
    }
    let sequence: Vec<char> = sequence.chars().filter(|c| !c.is_whitespace()).collect();
    if sequence.is_empty() {
        return Err(FastaError::EmptySequence);
    }

    let mut out = String::with_capacity(header.len() + sequence.len() + sequence.len() / width + 3);
    out.push('>');
    out.push_str(&header);
    out.push('\n');
    for line in sequence.chunks(width) {
        out.extend(line);
        out.push('\n');
    }
    sink.write_all(out.as_bytes())?;
    Ok(())
}

/// Record writer holding its sink and line width.
pub struct FastaWriter<W: Write> {
    inner: W,
    width: usize,
}

impl<W: Write> FastaWriter<W> {
    pub fn new(inner: W) -> Self {
        FastaWriter {
            inner,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn with_width(inner: W, width: usize) -> Result<Self, FastaError> {
        if width == 0 {
            return Err(FastaError::InvalidWidth);
        }
        Ok(FastaWriter { inner, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn write_record(&mut self, header: &str, sequence: &str) -> Result<(), FastaError> {
        write_record_with_width(&mut self.inner, header, sequence, self.width)
    }

    pub fn flush(&mut self) -> Result<(), FastaError> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
