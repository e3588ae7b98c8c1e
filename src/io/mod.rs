use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;

use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;
#[cfg(unix)]
use memmap2::Advice;
use memmap2::Mmap;

use ligase_fasta::FastaReader;
use ligase_fastq::FastqReader;

const GZB1: u8 = 0x1f;
const GZB2: u8 = 0x8b;
const BZ_MAGIC: &[u8] = b"BZh";

/// UNSAFE
/// memory-map an open file
pub fn to_mmap(f: &File) -> io::Result<Mmap> {
    let mmap = unsafe { Mmap::map(f) }?;
    Ok(mmap)
}

pub fn is_gz(header: &[u8]) -> bool {
    header.len() >= 2 && header[0] == GZB1 && header[1] == GZB2
}

pub fn is_bz2(header: &[u8]) -> bool {
    header.starts_with(BZ_MAGIC)
}

/// Open a file for line reading, decompressing it if it starts with the
/// gzip or bzip2 magic bytes. The file is memory-mapped; on Unix-alikes the kernel
/// is advised of sequential access.
pub fn open_path<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let f = File::open(path)?;
    // zero-length files cannot be mapped everywhere
    if f.metadata()?.len() == 0 {
        return Ok(Box::new(Cursor::new(Vec::new())));
    }
    let m = to_mmap(&f)?;
    #[cfg(unix)]
    m.advise(Advice::Sequential)?;

    if is_gz(&m) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(Cursor::new(m)))))
    } else if is_bz2(&m) {
        Ok(Box::new(BufReader::new(MultiBzDecoder::new(Cursor::new(m)))))
    } else {
        Ok(Box::new(Cursor::new(m)))
    }
}

// extension of the file name, looking through a trailing .gz or .bz2
fn inner_ext(path: &Path) -> Option<String> {
    let path = match path.extension().and_then(|e| e.to_str()) {
        Some(e) if e.eq_ignore_ascii_case("gz") || e.eq_ignore_ascii_case("bz2") => {
            Path::new(path.file_stem()?)
        }
        _ => path,
    };
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// `.fq` or `.fastq`, optionally followed by `.gz` or `.bz2`.
pub fn has_fastq_ext<P: AsRef<Path>>(path: P) -> bool {
    matches!(inner_ext(path.as_ref()).as_deref(), Some("fq" | "fastq"))
}

/// `.fa` or `.fasta`, optionally followed by `.gz` or `.bz2`.
pub fn has_fasta_ext<P: AsRef<Path>>(path: P) -> bool {
    matches!(inner_ext(path.as_ref()).as_deref(), Some("fa" | "fasta"))
}

pub fn fastq_reader<P: AsRef<Path>>(path: P) -> io::Result<FastqReader<Box<dyn BufRead>>> {
    Ok(FastqReader::new(open_path(path)?))
}

pub fn fasta_reader<P: AsRef<Path>>(path: P) -> io::Result<FastaReader<Box<dyn BufRead>>> {
    Ok(FastaReader::new(open_path(path)?))
}
