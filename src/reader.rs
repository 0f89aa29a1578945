use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ParseError, Result};
use crate::FastaRecord;

/// A reader yielding one FASTA record per call from any buffered byte
/// stream.
///
/// Records are returned raw (not yet encoded). The call after the last
/// record returns `None`, the clean end-of-stream signal; end of stream in
/// the middle of a header is an error. Line terminators may be Unix (`\n`)
/// or DOS (`\r\n`) and are stripped.
#[derive(Debug)]
pub struct FastaReader<R> {
    inner: R,
    line: Vec<u8>,
    n_processed: usize,
    finished: bool,
}

impl FastaReader<BufReader<File>> {
    /// Opens a FASTA file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let inner = File::open(path).map(BufReader::new)?;
        Ok(Self::new(inner))
    }
}

impl<R: BufRead> FastaReader<R> {
    /// Creates a reader over any buffered byte stream
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: Vec::new(),
            n_processed: 0,
            finished: false,
        }
    }

    /// Reads the next record from the underlying stream.
    ///
    /// Returns `None` once the stream is cleanly exhausted: the final record
    /// is returned by its own call, and the call after it reports end of
    /// stream. After a terminal error the reader is fused and keeps
    /// returning `None`.
    pub fn next_record(&mut self) -> Option<Result<FastaRecord>> {
        if self.finished {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => {
                self.n_processed += 1;
                Some(Ok(record))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }

    fn read_record(&mut self) -> Result<Option<FastaRecord>> {
        // Header line. Zero bytes here is the clean end-of-stream case: the
        // previous record was the last one in the file.
        self.line.clear();
        if self.inner.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }

        // Bytes arrived but the stream ended before the line terminator: the
        // file ended while a header was expected.
        if self.line.last() != Some(&b'\n') {
            return Err(ParseError::TruncatedHeader.into());
        }
        trim_line_terminator(&mut self.line);

        if self.line.first() != Some(&b'>') {
            return Err(ParseError::MissingMarker.into());
        }

        let header = &self.line[1..];
        let Some(id) = header
            .split(|b| b.is_ascii_whitespace())
            .find(|token| !token.is_empty())
        else {
            return Err(ParseError::EmptyHeader.into());
        };

        let mut record = FastaRecord::new(
            std::str::from_utf8(id)?.to_string(),
            std::str::from_utf8(header)?.to_string(),
        );

        // Sequence body: peek one byte to see whether this record (or the
        // stream) is over before consuming the next line.
        loop {
            let at_boundary = {
                let peek = self.inner.fill_buf()?;
                peek.is_empty() || peek[0] == b'>'
            };
            if at_boundary {
                break;
            }

            // End of stream inside this line is fine: the next peek returns
            // an empty buffer and terminates the loop.
            self.line.clear();
            self.inner.read_until(b'\n', &mut self.line)?;
            trim_line_terminator(&mut self.line);
            record.seq.extend_from_slice(&self.line);
        }

        Ok(Some(record))
    }

    /// Returns the number of records returned so far
    #[must_use]
    pub fn n_processed(&self) -> usize {
        self.n_processed
    }

    /// Returns true once the reader has reported end of stream or an error
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consumes the reader and returns the underlying stream
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

/// Strips a single trailing `\n` or `\r\n` from a line
fn trim_line_terminator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}
