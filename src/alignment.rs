use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{AlignmentError, Result};
use crate::{FastaRecord, FastaReader};

/// Loads an entire FASTA alignment into memory.
///
/// Every record is encoded as soon as it is parsed. The first record fixes
/// the alignment width; any later record with a different width fails the
/// whole load. Records come back in file order. An empty input loads as an
/// empty alignment.
///
/// # Errors
///
/// Returns an error on malformed input, an invalid nucleotide symbol, an
/// underlying I/O failure, or sequences of differing widths. No partial
/// result is returned.
pub fn load_alignment<R: BufRead>(input: R) -> Result<Vec<FastaRecord>> {
    let mut reader = FastaReader::new(input);
    let mut records = Vec::new();
    let mut width = None;

    while let Some(record) = reader.next_record() {
        let mut record = record?;
        record.encode()?;

        match width {
            None => width = Some(record.width()),
            Some(expected) if record.width() != expected => {
                return Err(AlignmentError::DifferentWidths {
                    expected,
                    got: record.width(),
                }
                .into());
            }
            Some(_) => {}
        }

        records.push(record);
    }

    Ok(records)
}

/// Loads a FASTA alignment from a file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, plus every failure mode
/// of [`load_alignment`].
pub fn load_alignment_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>> {
    let input = File::open(path).map(BufReader::new)?;
    load_alignment(input)
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::error::{CodecError, Error, ParseError};
    use anyhow::Result;
    use std::io::Write;

    #[test]
    fn test_load_two_record_alignment() -> Result<()> {
        let mut records = load_alignment(&b">s1 desc\nACGT\n>s2\nAC-N\n"[..])?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "s1");
        assert_eq!(records[1].id, "s2");
        assert!(records.iter().all(|r| r.is_encoded() && r.width() == 4));
        // bulk loading leaves idx unset
        assert!(records.iter().all(|r| r.idx == 0));

        records[0].decode()?;
        records[1].decode()?;
        assert_eq!(records[0].seq, b"ACGT");
        assert_eq!(records[1].seq, b"AC-N");
        Ok(())
    }

    #[test]
    fn test_differing_widths() {
        let err = load_alignment(&b">a\nACGT\n>b\nAC\n"[..]).unwrap_err();
        assert!(matches!(
            err,
            Error::AlignmentError(AlignmentError::DifferentWidths {
                expected: 4,
                got: 2,
            })
        ));
    }

    #[test]
    fn test_malformed_input() {
        let err = load_alignment(&b"ACGT\n"[..]).unwrap_err();
        assert!(matches!(err, Error::ParseError(ParseError::MissingMarker)));
    }

    #[test]
    fn test_invalid_nucleotide() {
        let err = load_alignment(&b">a\nAC!T\n"[..]).unwrap_err();
        assert!(matches!(
            err,
            Error::CodecError(CodecError::InvalidNucleotide('!'))
        ));
    }

    #[test]
    fn test_empty_input_loads_empty_alignment() -> Result<()> {
        let records = load_alignment(&b""[..])?;
        assert!(records.is_empty());
        Ok(())
    }

    #[test]
    fn test_multiline_records_width_checked_after_folding() -> Result<()> {
        // each record is 8 columns once its lines are folded
        let records = load_alignment(&b">a\nACGT\nACGT\n>b\nTTAATTAA\n"[..])?;
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.width() == 8));
        Ok(())
    }

    #[test]
    fn test_load_from_path() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b">s1\nACGT\n>s2\nTTAA\n")?;

        let records = load_alignment_from_path(file.path())?;
        assert_eq!(records.len(), 2);
        Ok(())
    }
}
