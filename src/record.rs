use crate::encoding::{decode_nucleotide, encode_nucleotide};
use crate::error::{CodecError, Result};

/// One FASTA sequence entry.
///
/// The sequence bytes hold either raw ASCII symbols or packed bit-mask codes
/// depending on the codec state; [`FastaRecord::is_encoded`] reports which.
/// The `count_*` and `score` fields are summary slots for downstream
/// consumers; nothing in this crate writes them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// First whitespace-delimited token of the header line
    pub id: String,

    /// Full header line content after the leading `>`, unsplit
    pub description: String,

    /// Sequence bytes; raw symbols or bit-mask codes per the codec state
    pub seq: Vec<u8>,

    /// Caller-populated adenine count
    pub count_a: usize,

    /// Caller-populated thymine count
    pub count_t: usize,

    /// Caller-populated guanine count
    pub count_g: usize,

    /// Caller-populated cytosine count
    pub count_c: usize,

    /// Caller-populated score, e.g. genome completeness
    pub score: i64,

    /// Zero-based position in the source file, assigned by the streaming
    /// path only; zero for bulk loading
    pub idx: usize,

    encoded: bool,
}

impl FastaRecord {
    /// Creates a raw (decoded) record with the given header fields
    #[must_use]
    pub fn new(id: String, description: String) -> Self {
        Self {
            id,
            description,
            ..Self::default()
        }
    }

    /// Encodes the sequence in place, replacing each symbol by its bit-mask
    /// code.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::AlreadyEncoded`] if the record is already in
    /// encoded form, and [`CodecError::InvalidNucleotide`] if any sequence
    /// byte falls outside the IUPAC alphabet. The sequence is only mutated
    /// once it has validated in full, so a failed encode leaves the record
    /// unchanged.
    pub fn encode(&mut self) -> Result<()> {
        if self.encoded {
            return Err(CodecError::AlreadyEncoded.into());
        }
        if let Some(&bad) = self.seq.iter().find(|&&nuc| encode_nucleotide(nuc) == 0) {
            return Err(CodecError::InvalidNucleotide(char::from(bad)).into());
        }
        for nuc in &mut self.seq {
            *nuc = encode_nucleotide(*nuc);
        }
        self.encoded = true;
        Ok(())
    }

    /// Decodes the sequence in place, replacing each bit-mask code by its
    /// canonical uppercase symbol.
    ///
    /// Codes outside the reserved set decode to 0; they are carried through
    /// without validation.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::AlreadyDecoded`] if the record is not in
    /// encoded form.
    pub fn decode(&mut self) -> Result<()> {
        if !self.encoded {
            return Err(CodecError::AlreadyDecoded.into());
        }
        for nuc in &mut self.seq {
            *nuc = decode_nucleotide(*nuc);
        }
        self.encoded = false;
        Ok(())
    }

    /// Returns true if the sequence currently holds bit-mask codes
    #[must_use]
    pub fn is_encoded(&self) -> bool {
        self.encoded
    }

    /// Returns the sequence width in columns
    #[must_use]
    pub fn width(&self) -> usize {
        self.seq.len()
    }

    /// Returns true if the record carries no sequence data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::error::Error;
    use anyhow::Result;

    fn record(seq: &[u8]) -> FastaRecord {
        FastaRecord {
            id: "s1".to_string(),
            description: "s1 test".to_string(),
            seq: seq.to_vec(),
            ..FastaRecord::default()
        }
    }

    #[test]
    fn test_encode_decode_round_trip() -> Result<()> {
        let mut rec = record(b"ACGTRMWSKYVHDBN-?");
        rec.encode()?;
        assert!(rec.is_encoded());
        assert_ne!(rec.seq, b"ACGTRMWSKYVHDBN-?");

        rec.decode()?;
        assert!(!rec.is_encoded());
        assert_eq!(rec.seq, b"ACGTRMWSKYVHDBN-?");
        Ok(())
    }

    #[test]
    fn test_round_trip_uppercases() -> Result<()> {
        let mut rec = record(b"acgtn-");
        rec.encode()?;
        rec.decode()?;
        assert_eq!(rec.seq, b"ACGTN-");
        Ok(())
    }

    #[test]
    fn test_invalid_nucleotide_leaves_record_untouched() {
        let mut rec = record(b"ACXGT");
        let err = rec.encode().unwrap_err();
        assert!(matches!(
            err,
            Error::CodecError(CodecError::InvalidNucleotide('X'))
        ));
        assert!(!rec.is_encoded());
        assert_eq!(rec.seq, b"ACXGT");
    }

    #[test]
    fn test_double_encode_is_contract_error() -> Result<()> {
        let mut rec = record(b"ACGT");
        rec.encode()?;
        assert!(matches!(
            rec.encode().unwrap_err(),
            Error::CodecError(CodecError::AlreadyEncoded)
        ));
        Ok(())
    }

    #[test]
    fn test_double_decode_is_contract_error() {
        let mut rec = record(b"ACGT");
        assert!(matches!(
            rec.decode().unwrap_err(),
            Error::CodecError(CodecError::AlreadyDecoded)
        ));
    }

    #[test]
    fn test_empty_sequence_encodes() -> Result<()> {
        let mut rec = record(b"");
        rec.encode()?;
        assert!(rec.is_encoded());
        assert_eq!(rec.width(), 0);
        assert!(rec.is_empty());
        Ok(())
    }
}
