/// Custom Result type for alnseq operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the alnseq library, encompassing all possible error cases
/// that can occur while parsing, encoding, or streaming FASTA alignments.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum Error {
    /// Errors raised while parsing FASTA text into records
    ParseError(#[from] ParseError),
    /// Errors raised while encoding or decoding record sequences
    CodecError(#[from] CodecError),
    /// Errors raised while assembling records into an alignment
    AlignmentError(#[from] AlignmentError),
    /// Standard I/O errors from the Rust standard library
    IoError(#[from] std::io::Error),
    /// UTF-8 errors from header lines that are not valid text
    Utf8Error(#[from] std::str::Utf8Error),
    /// Generic errors that can occur in any part of the system
    AnyhowError(#[from] anyhow::Error),
}

/// Errors specific to parsing FASTA text into records.
///
/// These are data errors describing a malformed input stream, never a misuse
/// of the library. A clean end of stream between records is not an error and
/// is reported as `None` by the reader instead.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// A record header was expected but the line does not begin with `>`
    ///
    /// Also covers an empty line in header position.
    #[error("Badly formed FASTA: record header does not begin with '>'")]
    MissingMarker,

    /// The header line carries no identifier token after the `>` marker
    #[error("Badly formed FASTA: header line has no identifier")]
    EmptyHeader,

    /// The stream ended in the middle of a header line
    ///
    /// A well-formed file never ends while a record header is expected, so a
    /// partial header is reported rather than silently dropped.
    #[error("Unexpected end of stream inside a record header")]
    TruncatedHeader,
}

/// Errors raised by the record codec.
///
/// `AlreadyEncoded` and `AlreadyDecoded` are contract violations: a
/// well-behaved caller never encodes an encoded record or decodes a decoded
/// one. `InvalidNucleotide` is a data error reporting a symbol outside the
/// IUPAC alphabet.
#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    /// Attempted to encode a record whose sequence is already encoded
    #[error("Record is already encoded")]
    AlreadyEncoded,

    /// Attempted to decode a record whose sequence is already decoded
    #[error("Record is already decoded")]
    AlreadyDecoded,

    /// The sequence contains a symbol outside the IUPAC nucleotide alphabet
    ///
    /// # Arguments
    /// * `char` - The offending symbol
    #[error("Invalid nucleotide in sequence: {0:?}")]
    InvalidNucleotide(char),
}

/// Errors raised while assembling parsed records into an alignment
#[derive(thiserror::Error, Debug)]
pub enum AlignmentError {
    /// A record's sequence width differs from the width established by the
    /// first record of the alignment
    ///
    /// # Fields
    /// * `expected` - The column count established by the first record
    /// * `got` - The width of the offending record
    #[error("Different width sequences in alignment: expected {expected}, got {got}")]
    DifferentWidths { expected: usize, got: usize },
}
