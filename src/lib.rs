//! # alnseq
//!
//! FASTA alignment parsing with reversible bit-mask nucleotide encoding.
//!
//! Each record's sequence is compressed in place to one bit-mask byte per
//! symbol, covering the full IUPAC nucleotide alphabet (including ambiguity
//! codes, the gap `-`, and the unknown `?`). Records can be consumed three
//! ways:
//!
//! - one at a time through [`FastaReader`],
//! - bulk-loaded into a width-checked alignment with [`load_alignment`],
//! - streamed record-by-record to a consumer thread with [`spawn_stream`].
//!
//! ## Loading
//!
//! ```
//! use alnseq::{load_alignment, Result};
//!
//! fn main() -> Result<()> {
//!     let fasta = b">s1 first\nACGT\n>s2 second\nAC-N\n";
//!     let mut records = load_alignment(&fasta[..])?;
//!
//!     assert_eq!(records.len(), 2);
//!     assert!(records[0].is_encoded());
//!
//!     records[0].decode()?;
//!     assert_eq!(records[0].seq, b"ACGT");
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming
//!
//! The streaming path hands each encoded record through a rendezvous
//! channel as soon as it is parsed, so the producer stays at most one
//! record ahead of the consumer:
//!
//! ```
//! let stream = alnseq::spawn_stream(&b">s1\nACGT\n>s2\nTTAA\n"[..]);
//!
//! for record in stream.records.iter() {
//!     assert_eq!(record.width(), 4);
//! }
//! assert!(stream.done.recv().is_ok());
//! ```

mod alignment;
mod encoding;
mod error;
mod reader;
mod record;
mod stream;

pub use alignment::{load_alignment, load_alignment_from_path};
pub use encoding::{
    decode_nucleotide, encode_nucleotide, is_valid_nucleotide, DECODING_TABLE, ENCODING_TABLE,
};
pub use error::{AlignmentError, CodecError, Error, ParseError, Result};
pub use reader::FastaReader;
pub use record::FastaRecord;
pub use stream::{spawn_stream, stream_alignment, AlignmentStream};
