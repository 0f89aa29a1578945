use std::io::BufRead;
use std::sync::mpsc::{channel, sync_channel, Receiver, Sender, SyncSender};
use std::thread::{self, JoinHandle};

use crate::error::{AlignmentError, Error};
use crate::{FastaReader, FastaRecord};

/// Streams an alignment record-by-record to a consumer.
///
/// This is the producer body: it blocks on I/O and on channel sends, so it
/// is meant to run on its own thread ([`spawn_stream`] does the spawning).
/// Records are parsed, encoded, width-checked against the first record, and
/// assigned a zero-based `idx` in file order before being sent.
///
/// The record channel is a rendezvous channel, so each send blocks until
/// the consumer receives: the producer parses at most one record ahead.
/// Exactly one terminal signal is emitted per run: a single `done` send
/// after the last record on success, or a single `errors` send on the first
/// failure, never both. Either way the producer returns and drops its
/// senders, disconnecting all three channels.
///
/// A consumer that wants to abort early just drops its receivers; the
/// failed send stops the producer without a terminal signal.
pub fn stream_alignment<R: BufRead>(
    input: R,
    records: SyncSender<FastaRecord>,
    errors: Sender<Error>,
    done: Sender<()>,
) {
    let mut reader = FastaReader::new(input);
    let mut width = None;
    let mut counter = 0;

    while let Some(result) = reader.next_record() {
        let mut record = match result {
            Ok(record) => record,
            Err(e) => {
                let _ = errors.send(e);
                return;
            }
        };

        if let Err(e) = record.encode() {
            let _ = errors.send(e);
            return;
        }

        match width {
            None => width = Some(record.width()),
            Some(expected) if record.width() != expected => {
                let _ = errors.send(
                    AlignmentError::DifferentWidths {
                        expected,
                        got: record.width(),
                    }
                    .into(),
                );
                return;
            }
            Some(_) => {}
        }

        record.idx = counter;
        counter += 1;

        // a failed send means the consumer hung up
        if records.send(record).is_err() {
            return;
        }
    }

    let _ = done.send(());
}

/// Receiver half of a running alignment stream.
///
/// Holds the three channels of the producer spawned by [`spawn_stream`]:
/// one encoded record at a time on `records`, at most one terminal error on
/// `errors`, and a single unit on `done` after the last record of a clean
/// run. Dropping the handle aborts the producer at its next send.
pub struct AlignmentStream {
    /// Encoded records in file order, `idx` 0, 1, 2, ...
    pub records: Receiver<FastaRecord>,

    /// At most one terminal error per run
    pub errors: Receiver<Error>,

    /// Signalled once after the last record of a clean run
    pub done: Receiver<()>,

    handle: JoinHandle<()>,
}

impl AlignmentStream {
    /// Waits for the producer thread to finish.
    ///
    /// # Errors
    ///
    /// Propagates a producer thread panic, which does not happen in normal
    /// operation.
    pub fn join(self) -> thread::Result<()> {
        self.handle.join()
    }
}

/// Spawns [`stream_alignment`] on its own thread and returns the receiver
/// half of its channels.
pub fn spawn_stream<R>(input: R) -> AlignmentStream
where
    R: BufRead + Send + 'static,
{
    let (record_tx, record_rx) = sync_channel(0);
    let (error_tx, error_rx) = channel();
    let (done_tx, done_rx) = channel();

    let handle = thread::spawn(move || stream_alignment(input, record_tx, error_tx, done_tx));

    AlignmentStream {
        records: record_rx,
        errors: error_rx,
        done: done_rx,
        handle,
    }
}
