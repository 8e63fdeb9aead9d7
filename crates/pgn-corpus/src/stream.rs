//! Chunked record streaming over a raw corpus source.

use std::io::{self, Read};

use tracing::debug;

use crate::error::CorpusError;

/// Read size used when none is given. Lichess archives run to many
/// gigabytes, so reads are chunked rather than slurped.
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Blank line between a record's header block and its movetext, and between
/// consecutive records.
const SEPARATOR: &[u8] = b"\n\n";

/// Lazy iterator over whole game records in a corpus.
///
/// Each record in the source is two blank-line-delimited sections, headers
/// then movetext, so a record is complete only once a second separator has
/// been seen. Yielded text is `headers\n\nmovetext` with the trailing
/// separator trimmed. The stream is finite and consume-once.
///
/// A partial record left at end of source (no closing separator) is
/// discarded, matching how the archives are produced: a truncated tail is
/// not a parseable game.
pub struct RecordStream<R> {
    source: R,
    read_buf: Vec<u8>,
    buf: Vec<u8>,
    scan: usize,
    pending_headers: Option<String>,
    eof: bool,
}

impl<R: Read> RecordStream<R> {
    pub fn new(source: R) -> Self {
        Self::with_chunk_size(source, DEFAULT_CHUNK_SIZE)
    }

    /// Chunk size is observable only through read patterns; small sizes are
    /// useful to exercise records straddling chunk boundaries.
    pub fn with_chunk_size(source: R, chunk_size: usize) -> Self {
        Self {
            source,
            read_buf: vec![0; chunk_size],
            buf: Vec::new(),
            scan: 0,
            pending_headers: None,
            eof: false,
        }
    }
}

fn find_separator(buf: &[u8]) -> Option<usize> {
    buf.windows(SEPARATOR.len()).position(|w| w == SEPARATOR)
}

impl<R: Read> Iterator for RecordStream<R> {
    type Item = Result<String, CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(offset) = find_separator(&self.buf[self.scan..]) {
                let start = self.scan;
                let segment =
                    String::from_utf8_lossy(&self.buf[start..start + offset]).into_owned();
                self.scan = start + offset + SEPARATOR.len();
                match self.pending_headers.take() {
                    Some(headers) => return Some(Ok(format!("{headers}\n\n{segment}"))),
                    // An empty segment before any headers (leading or doubled
                    // separators) is not a record section.
                    None if segment.is_empty() => {}
                    None => self.pending_headers = Some(segment),
                }
                continue;
            }

            // No separator left; drop consumed bytes but keep the unmatched
            // tail, which may hold the start of the next section.
            self.buf.drain(..self.scan);
            self.scan = 0;

            if self.eof {
                if !self.buf.is_empty() || self.pending_headers.is_some() {
                    debug!(
                        bytes = self.buf.len(),
                        "dropping incomplete trailing record at end of corpus"
                    );
                    self.buf.clear();
                    self.pending_headers = None;
                }
                return None;
            }

            match self.source.read(&mut self.read_buf) {
                Ok(0) => self.eof = true,
                Ok(n) => self.buf.extend_from_slice(&self.read_buf[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Some(Err(CorpusError::Io(e))),
            }
        }
    }
}
