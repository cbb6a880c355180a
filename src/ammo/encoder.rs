use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{AmmoError, AmmoResult};

use super::Request;

/// Streaming ammo writer.
///
/// Records are emitted in the order requests arrive; nothing is reordered,
/// deduplicated, or batched. Only the current record is buffered, so the
/// request sequence may be arbitrarily large.
pub struct AmmoEncoder<W: Write> {
    writer: W,
    path: PathBuf,
    records: u64,
}

impl AmmoEncoder<BufWriter<File>> {
    /// Creates (or truncates) the ammo artifact at `path`.
    ///
    /// # Errors
    ///
    /// Returns `AmmoError::WriteFailure` when the file cannot be created.
    pub fn create(path: &Path) -> AmmoResult<Self> {
        let file = File::create(path).map_err(|err| AmmoError::WriteFailure {
            path: path.to_path_buf(),
            source: err,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            records: 0,
        })
    }
}

impl<W: Write> AmmoEncoder<W> {
    /// Wraps an arbitrary writer. The artifact path is only used for error
    /// context.
    #[must_use]
    pub fn from_writer(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            path: path.into(),
            records: 0,
        }
    }

    /// Appends one record: `"{size} {tag}\n"`, the rendered request block,
    /// then the CRLF terminator. The declared size is the exact byte count
    /// of the block.
    ///
    /// # Errors
    ///
    /// Returns `AmmoError::WriteFailure` on any I/O failure; the artifact
    /// must not be treated as valid afterwards.
    pub fn encode(&mut self, request: &Request) -> AmmoResult<()> {
        let block = request.to_wire();
        let header = format!("{} {}\n", block.len(), request.tag());
        self.write_bytes(header.as_bytes())?;
        self.write_bytes(&block)?;
        self.write_bytes(b"\r\n")?;
        self.records = self.records.saturating_add(1);
        Ok(())
    }

    /// Flushes buffered records and returns how many were written.
    ///
    /// # Errors
    ///
    /// Returns `AmmoError::WriteFailure` when the final flush fails.
    pub fn finish(mut self) -> AmmoResult<u64> {
        self.writer
            .flush()
            .map_err(|err| AmmoError::WriteFailure {
                path: self.path.clone(),
                source: err,
            })?;
        Ok(self.records)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> AmmoResult<()> {
        self.writer
            .write_all(bytes)
            .map_err(|err| AmmoError::WriteFailure {
                path: self.path.clone(),
                source: err,
            })
    }
}

/// Drains `requests` into a fresh ammo artifact at `path` and returns the
/// record count. An empty sequence produces a valid, empty artifact.
///
/// # Errors
///
/// Propagates request construction failures from the iterator and
/// `AmmoError::WriteFailure` on I/O failure. On failure the artifact is
/// incomplete and must not be consumed.
pub fn write_ammo<I>(path: &Path, requests: I) -> AmmoResult<u64>
where
    I: IntoIterator<Item = AmmoResult<Request>>,
{
    let mut encoder = AmmoEncoder::create(path)?;
    for request in requests {
        encoder.encode(&request?)?;
    }
    encoder.finish()
}
