use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{AmmoError, AmmoResult};

/// One decoded ammo record: the tag from the record header and the raw
/// request block it declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmmoRecord {
    pub tag: String,
    pub bytes: Vec<u8>,
}

/// Length-prefix driven record reader. Never parses the HTTP payload.
pub struct AmmoReader<R: BufRead> {
    reader: R,
    path: PathBuf,
    records: u64,
}

impl AmmoReader<BufReader<File>> {
    /// Opens an ammo artifact for decoding.
    ///
    /// # Errors
    ///
    /// Returns `AmmoError::ReadFailure` when the file cannot be opened.
    pub fn open(path: &Path) -> AmmoResult<Self> {
        let file = File::open(path).map_err(|err| AmmoError::ReadFailure {
            path: path.to_path_buf(),
            source: err,
        })?;
        Ok(Self::from_reader(BufReader::new(file), path))
    }
}

impl<R: BufRead> AmmoReader<R> {
    #[must_use]
    pub fn from_reader(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
            records: 0,
        }
    }

    /// Reads the next record, or `None` at a clean end of file.
    ///
    /// # Errors
    ///
    /// Returns a decode error when the record header is garbled, the
    /// declared block is truncated, or the CRLF terminator is missing.
    pub fn next_record(&mut self) -> AmmoResult<Option<AmmoRecord>> {
        let current = self.records.saturating_add(1);

        let mut header = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut header)
            .map_err(|err| self.read_failure(err))?;
        if read == 0 {
            return Ok(None);
        }
        let Some(line) = header.strip_suffix(b"\n") else {
            return Err(self.malformed_header(current));
        };
        let Ok(text) = std::str::from_utf8(line) else {
            return Err(self.malformed_header(current));
        };
        let Some((size_text, tag)) = text.split_once(' ') else {
            return Err(self.malformed_header(current));
        };
        let Ok(declared) = size_text.parse::<usize>() else {
            return Err(self.malformed_header(current));
        };

        let mut block = vec![0u8; declared];
        self.reader.read_exact(&mut block).map_err(|err| {
            if err.kind() == std::io::ErrorKind::UnexpectedEof {
                AmmoError::TruncatedRecord {
                    path: self.path.clone(),
                    record: current,
                    declared,
                }
            } else {
                self.read_failure(err)
            }
        })?;

        let mut terminator = [0u8; 2];
        self.reader.read_exact(&mut terminator).map_err(|err| {
            if err.kind() == std::io::ErrorKind::UnexpectedEof {
                self.missing_terminator(current)
            } else {
                self.read_failure(err)
            }
        })?;
        if terminator != *b"\r\n" {
            return Err(self.missing_terminator(current));
        }

        self.records = current;
        Ok(Some(AmmoRecord {
            tag: tag.to_owned(),
            bytes: block,
        }))
    }

    fn read_failure(&self, source: std::io::Error) -> AmmoError {
        AmmoError::ReadFailure {
            path: self.path.clone(),
            source,
        }
    }

    fn malformed_header(&self, record: u64) -> AmmoError {
        AmmoError::MalformedRecordHeader {
            path: self.path.clone(),
            record,
        }
    }

    fn missing_terminator(&self, record: u64) -> AmmoError {
        AmmoError::MissingTerminator {
            path: self.path.clone(),
            record,
        }
    }
}

/// Decodes a whole ammo artifact.
///
/// # Errors
///
/// Propagates any decode error from [`AmmoReader::next_record`].
pub fn read_records(path: &Path) -> AmmoResult<Vec<AmmoRecord>> {
    let mut reader = AmmoReader::open(path)?;
    let mut records = Vec::new();
    while let Some(record) = reader.next_record()? {
        records.push(record);
    }
    Ok(records)
}
