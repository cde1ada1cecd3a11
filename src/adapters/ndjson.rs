//! NDJSON record loader
//!
//! One JSON object per line. Any line that does not decode aborts the load;
//! nothing read before it is kept.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::core::models::{Record, RecordSet, entity_name};

/// Errors that can occur while loading an NDJSON file
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input path does not exist
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// A line is not well-formed JSON
    #[error("invalid JSON on line {line}: {source}")]
    Decode {
        /// 0-based line number
        line: usize,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// A line is valid JSON but not an object
    #[error("line {line} is not a JSON object")]
    NotAnObject {
        /// 0-based line number
        line: usize,
    },

    /// IO error while reading
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl LoadError {
    /// Whether the file was readable but its content did not decode
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::NotAnObject { .. })
    }
}

/// Lazy reader yielding one record per input line
#[derive(Debug)]
pub struct NdjsonReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl NdjsonReader<BufReader<File>> {
    /// Open `path` for reading
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io(err),
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> NdjsonReader<R> {
    /// Read records from any buffered reader
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for NdjsonReader<R> {
    type Item = Result<Record, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = match self.lines.next()? {
            Ok(text) => text,
            Err(err) => return Some(Err(err.into())),
        };
        let line = self.line;
        self.line += 1;
        Some(parse_line(&text, line))
    }
}

fn parse_line(text: &str, line: usize) -> Result<Record, LoadError> {
    match serde_json::from_str(text) {
        Ok(Value::Object(record)) => Ok(record),
        Ok(_) => Err(LoadError::NotAnObject { line }),
        Err(source) => Err(LoadError::Decode { line, source }),
    }
}

/// Load every record of `path`; the entity is the file's stem
pub fn load_records(path: &Path) -> Result<RecordSet, LoadError> {
    let records = NdjsonReader::open(path)?.collect::<Result<Vec<_>, _>>()?;
    Ok(RecordSet::new(entity_name(path), records))
}
