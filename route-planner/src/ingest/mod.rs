//! Reading networks and route requests from pipe-delimited text files.
//!
//! Both file kinds start with a line whose first token is the number of
//! records that follow. Malformed records are skipped with a warning rather
//! than failing the whole file.

mod error;
mod network;
mod requests;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::string::FromUtf8Error;

pub use error::IngestError;
pub use network::{NetworkLoad, load_network, read_network};
pub use requests::{
    FlightRequest, RequestBatch, load_requests, parse_manual_request, read_requests,
};

/// Field separator used by every input format.
pub const FIELD_SEPARATOR: char = '|';

/// Open a file for line-oriented reading, attaching the path to failures.
fn open(path: &Path) -> Result<BufReader<File>, IngestError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// A line with its terminator removed, or the raw bytes if it isn't UTF-8.
type DecodedLine = Result<String, FromUtf8Error>;

/// Split input into lines without failing the whole read on bad encoding.
///
/// I/O errors are still fatal; a line that isn't valid UTF-8 is handed
/// back to the caller so it can be skipped like any other bad record.
fn decoded_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<DecodedLine>> {
    reader.split(b'\n').map(|bytes| {
        bytes.map(|mut bytes| {
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            String::from_utf8(bytes)
        })
    })
}

/// Read the record count from the first line.
fn read_count<I>(lines: &mut I) -> Result<usize, IngestError>
where
    I: Iterator<Item = io::Result<DecodedLine>>,
{
    let first = lines
        .next()
        .ok_or(IngestError::Empty)??
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());

    first
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or(IngestError::MissingCount { line: first })
}
