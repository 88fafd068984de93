//! Route request reader.
//!
//! Request files list one `Origin|Destination|SortBy` per line after the
//! count line, where SortBy is `C` (cost) or `T` (time).

use std::io::BufRead;
use std::path::Path;

use tracing::{info, warn};

use crate::domain::{DomainError, Metric};
use crate::planner::RouteRequest;

use super::{FIELD_SEPARATOR, IngestError, decoded_lines, open, read_count};

/// A request together with its position in the request file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRequest {
    /// 1-based position in the file, used to label output.
    pub number: usize,

    /// The route request.
    pub request: RouteRequest,
}

/// All requests read from a file.
#[derive(Debug, Clone, Default)]
pub struct RequestBatch {
    /// Well-formed requests, in file order.
    pub requests: Vec<FlightRequest>,

    /// Lines that were skipped.
    pub skipped: usize,
}

/// Read requests from any buffered reader.
///
/// The sort key is read leniently: only a leading `C` selects cost, any
/// other key ranks by time.
pub fn read_requests<R: BufRead>(reader: R) -> Result<RequestBatch, IngestError> {
    let mut lines = decoded_lines(reader);
    let expected = read_count(&mut lines)?;

    let mut batch = RequestBatch::default();

    for number in 1..=expected {
        let Some(line) = lines.next() else {
            warn!(expected, read = number - 1, "request file ended early");
            break;
        };
        let line = match line? {
            Ok(line) => line,
            Err(e) => {
                warn!(request = number, error = %e, "skipping request that is not UTF-8");
                batch.skipped += 1;
                continue;
            }
        };

        match parse_batch_request(&line) {
            Ok(request) => batch.requests.push(FlightRequest { number, request }),
            Err(e) => {
                warn!(request = number, error = %e, "skipping request");
                batch.skipped += 1;
            }
        }
    }

    Ok(batch)
}

/// Read requests from a file.
pub fn load_requests(path: impl AsRef<Path>) -> Result<RequestBatch, IngestError> {
    let path = path.as_ref();
    let batch = read_requests(open(path)?)?;

    info!(
        path = %path.display(),
        requests = batch.requests.len(),
        skipped = batch.skipped,
        "loaded requests"
    );

    Ok(batch)
}

/// Parse a request typed at the prompt.
///
/// Unlike request files, the sort key must start with `C` or `T`; anything
/// else is rejected instead of falling back to time.
pub fn parse_manual_request(line: &str) -> Result<RouteRequest, IngestError> {
    let [origin, destination, sort] = split_request(line)?;
    let metric = match sort.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('C') => Metric::Cost,
        Some('T') => Metric::Time,
        _ => return Err(DomainError::InvalidMetric(sort.to_string()).into()),
    };

    request(origin, destination, metric)
}

fn parse_batch_request(line: &str) -> Result<RouteRequest, IngestError> {
    let [origin, destination, sort] = split_request(line)?;

    let tag = sort
        .chars()
        .next()
        .ok_or_else(|| IngestError::BadRequest {
            line: line.to_string(),
            reason: "missing sort key".to_string(),
        })?;

    request(origin, destination, Metric::from_tag(tag))
}

fn request(origin: &str, destination: &str, metric: Metric) -> Result<RouteRequest, IngestError> {
    RouteRequest::parse(origin, destination, metric).map_err(|e| IngestError::BadRequest {
        line: format!("{origin}{FIELD_SEPARATOR}{destination}"),
        reason: e.to_string(),
    })
}

/// Split `Origin|Destination|SortBy` into trimmed fields.
fn split_request(line: &str) -> Result<[&str; 3], IngestError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();

    match fields.as_slice() {
        &[origin, destination, sort] => Ok([origin, destination, sort]),
        _ => Err(IngestError::BadRequest {
            line: line.to_string(),
            reason: "expected Origin|Destination|SortBy".to_string(),
        }),
    }
}
