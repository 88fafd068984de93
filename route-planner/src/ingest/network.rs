//! Network file reader.
//!
//! Format:
//!
//! ```text
//! 3
//! Dallas|Austin|98|47
//! Austin|Houston|95|39
//! Dallas|Houston|101|51
//! ```
//!
//! Each record is `Origin|Destination|Cost|Time` and adds a connection in
//! both directions.

use std::io::BufRead;
use std::path::Path;

use tracing::{info, warn};

use crate::domain::CityName;
use crate::network::FlightNetwork;

use super::{FIELD_SEPARATOR, IngestError, decoded_lines, open, read_count};

/// A network read from a file, with bookkeeping about the records.
#[derive(Debug, Clone)]
pub struct NetworkLoad {
    /// The network built from the valid records.
    pub network: FlightNetwork,

    /// Record count announced on the first line.
    pub expected_records: usize,

    /// Records added to the network.
    pub records_added: usize,

    /// Records skipped because they were malformed.
    pub records_skipped: usize,
}

/// Read a network from any buffered reader.
pub fn read_network<R: BufRead>(reader: R) -> Result<NetworkLoad, IngestError> {
    let mut lines = decoded_lines(reader);
    let expected_records = read_count(&mut lines)?;

    let mut network = FlightNetwork::new();
    let mut records_added = 0;
    let mut records_skipped = 0;

    for record_no in 1..=expected_records {
        let Some(line) = lines.next() else {
            warn!(
                expected = expected_records,
                read = record_no - 1,
                "network file ended before all records were read"
            );
            break;
        };
        let line = match line? {
            Ok(line) => line,
            Err(e) => {
                warn!(record = record_no, error = %e, "skipping network record that is not UTF-8");
                records_skipped += 1;
                continue;
            }
        };

        match parse_record(&line) {
            Some((a, b, cost, time)) => {
                network.add_connection(&a, &b, cost, time);
                records_added += 1;
            }
            None => {
                warn!(record = record_no, line = %line, "skipping malformed network record");
                records_skipped += 1;
            }
        }
    }

    Ok(NetworkLoad {
        network,
        expected_records,
        records_added,
        records_skipped,
    })
}

/// Read a network from a file.
pub fn load_network(path: impl AsRef<Path>) -> Result<NetworkLoad, IngestError> {
    let path = path.as_ref();
    let load = read_network(open(path)?)?;

    info!(
        path = %path.display(),
        cities = load.network.city_count(),
        records = load.records_added,
        skipped = load.records_skipped,
        "loaded network"
    );

    Ok(load)
}

/// Parse `Origin|Destination|Cost|Time`; extra fields are ignored.
fn parse_record(line: &str) -> Option<(CityName, CityName, u64, u64)> {
    let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);

    let origin = CityName::new(fields.next()?).ok()?;
    let destination = CityName::new(fields.next()?).ok()?;
    let cost = fields.next()?.parse().ok()?;
    let time = fields.next()?.parse().ok()?;

    Some((origin, destination, cost, time))
}
