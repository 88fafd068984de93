//! Console session: batch requests followed by an interactive prompt.
//!
//! The session reads from any `BufRead` and writes to any `Write`, so the
//! whole dialogue can be driven from tests.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::domain::DomainError;
use crate::ingest::{IngestError, RequestBatch, parse_manual_request};
use crate::network::FlightNetwork;
use crate::planner::{Planner, PlannerConfig, RouteRequest};
use crate::report::format_plan;

/// What the user picked at the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Manual,
    Exit,
    Invalid,
}

impl MenuChoice {
    fn parse(input: &str) -> Self {
        match input.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('M') => MenuChoice::Manual,
            Some('E') => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// A planning session over one network.
pub struct Session<'a, R, W> {
    network: &'a FlightNetwork,
    config: &'a PlannerConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a new session.
    pub fn new(network: &'a FlightNetwork, config: &'a PlannerConfig, input: R, output: W) -> Self {
        Self {
            network,
            config,
            input,
            output,
        }
    }

    /// Answer every request in a batch, in file order.
    pub fn run_batch(&mut self, batch: &RequestBatch) -> io::Result<()> {
        for req in &batch.requests {
            self.answer(req.number, &req.request)?;
        }
        Ok(())
    }

    /// Plan one request and print its report.
    pub fn answer(&mut self, number: usize, request: &RouteRequest) -> io::Result<()> {
        let result = Planner::new(self.network).search(request);

        debug!(
            number,
            routes = result.routes.len(),
            explored = result.routes_explored,
            "answered request"
        );

        writeln!(self.output)?;
        write!(
            self.output,
            "{}",
            format_plan(number, request, &result, self.config.max_results)
        )
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn interactive(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n--- Flight Plan Source ---")?;
            writeln!(self.output, "Select next action:")?;
            writeln!(self.output, "  [M] Enter a Manual Flight Request")?;
            writeln!(self.output, "  [E] Exit Program")?;
            write!(self.output, "Enter choice (M/E): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            match MenuChoice::parse(&line) {
                MenuChoice::Manual => self.manual_request()?,
                MenuChoice::Exit => break,
                MenuChoice::Invalid => {
                    writeln!(self.output, "Invalid choice. Please enter M or E.")?;
                }
            }
        }

        writeln!(self.output, "\n--- Program Exited. Thank you. ---")?;
        self.output.flush()
    }

    /// Consume the session and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn manual_request(&mut self) -> io::Result<()> {
        write!(
            self.output,
            "\nEnter request (Format: Origin|Destination|SortBy - e.g., Chicago|Dallas|C): "
        )?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };

        match parse_manual_request(&line) {
            Ok(request) => self.answer(self.config.manual_request_number, &request),
            Err(IngestError::Domain(DomainError::InvalidMetric(_))) => writeln!(
                self.output,
                "Invalid sort key. Must be 'T' (Time) or 'C' (Cost)."
            ),
            Err(e) => {
                debug!(error = %e, "rejected manual request");
                writeln!(
                    self.output,
                    "Invalid manual format. Must use Origin|Destination|SortBy."
                )
            }
        }
    }

    /// Next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
