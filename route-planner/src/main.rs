use std::io::{self, Write};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use route_planner::cache::CacheConfig;
use route_planner::console::Session;
use route_planner::domain::Metric;
use route_planner::ingest::{load_network, load_requests};
use route_planner::network::FlightNetwork;
use route_planner::planner::{Planner, PlannerConfig, RouteRequest};
use route_planner::report::format_plan;
use route_planner::web::{AppState, PlanResponse, create_router};

/// Plan and rank every simple route between two cities.
#[derive(Parser, Debug)]
#[command(name = "route-planner", version, about, long_about = None)]
struct Cli {
    /// Routes shown per request.
    #[arg(long, global = true, default_value_t = 3)]
    max_results: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer every request in a requests file.
    Batch {
        #[command(flatten)]
        network: NetworkArgs,

        /// Requests file (`Origin|Destination|SortBy` lines).
        #[arg(long, env = "ROUTE_PLANNER_REQUESTS")]
        requests: PathBuf,
    },

    /// Optionally answer a requests file, then prompt for manual requests.
    Interactive {
        #[command(flatten)]
        network: NetworkArgs,

        /// Requests file to answer before the prompt.
        #[arg(long, env = "ROUTE_PLANNER_REQUESTS")]
        requests: Option<PathBuf>,
    },

    /// Plan a single route.
    Query {
        #[command(flatten)]
        network: NetworkArgs,

        origin: String,

        destination: String,

        /// Rank by `cost` or `time`.
        #[arg(long, default_value = "cost")]
        sort: Metric,

        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Serve the web front end.
    Serve {
        #[command(flatten)]
        network: NetworkArgs,

        /// Address to listen on.
        #[arg(long, env = "ROUTE_PLANNER_ADDR", default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[derive(Args, Debug)]
struct NetworkArgs {
    /// Network file (`Origin|Destination|Cost|Time` lines).
    #[arg(long = "network", env = "ROUTE_PLANNER_NETWORK")]
    path: PathBuf,
}

impl NetworkArgs {
    fn load(&self) -> Result<FlightNetwork> {
        let load = load_network(&self.path)
            .with_context(|| format!("loading network from {}", self.path.display()))?;

        if load.records_skipped > 0 {
            warn!(
                skipped = load.records_skipped,
                "some network records were malformed"
            );
        }
        Ok(load.network)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = PlannerConfig::default().with_max_results(cli.max_results);

    match cli.command {
        Commands::Batch { network, requests } => {
            let network = network.load()?;
            run_console(&network, &config, Some(&requests), false)
        }
        Commands::Interactive { network, requests } => {
            let network = network.load()?;
            run_console(&network, &config, requests.as_deref(), true)
        }
        Commands::Query {
            network,
            origin,
            destination,
            sort,
            json,
        } => {
            let network = network.load()?;
            run_query(&network, &config, &origin, &destination, sort, json)
        }
        Commands::Serve { network, addr } => {
            let network = network.load()?;
            serve(network, config, addr)
        }
    }
}

fn run_console(
    network: &FlightNetwork,
    config: &PlannerConfig,
    requests: Option<&Path>,
    interactive: bool,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(network, config, stdin.lock(), stdout.lock());

    if let Some(path) = requests {
        let batch = load_requests(path)
            .with_context(|| format!("loading requests from {}", path.display()))?;
        session.run_batch(&batch).context("writing batch output")?;
    }

    if interactive {
        session.interactive().context("running interactive session")?;
    }
    Ok(())
}

fn run_query(
    network: &FlightNetwork,
    config: &PlannerConfig,
    origin: &str,
    destination: &str,
    metric: Metric,
    json: bool,
) -> Result<()> {
    let request = RouteRequest::parse(origin, destination, metric)?;
    let result = Planner::new(network).search(&request);

    let mut out = io::stdout().lock();
    if json {
        let response = PlanResponse::from_result(&request, &result, config.max_results);
        serde_json::to_writer_pretty(&mut out, &response)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", format_plan(1, &request, &result, config.max_results))?;
    }
    Ok(())
}

/// Queries are answered one at a time on a single-threaded runtime.
fn serve(network: FlightNetwork, config: PlannerConfig, addr: SocketAddr) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    runtime.block_on(async move {
        let cities = network.city_count();
        let app = create_router(AppState::new(network, config, &CacheConfig::default()));

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("binding {addr}"))?;
        info!(%addr, cities, "route planner listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("serving http")
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_query() {
        let cli = Cli::try_parse_from([
            "route-planner",
            "query",
            "--network",
            "net.txt",
            "Dallas",
            "Houston",
            "--sort",
            "T",
        ])
        .unwrap();

        match cli.command {
            Commands::Query {
                network,
                origin,
                destination,
                sort,
                json,
            } => {
                assert_eq!(network.path, PathBuf::from("net.txt"));
                assert_eq!(origin, "Dallas");
                assert_eq!(destination, "Houston");
                assert_eq!(sort, Metric::Time);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.max_results, 3);
    }

    #[test]
    fn cli_parse_serve_with_max_results() {
        let cli = Cli::try_parse_from([
            "route-planner",
            "serve",
            "--network",
            "net.txt",
            "--addr",
            "0.0.0.0:8080",
            "--max-results",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.max_results, 5);
        assert!(matches!(
            cli.command,
            Commands::Serve { addr, .. } if addr.port() == 8080
        ));
    }

    #[test]
    fn cli_rejects_bad_sort() {
        let err = Cli::try_parse_from([
            "route-planner",
            "query",
            "--network",
            "net.txt",
            "A",
            "B",
            "--sort",
            "speed",
        ]);
        assert!(err.is_err());
    }
}
