//! topocheck: build a graph from the command line and check a proposed
//! topological order against it.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use topocheck::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "topocheck", version, about = "Check a proposed topological order")]
struct Cli {
    /// Start from the A-F demonstration graph
    #[arg(long)]
    demo: bool,

    /// Add a vertex (repeatable)
    #[arg(long = "vertex", value_name = "LABEL")]
    vertices: Vec<String>,

    /// Add an edge written FROM:TO (repeatable)
    #[arg(long = "edge", value_name = "FROM:TO", value_parser = parse_edge)]
    edges: Vec<(String, String)>,

    /// Comma separated order to check. Read from stdin when omitted
    #[arg(long)]
    order: Option<String>,

    /// Fail when a label appears more than once in the order
    #[arg(long)]
    reject_duplicates: bool,

    /// Print one valid order of the graph
    #[arg(long)]
    suggest: bool,

    /// Print the graph as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_edge(raw: &str) -> Result<(String, String), String> {
    raw.split_once(':')
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .ok_or_else(|| format!("`{raw}` is not written FROM:TO"))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Asks for the order on stdout and reads one line from `input`. End of
/// input and unreadable input count as a cancelled prompt.
fn prompt_line(mut input: impl BufRead) -> Option<String> {
    print!("Enter the proposed topological sort (comma-separated vertices): ");
    std::io::stdout().flush().ok()?;
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(err) => {
            tracing::warn!(%err, "unable to read the proposed order");
            None
        }
    }
}

fn prompt_stdin() -> Option<String> {
    prompt_line(std::io::stdin().lock())
}

/// Builds the graph described by `cli`, reports on it and validates the
/// order. Returns the process exit code: 0 for a valid order, 1 otherwise.
/// Rejected vertices and edges are reported on `err` and the run goes on.
fn run<P, O, E>(cli: Cli, prompt: P, out: &mut O, err: &mut E) -> std::io::Result<u8>
where
    P: FnOnce() -> Option<String>,
    O: Write,
    E: Write,
{
    let options = if cli.reject_duplicates {
        ValidationOptions::reject_duplicates()
    } else {
        ValidationOptions::default()
    };
    let mut validator = GraphValidator::with_options(options);

    if cli.demo {
        validator.load_demo();
    }
    for vertex in &cli.vertices {
        if let Err(alert) = validator.add_vertex(vertex) {
            writeln!(err, "{alert}")?;
        }
    }
    for (from, to) in &cli.edges {
        if let Err(alert) = validator.add_edge(from, to) {
            writeln!(err, "{alert}")?;
        }
    }

    let graph = validator.graph();
    for (from, to) in graph.edges() {
        writeln!(out, "{}", Edge::new(from, to))?;
    }

    if cli.json {
        if let Err(json_err) = graph.to_json(&mut *out) {
            writeln!(err, "Unable to write JSON: {json_err}")?;
            return Ok(1);
        }
        writeln!(out)?;
    }

    if cli.suggest {
        match graph.topological_order() {
            Ok(order) => writeln!(out, "Suggested order: {}", order.join(", "))?,
            Err(cycle) => writeln!(err, "{cycle}")?,
        }
    }

    let result = match cli.order {
        Some(order) => validator.request_validation(|| Some(order)),
        None => validator.request_validation(prompt),
    };

    match result {
        Ok(()) => {
            writeln!(out, "Congratulations! Your topological sort is correct!")?;
            Ok(0)
        }
        Err(order_err) => {
            writeln!(out, "{order_err}")?;
            if order_err == OrderError::HasCycle {
                if let Some(cycle) = graph.find_cycle() {
                    writeln!(out, "Cycle: {}", cycle.join(" → "))?;
                }
            }
            Ok(1)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match run(cli, prompt_stdin, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!(%err, "unable to write output");
            ExitCode::FAILURE
        }
    }
}
