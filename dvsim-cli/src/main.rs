//! Runs a Distance-Vector simulation and prints the routing tables of every round.
//!
//! ```bash
//! # one of the built-in networks
//! dvsim --preset circular
//!
//! # a network from a JSON file, either {"adjacency": {...}} or {"labels": [...], "matrix": [[...]]}
//! dvsim --file network.json --scheme in-place --max-iterations 10
//! ```

mod presets;
mod report;
mod routing;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dvsim::concepts::network::{Network, NetworkDescription};
use dvsim::engine::simulate;
use dvsim::framework::{SimulationConfig, UpdateScheme};
use log::{info, warn};
use simplelog::*;

use crate::presets::Preset;
use crate::routing::CliSystem;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scheme {
    /// every node reads the tables of the previous round
    Synchronous,
    /// nodes read tables already updated in the current round
    InPlace,
}

impl From<Scheme> for UpdateScheme {
    fn from(value: Scheme) -> Self {
        match value {
            Scheme::Synchronous => UpdateScheme::Synchronous,
            Scheme::InPlace => UpdateScheme::InPlace,
        }
    }
}

/// Distance-Vector routing simulator
#[derive(Parser, Debug)]
#[command(name = "dvsim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Built-in network to simulate
    #[arg(short, long, value_enum, default_value = "random", conflicts_with = "file")]
    preset: Preset,

    /// JSON network description to simulate instead of a preset
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Upper bound on relaxation rounds
    #[arg(short, long, default_value_t = SimulationConfig::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// How updates become visible within a round
    #[arg(long, value_enum, default_value = "synchronous")]
    scheme: Scheme,

    /// Only print the final tables
    #[arg(short, long)]
    quiet: bool,

    /// Print the whole simulation as JSON
    #[arg(long)]
    json: bool,

    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn load_network(args: &Args) -> anyhow::Result<Network<CliSystem>> {
    if let Some(path) = &args.file {
        let data = std::fs::read_to_string(path).with_context(|| format!("Unable to read {}", path.display()))?;
        let description: NetworkDescription<CliSystem> =
            serde_json::from_str(&data).with_context(|| format!("{} is not a network description", path.display()))?;
        Ok(Network::try_from(description).with_context(|| format!("Invalid network in {}", path.display()))?)
    } else {
        Ok(args.preset.network().with_context(|| format!("Invalid preset {:?}", args.preset))?)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    CombinedLogger::init(vec![TermLogger::new(
        args.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    let network = load_network(&args)?;
    info!("Loaded a network of {} node(s)", network.len());

    let config = SimulationConfig::new()
        .with_max_iterations(args.max_iterations)
        .with_scheme(args.scheme.into())
        .with_trace(!args.quiet);
    let sim = simulate(network, config);
    if !sim.status.is_converged() {
        warn!("The simulation stopped before converging, try a larger --max-iterations");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sim)?);
    } else {
        print!("{}", report::render(&sim)?);
    }
    Ok(())
}
