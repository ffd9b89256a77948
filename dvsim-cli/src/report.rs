use std::collections::BTreeMap;
use std::fmt::Write;

use dvsim::concepts::route::Route;
use dvsim::engine::{Simulation, Status};
use dvsim::router::INF;

use crate::routing::CliSystem;

fn write_table(out: &mut String, node: &str, table: &BTreeMap<String, Route<CliSystem>>) -> std::fmt::Result {
    writeln!(out, "Routing table for {node}:")?;
    writeln!(out, "{:<12}{:<10}{:<10}", "Destination", "Cost", "Next Hop")?;
    for (dest, route) in table {
        let cost = if route.metric == INF {
            "∞".to_string()
        } else {
            route.metric.to_string()
        };
        let next_hop = route.next_hop.as_deref().unwrap_or("-");
        writeln!(out, "{:<12}{:<10}{:<10}", dest, cost, next_hop)?;
    }
    Ok(())
}

fn write_tables(out: &mut String, tables: &BTreeMap<String, BTreeMap<String, Route<CliSystem>>>) -> std::fmt::Result {
    for (node, table) in tables {
        write_table(out, node, table)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Renders every recorded round, the outcome of the run, and the final tables
pub fn render(sim: &Simulation<CliSystem>) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for snapshot in &sim.trace {
        writeln!(out, "Round {}", snapshot.round)?;
        write_tables(&mut out, &snapshot.tables)?;
    }

    match sim.status {
        Status::Converged { iteration } => {
            writeln!(out, "Convergence reached after {iteration} iteration(s)")?;
        }
        Status::IterationLimitReached { iterations } => {
            writeln!(out, "Iteration limit reached ({iterations}), the network may not have converged")?;
        }
    }

    writeln!(out, "\nFinal routing tables:")?;
    let last = sim.tables.snapshot(sim.status.iterations());
    write_tables(&mut out, &last.tables)?;
    Ok(out)
}
