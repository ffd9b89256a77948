use dvsim::engine::{simulate, Engine, Status};
use dvsim::framework::{SimulationConfig, UpdateScheme};
use dvsim::router::INF;
use crate::common::virtual_network::{hop, TableLookup};

mod common;

#[test]
fn invariants_hold_every_round() {
    for network in common::graphs::all() {
        let sim = simulate(network, SimulationConfig::default());
        assert!(!sim.trace.is_empty());

        for snapshot in &sim.trace {
            for (node, table) in &snapshot.tables {
                // the self-route never changes
                let own = &table[node];
                assert_eq!(own.metric, 0);
                assert_eq!(own.next_hop, None);

                for (dest, route) in table {
                    let expect_hop = dest != node && route.metric != INF;
                    assert_eq!(
                        route.next_hop.is_some(),
                        expect_hop,
                        "next hop of {node} -> {dest} does not match metric {}",
                        route.metric
                    );
                }
            }
        }

        for pair in sim.trace.windows(2) {
            for (node, table) in &pair[1].tables {
                for (dest, route) in table {
                    assert!(route.metric <= pair[0].metric(node, dest), "metric of {node} -> {dest} increased");
                }
            }
        }
    }
}

#[test]
fn trace_follows_updating_rounds() {
    let sim = simulate(common::graphs::vnet_random(), SimulationConfig::default());
    let Status::Converged { iteration } = sim.status else {
        panic!("expected convergence")
    };
    assert_eq!(sim.trace.len(), iteration + 1);
    for (round, snapshot) in sim.trace.iter().enumerate() {
        assert_eq!(snapshot.round, round);
    }

    // round 0 is the initial state: direct links only
    let initial = &sim.trace[0];
    assert_eq!(initial.get_metric_to("A", "C"), 4);
    assert_eq!(initial.get_next_hop("A", "C"), hop("C"));
    assert_eq!(initial.get_metric_to("A", "D"), INF);
    assert_eq!(initial.get_next_hop("A", "D"), None);

    // the last snapshot is the final state
    let last = sim.trace.last().unwrap();
    assert_eq!(*last, sim.tables.snapshot(iteration));
}

#[test]
fn trace_can_be_disabled() {
    let sim = simulate(common::graphs::vnet_random(), SimulationConfig::default().with_trace(false));
    assert!(sim.trace.is_empty());
    assert!(sim.status.is_converged());
    assert_eq!(sim.get_metric_to("A", "D"), 6);
}

#[test]
fn schemes_reach_the_same_distances() {
    for network in common::graphs::all() {
        let nodes: Vec<String> = network.nodes().cloned().collect();
        let sync = simulate(network.clone(), SimulationConfig::default());
        let in_place = simulate(network, SimulationConfig::default().with_scheme(UpdateScheme::InPlace));

        assert!(sync.status.is_converged());
        assert!(in_place.status.is_converged());
        assert!(in_place.status.iterations() <= sync.status.iterations());
        for node in &nodes {
            for dest in &nodes {
                assert_eq!(
                    sync.tables.metric(node, dest),
                    in_place.tables.metric(node, dest),
                    "{node} -> {dest} differs between schemes"
                );
            }
        }
    }
}

#[test]
fn in_place_sees_updates_within_a_round() {
    let mut engine = Engine::new(
        common::graphs::vnet_linear(),
        SimulationConfig::default().with_scheme(UpdateScheme::InPlace),
    );
    engine.step();
    // D relaxes after C, and C already learned B in this round
    assert_eq!(engine.tables().get_metric_to("D", "B"), 5);
    assert_eq!(engine.tables().get_metric_to("D", "A"), 6);

    let mut engine = Engine::new(common::graphs::vnet_linear(), SimulationConfig::default());
    engine.step();
    assert_eq!(engine.tables().get_metric_to("D", "B"), 5);
    assert_eq!(engine.tables().get_metric_to("D", "A"), INF);
}

#[test]
fn step_by_step() {
    let mut engine = Engine::new(common::graphs::vnet_linear(), SimulationConfig::default());
    assert_eq!(engine.iteration(), 0);
    assert_eq!(engine.tables().get_metric_to("A", "C"), INF);

    // A learns C, B learns D, C learns A, D learns B
    assert_eq!(engine.step(), 4);
    assert_eq!(engine.iteration(), 1);
    assert_eq!(engine.tables().get_metric_to("A", "C"), 3);

    assert_eq!(engine.step(), 2);
    assert_eq!(engine.tables().get_metric_to("A", "D"), 6);

    assert_eq!(engine.step(), 0);
    assert_eq!(engine.iteration(), 2);

    // running a settled engine converges straight away
    let sim = engine.run();
    assert_eq!(sim.status, Status::Converged { iteration: 2 });
    assert_eq!(sim.trace.len(), 1);
}

#[test]
fn reproducible_next_hops() {
    let first = simulate(common::graphs::vnet_circular(), SimulationConfig::default());
    for _ in 0..5 {
        let again = simulate(common::graphs::vnet_circular(), SimulationConfig::default());
        assert_eq!(first.trace, again.trace);
    }
}

#[test]
fn routing_system_defaults() {
    let engine = Engine::with_defaults(common::graphs::vnet_star());
    assert_eq!(engine.config(), &SimulationConfig::default());
    assert_eq!(engine.config().max_iterations, 100);
    assert_eq!(engine.network().len(), 4);
    assert!(engine.run().status.is_converged());
}

/// One synchronous round computed from the previous snapshot alone
#[cfg(feature = "parallel")]
fn sequential_round(
    network: &dvsim::concepts::network::Network<common::virtual_network::VirtualSystem>,
    prev: &dvsim::table::Snapshot<common::virtual_network::VirtualSystem>,
) -> std::collections::BTreeMap<String, std::collections::BTreeMap<String, dvsim::concepts::route::Route<common::virtual_network::VirtualSystem>>> {
    use dvsim::concepts::route::Route;
    use dvsim::util::sum_inf;

    let mut next = prev.tables.clone();
    for (node, table) in next.iter_mut() {
        for (dest, route) in table.iter_mut() {
            for (neighbour, cost) in network.neighbours(node) {
                let metric = sum_inf(cost, prev.metric(neighbour, dest));
                if metric < route.metric {
                    *route = Route::via(neighbour.clone(), metric);
                }
            }
        }
    }
    next
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_rounds_match_sequential() {
    for network in common::graphs::all() {
        let sim = simulate(network.clone(), SimulationConfig::default());
        assert!(sim.status.is_converged());

        // every parallel round sees only the previous round's tables
        for pair in sim.trace.windows(2) {
            assert_eq!(pair[1].tables, sequential_round(&network, &pair[0]), "round {}", pair[1].round);
        }
        let last = sim.trace.last().unwrap();
        assert_eq!(sequential_round(&network, last), last.tables);

        // in-place never goes through the parallel path
        let in_place = simulate(network.clone(), SimulationConfig::default().with_scheme(UpdateScheme::InPlace));
        for node in network.nodes() {
            for dest in network.nodes() {
                assert_eq!(sim.tables.metric(node, dest), in_place.tables.metric(node, dest));
            }
        }

        for _ in 0..5 {
            assert_eq!(simulate(network.clone(), SimulationConfig::default()).trace, sim.trace);
        }
    }
}
