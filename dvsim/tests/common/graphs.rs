use dvsim::concepts::network::Network;
use crate::common::virtual_network::VirtualSystem;

const ABCD: [&str; 4] = ["A", "B", "C", "D"];

pub fn vnet_random() -> Network<VirtualSystem> {
    VirtualSystem::create(
        &ABCD,
        &[("A", "B", 1), ("A", "C", 4), ("B", "C", 2), ("B", "D", 6), ("C", "D", 3)],
    )
    .unwrap()
}

pub fn vnet_linear() -> Network<VirtualSystem> {
    VirtualSystem::create(&ABCD, &[("A", "B", 1), ("B", "C", 2), ("C", "D", 3)]).unwrap()
}

pub fn vnet_star() -> Network<VirtualSystem> {
    VirtualSystem::create(&ABCD, &[("A", "B", 2), ("A", "C", 5), ("A", "D", 1)]).unwrap()
}

pub fn vnet_unequal() -> Network<VirtualSystem> {
    VirtualSystem::create(
        &ABCD,
        &[("A", "B", 3), ("A", "C", 10), ("B", "C", 1), ("B", "D", 8), ("C", "D", 2)],
    )
    .unwrap()
}

pub fn vnet_full() -> Network<VirtualSystem> {
    VirtualSystem::create(
        &ABCD,
        &[
            ("A", "B", 2),
            ("A", "C", 3),
            ("A", "D", 7),
            ("B", "C", 1),
            ("B", "D", 4),
            ("C", "D", 2),
        ],
    )
    .unwrap()
}

pub fn vnet_disconnected() -> Network<VirtualSystem> {
    VirtualSystem::create(&ABCD, &[("A", "B", 1), ("C", "D", 2)]).unwrap()
}

pub fn vnet_circular() -> Network<VirtualSystem> {
    VirtualSystem::create(&ABCD, &[("A", "B", 2), ("A", "D", 4), ("B", "C", 3), ("C", "D", 1)]).unwrap()
}

pub fn vnet_single() -> Network<VirtualSystem> {
    VirtualSystem::create(&["A"], &[]).unwrap()
}

/// A -> B is cheap, B -> A is expensive, C -> A has no way back
pub fn vnet_asymmetric() -> Network<VirtualSystem> {
    VirtualSystem::adjacency(&[
        ("A", vec![("B", 1)]),
        ("B", vec![("A", 5), ("C", 1)]),
        ("C", vec![("A", 1), ("B", 1)]),
    ])
    .unwrap()
}

pub fn all() -> Vec<Network<VirtualSystem>> {
    vec![
        vnet_random(),
        vnet_linear(),
        vnet_star(),
        vnet_unequal(),
        vnet_full(),
        vnet_disconnected(),
        vnet_circular(),
        vnet_single(),
        vnet_asymmetric(),
    ]
}
