//! Property tests for instantiation order resolution.

use proptest::prelude::*;

use microtopo::{resolve, Component, Topology};

/// Random DAG: edges only point from a lower to a higher index.
fn acyclic_topology() -> impl Strategy<Value = Topology> {
    (2usize..10).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n, any::<bool>()), 0..(n * 2)).prop_map(move |edges| {
            let mut components: Vec<Component> = (0..n)
                .map(|i| Component::new(format!("C{}", i)).with_class("sim.Device"))
                .collect();
            for (a, b, as_child) in edges {
                let (from, to) = (a.min(b), a.max(b));
                if from == to {
                    continue;
                }
                // Either way `from` has to be built before `to`
                if as_child {
                    let parent = components[from].clone();
                    components[from] = parent.with_child(format!("s{}", to), format!("C{}", to));
                } else {
                    let dependent = components[to].clone();
                    components[to] =
                        dependent.with_dependency(format!("d{}", from), format!("C{}", from));
                }
            }
            // Declare in reverse so document order disagrees with the DAG
            components.reverse();
            Topology::from_components(components)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every construction edge points forward in the order.
    #[test]
    fn property_resolve_respects_construction_edges(topology in acyclic_topology()) {
        let order = resolve(&topology).unwrap();
        prop_assert_eq!(order.len(), topology.len());

        for component in &topology {
            let here = order.index_of(&component.name).unwrap();
            for child in &component.children {
                prop_assert!(here < order.index_of(&child.target).unwrap());
            }
            for dependency in &component.dependencies {
                prop_assert!(order.index_of(&dependency.target).unwrap() < here);
            }
        }
    }

    /// PROPERTY: resolving twice gives the same order.
    #[test]
    fn property_resolve_is_idempotent(topology in acyclic_topology()) {
        prop_assert_eq!(resolve(&topology).unwrap(), resolve(&topology).unwrap());
    }

    /// PROPERTY: closing a chain into a ring is always reported as a cycle.
    #[test]
    fn property_ring_is_a_cycle(n in 1usize..8) {
        let components: Vec<Component> = (0..n)
            .map(|i| {
                Component::new(format!("R{}", i))
                    .with_class("sim.Device")
                    .with_child("next", format!("R{}", (i + 1) % n))
            })
            .collect();
        let err = resolve(&Topology::from_components(components)).unwrap_err();
        prop_assert_eq!(err.kind(), "cycle");
        prop_assert_eq!(err.cycle_members().len(), n);
    }
}
