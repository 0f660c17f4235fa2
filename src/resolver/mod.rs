//! Instantiation-order resolver
//!
//! Orders components so that every owner comes before its children and
//! every dependency target comes before its dependents. `affects` edges do
//! not constrain construction and may form cycles freely.
//!
//! Ties are broken by document order, so resolving the same topology
//! always yields the same order.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use serde::Serialize;

use crate::error::{TopologyError, TopologyResult};
use crate::models::{Relation, Topology};

/// One step of the instantiation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedComponent {
    pub name: String,

    /// Position in the source document
    pub position: usize,

    /// Parent that creates this component, for components without a class
    pub creator: Option<String>,

    /// Length of the longest construction chain leading to this component
    pub depth: usize,
}

impl ResolvedComponent {
    /// Whether the consumer constructs this component itself.
    pub fn is_constructed(&self) -> bool {
        self.creator.is_none()
    }
}

/// Dependency-respecting instantiation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedOrder {
    entries: Vec<ResolvedComponent>,
}

impl ResolvedOrder {
    pub fn entries(&self) -> &[ResolvedComponent] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedComponent> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Index of `name` in the order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

/// Construction graph over document positions.
struct ConstructionGraph {
    /// `successors[u]` must be built after `u`
    successors: Vec<BTreeSet<usize>>,
    in_degree: Vec<usize>,
}

impl ConstructionGraph {
    fn build(topology: &Topology) -> Self {
        let n = topology.len();
        let mut graph = Self {
            successors: vec![BTreeSet::new(); n],
            in_degree: vec![0; n],
        };

        for (pos, component) in topology.iter().enumerate() {
            let edges = component
                .references()
                .filter(|(relation, _)| relation.is_construction_edge());
            for (relation, target) in edges {
                let Some(target_pos) = topology.position(target) else {
                    continue;
                };
                // owner -> child, dependency target -> dependent
                match relation {
                    Relation::Children => graph.add_edge(pos, target_pos),
                    _ => graph.add_edge(target_pos, pos),
                }
            }
        }
        graph
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        if self.successors[from].insert(to) {
            self.in_degree[to] += 1;
        }
    }

    fn has_self_loop(&self, node: usize) -> bool {
        self.successors[node].contains(&node)
    }
}

/// Compute the instantiation order of `topology`.
///
/// Fails with [`TopologyError::Cycle`] when `children`/`dependencies`
/// edges form a cycle; every cycle is reported with its members in
/// document order.
pub fn resolve(topology: &Topology) -> TopologyResult<ResolvedOrder> {
    let graph = ConstructionGraph::build(topology);
    let n = topology.len();

    let mut in_degree = graph.in_degree.clone();
    let mut depth = vec![0usize; n];
    let mut ready: BinaryHeap<Reverse<usize>> = (0..n)
        .filter(|&i| in_degree[i] == 0)
        .map(Reverse)
        .collect();
    let mut order: Vec<usize> = Vec::with_capacity(n);

    while let Some(Reverse(node)) = ready.pop() {
        order.push(node);
        for &next in &graph.successors[node] {
            depth[next] = depth[next].max(depth[node] + 1);
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push(Reverse(next));
            }
        }
    }

    if order.len() < n {
        let cycles = find_cycles(&graph)
            .into_iter()
            .map(|members| {
                members
                    .into_iter()
                    .map(|i| topology.components()[i].name.clone())
                    .collect()
            })
            .collect::<Vec<Vec<String>>>();
        tracing::debug!(cycles = ?cycles, "construction graph is cyclic");
        return Err(TopologyError::Cycle { cycles });
    }

    let components = topology.components();
    let entries = order
        .into_iter()
        .map(|pos| {
            let component = &components[pos];
            let creator = if component.is_classed() {
                None
            } else {
                topology
                    .owners_of(&component.name)
                    .next()
                    .map(|owner| owner.name.clone())
            };
            ResolvedComponent {
                name: component.name.clone(),
                position: pos,
                creator,
                depth: depth[pos],
            }
        })
        .collect();

    let resolved = ResolvedOrder { entries };
    tracing::debug!(order = ?resolved.names(), "resolved instantiation order");
    Ok(resolved)
}

/// Strongly connected components that contain a cycle, each sorted by
/// document position, ordered by their first member.
fn find_cycles(graph: &ConstructionGraph) -> Vec<Vec<usize>> {
    let mut tarjan = Tarjan::new(graph.successors.len());
    for node in 0..graph.successors.len() {
        if tarjan.index[node].is_none() {
            tarjan.visit(graph, node);
        }
    }

    let mut cycles: Vec<Vec<usize>> = tarjan
        .components
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.has_self_loop(scc[0]))
        .map(|mut scc| {
            scc.sort_unstable();
            scc
        })
        .collect();
    cycles.sort_by_key(|scc| scc[0]);
    cycles
}

struct Tarjan {
    next_index: usize,
    index: Vec<Option<usize>>,
    low_link: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    components: Vec<Vec<usize>>,
}

impl Tarjan {
    fn new(n: usize) -> Self {
        Self {
            next_index: 0,
            index: vec![None; n],
            low_link: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            components: Vec::new(),
        }
    }

    fn enter(&mut self, node: usize) {
        self.index[node] = Some(self.next_index);
        self.low_link[node] = self.next_index;
        self.next_index += 1;
        self.stack.push(node);
        self.on_stack[node] = true;
    }

    /// Iterative depth-first walk from `root`; each frame holds a node and
    /// the successors it has yet to look at.
    fn visit(&mut self, graph: &ConstructionGraph, root: usize) {
        self.enter(root);
        let mut frames = vec![(root, graph.successors[root].iter())];

        while let Some((node, successors)) = frames.last_mut() {
            let node = *node;
            match successors.next() {
                Some(&next) => match self.index[next] {
                    None => {
                        self.enter(next);
                        frames.push((next, graph.successors[next].iter()));
                    }
                    Some(next_index) if self.on_stack[next] => {
                        self.low_link[node] = self.low_link[node].min(next_index);
                    }
                    Some(_) => {}
                },
                None => {
                    frames.pop();
                    if let Some((parent, _)) = frames.last() {
                        let parent = *parent;
                        self.low_link[parent] = self.low_link[parent].min(self.low_link[node]);
                    }
                    if Some(self.low_link[node]) == self.index[node] {
                        self.pop_component(node);
                    }
                }
            }
        }
    }

    fn pop_component(&mut self, root: usize) {
        let mut scc = Vec::new();
        while let Some(member) = self.stack.pop() {
            self.on_stack[member] = false;
            scc.push(member);
            if member == root {
                break;
            }
        }
        self.components.push(scc);
    }
}
