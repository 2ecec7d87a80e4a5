//! Layout pipeline: friend graph to final node coordinates.
//!
//! One call runs the whole chain: build the relation graph, split it into
//! weakly-connected components, relax each component with the force
//! simulation, then pack the component boxes and recenter the assembly on
//! the origin. The pipeline is pure and deterministic; the caller decides
//! when to recompute and how to animate between two layouts.

pub mod components;
pub mod force;
pub mod pack;

use serde::Serialize;

use crate::graph::{RelationGraph, Student};
use components::weakly_connected_components;
use force::{ForceConfig, simulate_component};
use pack::{PackConfig, pack_components};

/// Tuning for one layout run.
#[derive(Default)]
pub struct LayoutConfig {
    /// Force relaxation parameters.
    pub force: ForceConfig,
    /// Component packing parameters.
    pub pack: PackConfig,
}

/// One positioned node. Nodes come back in input order, so slot joins work
/// as well as name joins.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutNode {
    /// Student name, the stable join key.
    pub id: String,
    /// Final x coordinate.
    pub x: f64,
    /// Final y coordinate.
    pub y: f64,
}

/// One directed friend edge, endpoints named for the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutEdge {
    /// Requesting student's name.
    pub source: String,
    /// Requested student's name.
    pub target: String,
    /// True iff the reverse request also exists.
    pub mutual: bool,
}

/// Immutable result of one layout run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LayoutResult {
    /// Positioned nodes in input order.
    pub nodes: Vec<LayoutNode>,
    /// Directed edges with mutual flags, in request order.
    pub edges: Vec<LayoutEdge>,
}

/// Compute a full layout for one student batch.
///
/// Never fails for well-formed input: an empty batch yields an empty
/// result, a lone student lands at the origin, and malformed friend
/// references were already dropped by the graph builder.
pub fn compute_layout(students: &[Student], config: &LayoutConfig) -> LayoutResult {
    let graph = RelationGraph::from_students(students);
    let parts = weakly_connected_components(&graph);

    // Bucket edges by component, translated to component-local indices.
    // A slot's position within its group is found once up front.
    let n = graph.node_count();
    let mut local_slot = vec![0usize; n];
    for group in &parts.groups {
        for (local, &slot) in group.iter().enumerate() {
            local_slot[slot] = local;
        }
    }

    let mut component_edges: Vec<Vec<(usize, usize)>> = vec![Vec::new(); parts.groups.len()];
    for (source, target, _) in graph.edges() {
        // Both endpoints share a component by construction.
        let component = parts.labels[source];
        component_edges[component].push((local_slot[source], local_slot[target]));
    }

    let locals: Vec<_> = parts
        .groups
        .iter()
        .zip(&component_edges)
        .map(|(group, edges)| simulate_component(group.len(), edges, &config.force))
        .collect();

    let mut pos_x = vec![0.0; n];
    let mut pos_y = vec![0.0; n];
    pack_components(&parts.groups, &locals, &config.pack, &mut pos_x, &mut pos_y);

    let nodes = graph
        .names()
        .iter()
        .enumerate()
        .map(|(slot, name)| LayoutNode {
            id: name.clone(),
            x: pos_x[slot],
            y: pos_y[slot],
        })
        .collect();

    let names = graph.names();
    let edges = graph
        .edges()
        .map(|(source, target, mutual)| LayoutEdge {
            source: names[source].clone(),
            target: names[target].clone(),
            mutual,
        })
        .collect();

    LayoutResult { nodes, edges }
}
