//! Friend Graph - WASM Module
//!
//! Core layout engine for the classroom friend graph view. It is compiled
//! to WebAssembly and exposes a JavaScript-friendly API via wasm-bindgen;
//! the React frontend owns rendering and hands over one ordered student
//! batch per layout request.
//!
//! # Architecture
//!
//! - `graph`: Student records and the directed friend graph (petgraph)
//! - `layout`: The layout pipeline - components, force relaxation, packing
//! - `spatial`: R-tree spatial index for O(log n) hit testing

use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

pub mod graph;
pub mod layout;
pub mod spatial;

pub use graph::{RelationGraph, Student};
pub use layout::{LayoutConfig, LayoutEdge, LayoutNode, LayoutResult, compute_layout};

use layout::{force::ForceConfig, pack::PackConfig};
use spatial::SpatialIndex;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Main entry point for the layout engine.
///
/// Wraps the pure pipeline and holds the latest run's result, position
/// buffers, and spatial index for the JavaScript side to query.
#[wasm_bindgen]
pub struct FriendGraphWasm {
    result: LayoutResult,
    pos_x: Vec<f64>,
    pos_y: Vec<f64>,
    spatial: SpatialIndex,
}

#[wasm_bindgen]
impl FriendGraphWasm {
    /// Create a new engine with no layout computed yet.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            result: LayoutResult::default(),
            pos_x: Vec::new(),
            pos_y: Vec::new(),
            spatial: SpatialIndex::new(),
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Compute a layout for a student batch with default tuning.
    ///
    /// `students` is a JS array of records shaped like the grid rows:
    /// `{ name, school, friend1..friend4 }`. Returns the node count.
    #[wasm_bindgen(js_name = computeLayout)]
    pub fn compute_layout(&mut self, students: JsValue) -> Result<u32, JsValue> {
        self.compute_with_config(students, LayoutConfig::default())
    }

    /// Compute a layout with explicit tuning.
    ///
    /// # Arguments
    ///
    /// * `students` - JS array of student records
    /// * `repulsion` - Pairwise repulsion strength (default: 6000)
    /// * `attraction` - Edge attraction strength (default: 0.06)
    /// * `iterations` - Fixed relaxation step count (default: 150)
    /// * `damping` - Velocity retention per step (default: 0.85)
    /// * `gap` - Gap between component boxes (default: 80)
    /// * `max_row_width` - Row wrap threshold; pass Infinity for one row
    #[wasm_bindgen(js_name = computeLayoutWith)]
    #[allow(clippy::too_many_arguments)]
    pub fn compute_layout_with(
        &mut self,
        students: JsValue,
        repulsion: f64,
        attraction: f64,
        iterations: u32,
        damping: f64,
        gap: f64,
        max_row_width: f64,
    ) -> Result<u32, JsValue> {
        let config = LayoutConfig {
            force: ForceConfig {
                repulsion,
                attraction,
                iterations,
                damping,
                ..Default::default()
            },
            pack: PackConfig {
                gap,
                max_row_width,
                ..Default::default()
            },
        };
        self.compute_with_config(students, config)
    }

    fn compute_with_config(
        &mut self,
        students: JsValue,
        config: LayoutConfig,
    ) -> Result<u32, JsValue> {
        let students: Vec<Student> =
            serde_wasm_bindgen::from_value(students).map_err(JsValue::from)?;

        let result = compute_layout(&students, &config);

        self.pos_x = result.nodes.iter().map(|n| n.x).collect();
        self.pos_y = result.nodes.iter().map(|n| n.y).collect();
        self.spatial = SpatialIndex::build(&self.pos_x, &self.pos_y);
        self.result = result;

        web_sys::console::debug_1(
            &format!(
                "friend-graph: laid out {} nodes, {} edges",
                self.result.nodes.len(),
                self.result.edges.len()
            )
            .into(),
        );

        Ok(self.result.nodes.len() as u32)
    }

    /// Drop the current layout and release its buffers.
    pub fn clear(&mut self) {
        self.result = LayoutResult::default();
        self.pos_x.clear();
        self.pos_y.clear();
        self.spatial = SpatialIndex::new();
    }

    // =========================================================================
    // Result Access
    // =========================================================================

    /// Number of laid-out nodes.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> u32 {
        self.result.nodes.len() as u32
    }

    /// Number of directed edges.
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> u32 {
        self.result.edges.len() as u32
    }

    /// Get the positioned nodes as a JS array of `{ id, x, y }`.
    #[wasm_bindgen(js_name = getNodes)]
    pub fn get_nodes(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.result.nodes).map_err(JsValue::from)
    }

    /// Get the edges as a JS array of `{ source, target, mutual }`.
    #[wasm_bindgen(js_name = getEdges)]
    pub fn get_edges(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.result.edges).map_err(JsValue::from)
    }

    /// Get a zero-copy view of X positions, in input order.
    ///
    /// # Safety
    ///
    /// The returned view is invalidated if any Rust allocation occurs.
    /// Use immediately, do not store.
    #[wasm_bindgen(js_name = getPositionsXView)]
    pub fn get_positions_x_view(&self) -> Float64Array {
        unsafe { Float64Array::view(&self.pos_x) }
    }

    /// Get a zero-copy view of Y positions, in input order.
    ///
    /// # Safety
    ///
    /// The returned view is invalidated if any Rust allocation occurs.
    /// Use immediately, do not store.
    #[wasm_bindgen(js_name = getPositionsYView)]
    pub fn get_positions_y_view(&self) -> Float64Array {
        unsafe { Float64Array::view(&self.pos_y) }
    }

    /// Get positions interleaved as [x0, y0, x1, y1, ...] (copied).
    #[wasm_bindgen(js_name = getInterleavedPositions)]
    pub fn get_interleaved_positions(&self) -> Float64Array {
        let mut positions = Vec::with_capacity(self.pos_x.len() * 2);
        for (&x, &y) in self.pos_x.iter().zip(&self.pos_y) {
            positions.push(x);
            positions.push(y);
        }
        Float64Array::from(&positions[..])
    }

    /// Get the bounding box of the layout.
    ///
    /// Returns [min_x, min_y, max_x, max_y], or None if no layout exists.
    #[wasm_bindgen(js_name = getBounds)]
    pub fn get_bounds(&self) -> Option<Vec<f64>> {
        bounds_of(&self.pos_x, &self.pos_y).map(|(min_x, min_y, max_x, max_y)| {
            vec![min_x, min_y, max_x, max_y]
        })
    }

    // =========================================================================
    // Spatial Queries
    // =========================================================================

    /// Find the node nearest to a point.
    ///
    /// Returns the node's input slot, or None if no layout exists.
    #[wasm_bindgen(js_name = findNearestNode)]
    pub fn find_nearest_node(&self, x: f64, y: f64) -> Option<u32> {
        self.spatial.nearest(x, y)
    }

    /// Find the nearest node within a maximum distance.
    #[wasm_bindgen(js_name = findNearestNodeWithin)]
    pub fn find_nearest_node_within(&self, x: f64, y: f64, max_distance: f64) -> Option<u32> {
        self.spatial.nearest_within(x, y, max_distance)
    }

    /// Find all nodes within a rectangular region.
    ///
    /// Returns the node input slots.
    #[wasm_bindgen(js_name = findNodesInRect)]
    pub fn find_nodes_in_rect(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<u32> {
        self.spatial.in_rect(min_x, min_y, max_x, max_y)
    }
}

impl Default for FriendGraphWasm {
    fn default() -> Self {
        Self::new()
    }
}

/// Axis-aligned bounding box over parallel position buffers.
fn bounds_of(pos_x: &[f64], pos_y: &[f64]) -> Option<(f64, f64, f64, f64)> {
    if pos_x.is_empty() {
        return None;
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for (&x, &y) in pos_x.iter().zip(pos_y) {
        if x < min_x {
            min_x = x;
        }
        if x > max_x {
            max_x = x;
        }
        if y < min_y {
            min_y = y;
        }
        if y > max_y {
            max_y = y;
        }
    }

    Some((min_x, min_y, max_x, max_y))
}
