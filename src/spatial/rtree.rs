//! R-tree spatial index over final node positions, using the rstar crate.
//!
//! The layout is static between runs, so the index is bulk-built from a
//! finished layout and only queried afterwards: nearest node for drag
//! hit-testing, rectangle queries for marquee selection.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

/// A laid-out node in the spatial index, keyed by its input slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePoint {
    /// Input slot of the student (index into the batch).
    pub slot: u32,
    /// Final x coordinate.
    pub x: f64,
    /// Final y coordinate.
    pub y: f64,
}

impl NodePoint {
    /// Create a new NodePoint.
    pub fn new(slot: u32, x: f64, y: f64) -> Self {
        Self { slot, x, y }
    }
}

impl RTreeObject for NodePoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl PointDistance for NodePoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.x - point[0];
        let dy = self.y - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index over one layout run.
pub struct SpatialIndex {
    tree: RTree<NodePoint>,
}

impl SpatialIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-build the index from parallel position buffers.
    pub fn build(pos_x: &[f64], pos_y: &[f64]) -> Self {
        let points: Vec<_> = pos_x
            .iter()
            .zip(pos_y)
            .enumerate()
            .map(|(slot, (&x, &y))| NodePoint::new(slot as u32, x, y))
            .collect();

        Self {
            tree: RTree::bulk_load(points),
        }
    }

    /// Find the node nearest to a point.
    pub fn nearest(&self, x: f64, y: f64) -> Option<u32> {
        self.tree.nearest_neighbor(&[x, y]).map(|point| point.slot)
    }

    /// Find the nearest node within a maximum distance.
    pub fn nearest_within(&self, x: f64, y: f64, max_distance: f64) -> Option<u32> {
        let max_distance_sq = max_distance * max_distance;
        self.tree
            .nearest_neighbor(&[x, y])
            .filter(|point| point.distance_2(&[x, y]) <= max_distance_sq)
            .map(|point| point.slot)
    }

    /// Find all nodes within a rectangle.
    pub fn in_rect(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<u32> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);
        self.tree
            .locate_in_envelope(&envelope)
            .map(|point| point.slot)
            .collect()
    }

    /// Find all nodes within a radius of a point.
    pub fn in_radius(&self, x: f64, y: f64, radius: f64) -> Vec<u32> {
        let radius_sq = radius * radius;
        self.tree
            .locate_within_distance([x, y], radius_sq)
            .map(|point| point.slot)
            .collect()
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether the index holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
