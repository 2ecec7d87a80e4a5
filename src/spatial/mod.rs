//! Spatial indexing for hit testing on the finished layout.
//!
//! An R-tree over final node positions gives the frontend O(log n)
//! nearest-neighbor and range queries for dragging and selection.

mod rtree;

pub use rtree::SpatialIndex;
