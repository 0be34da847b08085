//! Maktkart Layout Engine
//!
//! Pure positioning logic - no rendering, no I/O. Callers feed entities,
//! the cluster table and the interaction state, and get back positioned nodes
//! and the edges to draw.

pub mod graph;

pub use graph::{
    // Edge resolution
    EntityIndex,
    // Filtering
    EntityFilter,
    MatchAll,
    SearchFilter,
    // Interaction
    Interaction,
    // Cluster layout (full and embedded map)
    ClusterLayoutEngine,
    LayoutConfig,
    MapView,
    // Kingmaker ring
    RingLayout,
    // Output types
    ClusterLabel,
    LayoutEdge,
    LayoutGraph,
    PositionedNode,
    RingGraph,
};
