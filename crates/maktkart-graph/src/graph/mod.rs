//! Radial Cluster Layout
//!
//! # Architecture
//!
//! ```text
//! &[Entity] + ClusterTable (immutable dataset)
//!        │
//!        ├──► EntityFilter (search query) ──► visible subset
//!        │
//!        ▼
//! ClusterLayoutEngine / RingLayout (polar positioning)
//!        │
//!        ▼
//! EntityIndex::resolve_edges (drop dangling / hidden targets)
//!        │
//!        ▼
//! LayoutGraph / RingGraph (positioned nodes + flagged edges)
//! ```
//!
//! Everything here is a pure function of its inputs. Positions are recomputed
//! from scratch on every call; they are not stable across filter changes
//! because a node's slot depends on how many of its cluster peers are visible.

pub mod edges;
pub mod filter;
pub mod interaction;
pub mod layout;
pub mod ring;
pub mod types;

pub use edges::EntityIndex;
pub use filter::{EntityFilter, MatchAll, SearchFilter};
pub use interaction::Interaction;
pub use layout::{ClusterLayoutEngine, LayoutConfig, MapView};
pub use ring::RingLayout;
pub use types::*;
