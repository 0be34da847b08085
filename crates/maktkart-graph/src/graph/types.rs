//! Layout output types

use maktkart_types::{CanvasPoint, EntityKind};
use serde::Serialize;

/// An entity placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    pub id: String,
    pub name: String,
    pub cluster: String,
    pub kind: EntityKind,
    pub position: CanvasPoint,
    /// Polar angle around the anchor, radians
    pub angle: f64,
    /// Distance from the anchor, percent
    pub radius: f64,
    /// Kingmakers are drawn larger and labelled with their initials
    pub emphasized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    /// Caption under the node (surname on the kingmaker ring)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub hovered: bool,
    pub selected: bool,
}

/// A connection to draw. Both endpoints are positioned nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEdge {
    pub source: String,
    pub target: String,
    pub from: CanvasPoint,
    pub to: CanvasPoint,
    /// Endpoints sit in different clusters (drawn dashed)
    pub cross_cluster: bool,
    /// Incident to the hovered or selected entity
    pub highlighted: bool,
}

/// Cluster caption, placed above the anchor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterLabel {
    pub cluster: String,
    pub label: String,
    pub position: CanvasPoint,
    pub color: String,
}

/// Full or embedded map
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutGraph {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<LayoutEdge>,
    pub labels: Vec<ClusterLabel>,
}

impl LayoutGraph {
    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Kingmaker ring
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RingGraph {
    pub center: CanvasPoint,
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<LayoutEdge>,
}

impl RingGraph {
    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
