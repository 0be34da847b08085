//! Clusters - fixed named regions of the canvas
//!
//! Clusters are static configuration, never derived from entity data. An
//! entity naming a cluster that is not in the table is still laid out, around
//! [`CANVAS_CENTER`].

use crate::{CanvasPoint, CANVAS_CENTER};
use serde::{Deserialize, Serialize};

/// A named grouping of entities sharing a canvas anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    /// Display label (rendered above the anchor)
    pub label: String,
    pub anchor: CanvasPoint,
    /// CSS colour used for the cluster's nodes and label
    pub color: String,
}

impl Cluster {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        anchor: CanvasPoint,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            anchor,
            color: color.into(),
        }
    }
}

/// Ordered cluster table. Order determines label output order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterTable {
    clusters: Vec<Cluster>,
}

impl ClusterTable {
    pub fn new(clusters: Vec<Cluster>) -> Self {
        Self { clusters }
    }

    pub fn get(&self, id: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Anchor for `id`, falling back to the canvas centre.
    pub fn anchor(&self, id: &str) -> CanvasPoint {
        self.get(id).map(|c| c.anchor).unwrap_or(CANVAS_CENTER)
    }

    pub fn color(&self, id: &str) -> Option<&str> {
        self.get(id).map(|c| c.color.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

impl FromIterator<Cluster> for ClusterTable {
    fn from_iter<I: IntoIterator<Item = Cluster>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ClusterTable {
        ClusterTable::new(vec![
            Cluster::new("kapital", "KAPITAL", CanvasPoint::new(25.0, 30.0), "#c4a35a"),
            Cluster::new("stat", "STAT", CanvasPoint::new(75.0, 30.0), "#2f4f4f"),
        ])
    }

    #[test]
    fn test_anchor_lookup() {
        let t = table();
        assert_eq!(t.anchor("stat"), CanvasPoint::new(75.0, 30.0));
        assert_eq!(t.color("kapital"), Some("#c4a35a"));
    }

    #[test]
    fn test_unknown_cluster_falls_back_to_center() {
        let t = table();
        assert!(!t.contains("media"));
        assert_eq!(t.anchor("media"), CANVAS_CENTER);
        assert_eq!(t.color("media"), None);
    }

    #[test]
    fn test_transparent_serde_keeps_order() {
        let json = serde_json::to_value(table()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], "kapital");
        assert_eq!(json[1]["id"], "stat");
    }
}
