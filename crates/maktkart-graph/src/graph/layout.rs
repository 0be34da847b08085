//! Cluster layout - polar positioning around fixed cluster anchors
//!
//! Visible entities are grouped by cluster in input order. Member `i` of `n`
//! sits at angle `i/n · 2π` around its cluster's anchor, on one of three
//! radius bands (`base + (i mod 3) · step`) so that crowded clusters do not
//! collapse onto a single circle.

use super::edges::EntityIndex;
use super::filter::EntityFilter;
use super::interaction::Interaction;
use super::types::{ClusterLabel, LayoutGraph, PositionedNode};
use maktkart_types::{CanvasPoint, ClusterTable, Entity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::TAU;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Innermost band radius for the full-page map (percent)
const FULL_BASE_RADIUS: f64 = 8.0;
/// Innermost band radius for the map embedded in the scroll story (percent)
const EMBEDDED_BASE_RADIUS: f64 = 6.0;
/// Distance between radius bands (percent)
const RADIUS_STEP: f64 = 3.0;
const RADIUS_BANDS: usize = 3;

/// Cluster labels sit this far above their anchor (percent)
const FULL_LABEL_OFFSET: f64 = 12.0;
const EMBEDDED_LABEL_OFFSET: f64 = 10.0;

/// Canvas scale constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub base_radius: f64,
    pub radius_step: f64,
    pub radius_bands: usize,
    pub label_offset: f64,
}

impl LayoutConfig {
    pub fn full_map() -> Self {
        Self {
            base_radius: FULL_BASE_RADIUS,
            radius_step: RADIUS_STEP,
            radius_bands: RADIUS_BANDS,
            label_offset: FULL_LABEL_OFFSET,
        }
    }

    pub fn embedded() -> Self {
        Self {
            base_radius: EMBEDDED_BASE_RADIUS,
            radius_step: RADIUS_STEP,
            radius_bands: RADIUS_BANDS,
            label_offset: EMBEDDED_LABEL_OFFSET,
        }
    }

    /// Radius for the member at `index` within its cluster
    pub fn radius_for(&self, index: usize) -> f64 {
        let band = index % self.radius_bands.max(1);
        self.base_radius + band as f64 * self.radius_step
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::full_map()
    }
}

/// Which map is being laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapView {
    /// Standalone full-page map
    #[default]
    Full,
    /// Smaller map inside the scroll narrative
    Embedded,
}

impl MapView {
    pub fn config(&self) -> LayoutConfig {
        match self {
            MapView::Full => LayoutConfig::full_map(),
            MapView::Embedded => LayoutConfig::embedded(),
        }
    }
}

// =============================================================================
// CLUSTER SLOTS
// =============================================================================

/// Where an entity sits within its cluster's visible members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClusterSlot {
    index: usize,
    count: usize,
}

impl ClusterSlot {
    /// `index/count · 2π`. `count` is at least 1 because a slot only exists
    /// for a member of a non-empty cluster.
    fn angle(&self) -> f64 {
        (self.index as f64 / self.count as f64) * TAU
    }
}

/// Assign slots to the visible entities, cluster by cluster, in input order.
fn assign_slots(entities: &[Entity], visible: &[usize]) -> Vec<Option<ClusterSlot>> {
    let mut members: HashMap<&str, Vec<usize>> = HashMap::new();
    for &idx in visible {
        members
            .entry(entities[idx].cluster.as_str())
            .or_default()
            .push(idx);
    }

    let mut slots = vec![None; entities.len()];
    for group in members.values() {
        let count = group.len();
        for (index, &idx) in group.iter().enumerate() {
            slots[idx] = Some(ClusterSlot { index, count });
        }
    }
    slots
}

// =============================================================================
// LAYOUT ENGINE
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct ClusterLayoutEngine {
    config: LayoutConfig,
}

impl ClusterLayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn for_view(view: MapView) -> Self {
        Self::new(view.config())
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Position every entity accepted by `filter` and enumerate the edges
    /// between positioned entities.
    ///
    /// Hidden entities get no slot and no position but stay addressable for
    /// edge resolution, so an edge pointing at one is dropped rather than
    /// failing. Entities whose cluster is missing from `clusters` are laid out
    /// around the canvas centre.
    pub fn compute_layout(
        &self,
        entities: &[Entity],
        clusters: &ClusterTable,
        filter: &dyn EntityFilter,
        interaction: &Interaction,
    ) -> LayoutGraph {
        let visible: Vec<usize> = entities
            .iter()
            .enumerate()
            .filter(|(_, e)| filter.matches(e))
            .map(|(idx, _)| idx)
            .collect();

        let slots = assign_slots(entities, &visible);
        let mut placed: Vec<Option<CanvasPoint>> = vec![None; entities.len()];
        let mut nodes = Vec::with_capacity(visible.len());

        for &idx in &visible {
            let Some(slot) = slots[idx] else {
                continue;
            };
            let entity = &entities[idx];
            let angle = slot.angle();
            let radius = self.config.radius_for(slot.index);
            let position = clusters.anchor(&entity.cluster).polar_offset(angle, radius);
            placed[idx] = Some(position);

            nodes.push(PositionedNode {
                id: entity.id.clone(),
                name: entity.name.clone(),
                cluster: entity.cluster.clone(),
                kind: entity.kind,
                position,
                angle,
                radius,
                emphasized: entity.is_kingmaker(),
                initials: entity.is_kingmaker().then(|| entity.initials()),
                label: None,
                role: entity.role.clone(),
                color: clusters.color(&entity.cluster).map(str::to_string),
                hovered: interaction.is_hovered(&entity.id),
                selected: interaction.is_selected(&entity.id),
            });
        }

        let index = EntityIndex::new(entities);
        let edges = index.resolve_edges(visible.iter().copied(), &placed, interaction, None);

        let labels = clusters
            .iter()
            .map(|c| ClusterLabel {
                cluster: c.id.clone(),
                label: c.label.clone(),
                position: CanvasPoint::new(c.anchor.x, c.anchor.y - self.config.label_offset),
                color: c.color.clone(),
            })
            .collect();

        tracing::debug!(
            total = entities.len(),
            visible = nodes.len(),
            edges = edges.len(),
            "cluster layout computed"
        );

        LayoutGraph {
            nodes,
            edges,
            labels,
        }
    }
}
