//! Kingmaker ring - a single circle centred on the canvas
//!
//! Unlike the cluster layout there is no banding and no filter: every
//! kingmaker gets an evenly spaced slot, starting at the top (−π/2) and
//! running clockwise. Only the first two connections of each member are
//! drawn, and only when they point at another ring member.

use super::edges::EntityIndex;
use super::interaction::Interaction;
use super::types::{PositionedNode, RingGraph};
use maktkart_types::{CanvasPoint, ClusterTable, Entity, CANVAS_CENTER};
use std::f64::consts::{FRAC_PI_2, TAU};

const RING_RADIUS: f64 = 35.0;
const RING_CONNECTION_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub center: CanvasPoint,
    pub radius: f64,
    /// Angle of the first member, radians
    pub start_angle: f64,
    /// How many of each member's connections are considered
    pub connection_limit: usize,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            center: CANVAS_CENTER,
            radius: RING_RADIUS,
            start_angle: -FRAC_PI_2,
            connection_limit: RING_CONNECTION_LIMIT,
        }
    }
}

impl RingLayout {
    pub fn angle_for(&self, index: usize, count: usize) -> f64 {
        if count == 0 {
            return self.start_angle;
        }
        (index as f64 / count as f64) * TAU + self.start_angle
    }

    /// Lay out all kingmakers in `entities` on the ring.
    pub fn compute_ring(
        &self,
        entities: &[Entity],
        clusters: &ClusterTable,
        interaction: &Interaction,
    ) -> RingGraph {
        let members: Vec<usize> = entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_kingmaker())
            .map(|(idx, _)| idx)
            .collect();

        let count = members.len();
        let mut placed: Vec<Option<CanvasPoint>> = vec![None; entities.len()];
        let mut nodes = Vec::with_capacity(count);

        for (slot, &idx) in members.iter().enumerate() {
            let entity = &entities[idx];
            let angle = self.angle_for(slot, count);
            let position = self.center.polar_offset(angle, self.radius);
            placed[idx] = Some(position);

            nodes.push(PositionedNode {
                id: entity.id.clone(),
                name: entity.name.clone(),
                cluster: entity.cluster.clone(),
                kind: entity.kind,
                position,
                angle,
                radius: self.radius,
                emphasized: true,
                initials: Some(entity.initials()),
                label: Some(entity.surname().to_string()),
                role: entity.role.clone(),
                color: clusters.color(&entity.cluster).map(str::to_string),
                hovered: interaction.is_hovered(&entity.id),
                selected: interaction.is_selected(&entity.id),
            });
        }

        let index = EntityIndex::new(entities);
        let edges = index.resolve_edges(
            members.iter().copied(),
            &placed,
            interaction,
            Some(self.connection_limit),
        );

        tracing::debug!(members = count, edges = edges.len(), "kingmaker ring computed");

        RingGraph {
            center: self.center,
            nodes,
            edges,
        }
    }
}
