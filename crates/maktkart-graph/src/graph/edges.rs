//! Edge resolution
//!
//! Connections are resolved against the complete entity set, then kept only
//! when the target also received a position in the current layout. A dangling
//! id and a filtered-out target are treated the same: no edge, no error.

use super::interaction::Interaction;
use super::types::LayoutEdge;
use maktkart_types::{CanvasPoint, Entity};
use std::collections::HashMap;

/// Id → position in the entity slice. The first entity with a given id wins.
#[derive(Debug, Clone)]
pub struct EntityIndex<'a> {
    entities: &'a [Entity],
    by_id: HashMap<&'a str, usize>,
}

impl<'a> EntityIndex<'a> {
    pub fn new(entities: &'a [Entity]) -> Self {
        let mut by_id = HashMap::with_capacity(entities.len());
        for (idx, entity) in entities.iter().enumerate() {
            by_id.entry(entity.id.as_str()).or_insert(idx);
        }
        Self { entities, by_id }
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&'a Entity> {
        self.position_of(id).map(|idx| &self.entities[idx])
    }

    /// Emit one edge per (source, connection) pair whose target is placed.
    ///
    /// `placed[i]` is the canvas position of `entities[i]`, or `None` when it
    /// is not part of the layout. `connection_limit` caps how many of each
    /// source's connections are considered. Edges are not deduplicated:
    /// `A→B` and `B→A` both come out.
    pub fn resolve_edges(
        &self,
        sources: impl IntoIterator<Item = usize>,
        placed: &[Option<CanvasPoint>],
        interaction: &Interaction,
        connection_limit: Option<usize>,
    ) -> Vec<LayoutEdge> {
        let mut edges = Vec::new();

        for source_idx in sources {
            let source = &self.entities[source_idx];
            let Some(from) = placed.get(source_idx).copied().flatten() else {
                continue;
            };

            let limit = connection_limit.unwrap_or(usize::MAX);
            for conn_id in source.connections.iter().take(limit) {
                let Some(target_idx) = self.position_of(conn_id) else {
                    continue;
                };
                let Some(to) = placed.get(target_idx).copied().flatten() else {
                    continue;
                };
                let target = &self.entities[target_idx];

                edges.push(LayoutEdge {
                    source: source.id.clone(),
                    target: target.id.clone(),
                    from,
                    to,
                    cross_cluster: source.cluster != target.cluster,
                    highlighted: interaction.touches(&source.id)
                        || interaction.touches(&target.id),
                });
            }
        }

        edges
    }
}
