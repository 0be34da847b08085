//! Power-network dataset
//!
//! Loaded once at startup and shared read-only (`Arc<PowerDataset>`) by every
//! request. Fixture datasets for tests go through the same constructor, so
//! validation applies to both.

mod aliases;

pub use aliases::{is_valid_orgnr, OrgAliases};

use crate::error::DatasetError;
use maktkart_graph::{
    ClusterLayoutEngine, Interaction, LayoutGraph, MapView, RingGraph, RingLayout, SearchFilter,
};
use maktkart_types::{ClusterTable, Entity, EntityKind, RevolvingDoorEntry};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

const BUNDLED_DATASET: &str = include_str!("../../data/maktkartet.yaml");

/// On-disk layout of a dataset file
#[derive(Debug, Deserialize)]
struct DatasetFile {
    clusters: ClusterTable,
    entities: Vec<Entity>,
    #[serde(default)]
    revolving_door: Vec<RevolvingDoorEntry>,
    #[serde(default)]
    known_organizations: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct PowerDataset {
    clusters: ClusterTable,
    entities: Vec<Entity>,
    revolving_door: Vec<RevolvingDoorEntry>,
    aliases: OrgAliases,
}

impl PowerDataset {
    /// Validate and assemble a dataset.
    ///
    /// Entity order is `kind` first, file order second: entities are
    /// stable-sorted into map sections (kingmakers first, foreign last, see
    /// [`EntityKind::MAP_ORDER`]). A file that interleaves kinds therefore
    /// gets cluster slots in section order, not in its own line order.
    pub fn new(
        clusters: ClusterTable,
        mut entities: Vec<Entity>,
        revolving_door: Vec<RevolvingDoorEntry>,
        aliases: OrgAliases,
    ) -> Result<Self, DatasetError> {
        let mut cluster_ids = HashSet::new();
        for cluster in clusters.iter() {
            if !cluster_ids.insert(cluster.id.as_str()) {
                return Err(DatasetError::DuplicateCluster(cluster.id.clone()));
            }
        }

        let mut entity_ids = HashSet::new();
        for entity in &entities {
            if !entity_ids.insert(entity.id.as_str()) {
                return Err(DatasetError::DuplicateEntity(entity.id.clone()));
            }
        }

        for entity in &entities {
            if !cluster_ids.contains(entity.cluster.as_str()) {
                tracing::warn!(
                    entity = %entity.id,
                    cluster = %entity.cluster,
                    "entity references unregistered cluster, it will be placed at the canvas centre"
                );
            }
            for conn in &entity.connections {
                if !entity_ids.contains(conn.as_str()) {
                    tracing::warn!(entity = %entity.id, connection = %conn, "dangling connection");
                }
            }
        }

        entities.sort_by_key(|e| section_rank(e.kind));

        Ok(Self {
            clusters,
            entities,
            revolving_door,
            aliases,
        })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_yaml::from_str(yaml)?;
        let aliases = OrgAliases::new(file.known_organizations)?;
        Self::new(file.clusters, file.entities, file.revolving_door, aliases)
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_yaml_str(&yaml)?;
        tracing::info!(
            path = %path.display(),
            entities = dataset.entities.len(),
            clusters = dataset.clusters.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// The sample dataset compiled into the binary.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_yaml_str(BUNDLED_DATASET)
    }

    pub fn clusters(&self) -> &ClusterTable {
        &self.clusters
    }

    /// All entities in map order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn kingmakers(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_kingmaker())
    }

    pub fn revolving_door(&self) -> &[RevolvingDoorEntry] {
        &self.revolving_door
    }

    pub fn aliases(&self) -> &OrgAliases {
        &self.aliases
    }

    /// Cluster layout of every entity whose name contains `query`.
    pub fn map_layout(&self, view: MapView, query: &str, interaction: &Interaction) -> LayoutGraph {
        ClusterLayoutEngine::for_view(view).compute_layout(
            &self.entities,
            &self.clusters,
            &SearchFilter::new(query),
            interaction,
        )
    }

    pub fn kingmaker_ring(&self, interaction: &Interaction) -> RingGraph {
        RingLayout::default().compute_ring(&self.entities, &self.clusters, interaction)
    }
}

fn section_rank(kind: EntityKind) -> usize {
    EntityKind::MAP_ORDER
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(EntityKind::MAP_ORDER.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maktkart_types::{CanvasPoint, Cluster};

    fn clusters() -> ClusterTable {
        ClusterTable::new(vec![
            Cluster::new("kapital", "KAPITAL", CanvasPoint::new(22.0, 30.0), "#c4a35a"),
            Cluster::new("stat", "STAT", CanvasPoint::new(78.0, 30.0), "#2f4f4f"),
        ])
    }

    #[test]
    fn test_bundled_dataset_is_valid() {
        let dataset = PowerDataset::bundled().unwrap();
        assert!(dataset.kingmakers().count() >= 3);
        assert_eq!(dataset.aliases().get("aker"), Some("886581432"));
        assert!(!dataset.revolving_door().is_empty());
        assert!(dataset.aliases().iter().all(|(_, n)| is_valid_orgnr(n)));
    }

    #[test]
    fn test_bundled_dataset_fits_canvas() {
        let dataset = PowerDataset::bundled().unwrap();
        for view in [MapView::Full, MapView::Embedded] {
            let graph = dataset.map_layout(view, "", &Interaction::new());
            assert_eq!(graph.nodes.len(), dataset.entities().len());
            for node in &graph.nodes {
                assert!(node.position.within_canvas(), "{} off canvas", node.id);
            }
            for label in &graph.labels {
                assert!(label.position.within_canvas(), "{} label off canvas", label.cluster);
            }
        }
    }

    #[test]
    fn test_entities_grouped_by_section() {
        let dataset = PowerDataset::new(
            clusters(),
            vec![
                Entity::new("c1", "C1", "kapital", EntityKind::Company),
                Entity::new("k1", "K1", "kapital", EntityKind::Kingmaker),
                Entity::new("s1", "S1", "stat", EntityKind::State),
                Entity::new("c2", "C2", "kapital", EntityKind::Company),
                Entity::new("k2", "K2", "kapital", EntityKind::Kingmaker),
            ],
            vec![],
            OrgAliases::default(),
        )
        .unwrap();

        let ids: Vec<&str> = dataset.entities().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["k1", "k2", "c1", "c2", "s1"]);
    }

    #[test]
    fn test_interleaved_file_slots_follow_sections() {
        let yaml = r##"
clusters:
  - { id: kapital, label: KAPITAL, anchor: { x: 22, y: 30 }, color: "#c4a35a" }
entities:
  - { id: c1, name: C1, cluster: kapital, kind: company }
  - { id: k1, name: K1, cluster: kapital, kind: kingmaker }
"##;
        let dataset = PowerDataset::from_yaml_str(yaml).unwrap();
        let graph = dataset.map_layout(MapView::Full, "", &Interaction::new());

        assert!(graph.node("k1").unwrap().angle.abs() < 1e-9);
        assert!((graph.node("c1").unwrap().angle - std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_entity_rejected() {
        let err = PowerDataset::new(
            clusters(),
            vec![
                Entity::new("aker", "Aker", "kapital", EntityKind::Company),
                Entity::new("aker", "Aker igjen", "kapital", EntityKind::Company),
            ],
            vec![],
            OrgAliases::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateEntity(id) if id == "aker"));
    }

    #[test]
    fn test_duplicate_cluster_rejected() {
        let table = ClusterTable::new(vec![
            Cluster::new("stat", "STAT", CanvasPoint::new(78.0, 30.0), "#000"),
            Cluster::new("stat", "STAT 2", CanvasPoint::new(70.0, 30.0), "#111"),
        ]);
        let err = PowerDataset::new(table, vec![], vec![], OrgAliases::default()).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateCluster(id) if id == "stat"));
    }

    #[test]
    fn test_dangling_connections_and_unknown_clusters_allowed() {
        let dataset = PowerDataset::new(
            clusters(),
            vec![Entity::new("x", "X", "atlantis", EntityKind::Foreign).with_connections(["ghost"])],
            vec![],
            OrgAliases::default(),
        )
        .unwrap();
        let graph = dataset.map_layout(MapView::Full, "", &Interaction::new());
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = PowerDataset::from_yaml_str("clusters: [").unwrap_err();
        assert!(matches!(err, DatasetError::Yaml(_)));
    }

    #[test]
    fn test_invalid_alias_in_yaml() {
        let yaml = r#"
clusters: []
entities: []
known_organizations:
  aker: "88658"
"#;
        let err = PowerDataset::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidOrgNumber { .. }));
    }

    #[test]
    fn test_kingmaker_ring_uses_kingmakers_only() {
        let dataset = PowerDataset::bundled().unwrap();
        let ring = dataset.kingmaker_ring(&Interaction::new());
        assert_eq!(ring.nodes.len(), dataset.kingmakers().count());
        assert!(ring.nodes.iter().all(|n| n.kind == EntityKind::Kingmaker));
    }
}
