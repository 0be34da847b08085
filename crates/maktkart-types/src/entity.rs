//! Entity records - the nodes of the power network
//!
//! One record type covers every category (people, companies, state bodies,
//! organizations). Categories differ only in which optional fields are
//! populated, so the category is a tag ([`EntityKind`]) rather than a subtype.

use serde::{Deserialize, Serialize};

/// Dataset section an entity comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Individuals at the centre of the network (emphasized on the map, laid
    /// out on the kingmaker ring)
    Kingmaker,
    Company,
    State,
    Org,
    Professional,
    Foreign,
}

impl EntityKind {
    /// Order in which dataset sections are concatenated into the full map.
    pub const MAP_ORDER: [EntityKind; 6] = [
        EntityKind::Kingmaker,
        EntityKind::Company,
        EntityKind::State,
        EntityKind::Org,
        EntityKind::Professional,
        EntityKind::Foreign,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kingmaker => "kingmaker",
            Self::Company => "company",
            Self::State => "state",
            Self::Org => "org",
            Self::Professional => "professional",
            Self::Foreign => "foreign",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monetary attributes, all in millions of NOK. Display-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_worth_mnok: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_mnok: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_mnok: Option<f64>,
    /// Share held by the Norwegian state, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_ownership_pct: Option<f64>,
}

/// A node in the power-network dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier within the dataset
    pub id: String,
    /// Display name
    pub name: String,
    /// Cluster this entity is anchored to
    pub cluster: String,
    pub kind: EntityKind,
    /// Ids of other entities. May reference ids that do not exist.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, alias = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financials: Option<Financials>,
}

impl Entity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cluster: impl Into<String>,
        kind: EntityKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cluster: cluster.into(),
            kind,
            connections: Vec::new(),
            role: None,
            description: None,
            financials: None,
        }
    }

    pub fn with_connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = connections.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn is_kingmaker(&self) -> bool {
        self.kind == EntityKind::Kingmaker
    }

    /// First letter of every name part ("Kari Nordmann Hansen" -> "KNH").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// Last name part, used as the ring label.
    pub fn surname(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }
}
