//! Revolving door records - career moves between politics, business and lobbying

use serde::{Deserialize, Serialize};

/// Which world a career step belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerSide {
    /// Government, ministries, state bodies
    Stat,
    /// Interest organizations
    Interesseorg,
    /// PR and lobbying agencies
    Pr,
    /// Think tanks
    Tankesmie,
    /// Other organizations (unions, NGOs)
    Org,
    /// Any side not listed above; rendered with the default style
    #[serde(other)]
    Annet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevolvingDoorEntry {
    pub id: String,
    pub name: String,
    pub from: String,
    pub from_type: CareerSide,
    pub to: String,
    pub to_type: CareerSide,
    pub year: String,
    #[serde(default, alias = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
