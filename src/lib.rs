//! Maktkart
//!
//! Backend for "Maktkartet", an interactive map of Norwegian power-network
//! relationships. This crate wires together:
//! - the immutable power-network dataset ([`dataset`])
//! - the radial cluster layouts from `maktkart-graph`
//! - a pass-through client for the Brønnøysund business registry ([`brreg`])
//! - the HTTP API serving both ([`api`], `server` feature)

pub mod brreg;
pub mod config;
pub mod dataset;
pub mod error;

#[cfg(feature = "server")]
pub mod api;

pub use config::{BrregConfig, ServerConfig};
pub use dataset::{OrgAliases, PowerDataset};
pub use error::DatasetError;

pub use maktkart_graph as graph;
pub use maktkart_types as types;
