//! Brønnøysund Register Centre (Brreg) integration
//!
//! This module provides:
//! - API types for units (`enheter`) and roles (`roller`)
//! - A client for the public Enhetsregisteret API
//! - Helpers for extracting current board members from a roles document
//! - The [`RegistryLookup`] seam the HTTP pass-through is written against

pub mod client;
pub mod roles;
pub mod types;

pub use client::{BrregClient, SEARCH_PAGE_SIZE};
pub use roles::{extract_board_members, format_person_name, BoardMember};
pub use types::*;

use anyhow::Result;
use async_trait::async_trait;

/// The registry lookups the pass-through forwards.
///
/// `Ok(None)` means the registry answered "not found"; `Err` is any other
/// failure (network, unexpected status, undecodable body).
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    async fn fetch_enhet(&self, orgnr: &str) -> Result<Option<Enhet>>;

    async fn fetch_roller(&self, orgnr: &str) -> Result<Option<RollerResponse>>;

    /// Name search. An empty result is `Ok(vec![])`, never `None`.
    async fn search_enheter(&self, query: &str) -> Result<Vec<Enhet>>;
}
