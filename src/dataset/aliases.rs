//! Organization alias table - short names to Brreg organization numbers

use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgAliases(BTreeMap<String, String>);

impl OrgAliases {
    /// Build the table, rejecting values that are not 9-digit organization numbers.
    pub fn new(table: BTreeMap<String, String>) -> Result<Self, DatasetError> {
        if let Some((alias, orgnr)) = table.iter().find(|(_, v)| !is_valid_orgnr(v)) {
            return Err(DatasetError::InvalidOrgNumber {
                alias: alias.clone(),
                orgnr: orgnr.clone(),
            });
        }
        Ok(Self(table))
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.0.get(alias).map(String::as_str)
    }

    /// Organization number for a lookup request.
    ///
    /// A known `id` alias takes precedence over an explicit `orgnr`; an
    /// unknown `id` is ignored. Empty strings count as absent.
    pub fn resolve(&self, orgnr: Option<&str>, id: Option<&str>) -> Option<String> {
        id.and_then(|id| self.get(id))
            .or(orgnr)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Brreg organization numbers are exactly nine ASCII digits.
pub fn is_valid_orgnr(orgnr: &str) -> bool {
    orgnr.len() == 9 && orgnr.bytes().all(|b| b.is_ascii_digit())
}
