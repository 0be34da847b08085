//! Visibility filters

use maktkart_types::Entity;

/// Decides which entities take part in a layout
pub trait EntityFilter {
    fn matches(&self, entity: &Entity) -> bool;
}

impl<F> EntityFilter for F
where
    F: Fn(&Entity) -> bool,
{
    fn matches(&self, entity: &Entity) -> bool {
        self(entity)
    }
}

/// Every entity is visible
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl EntityFilter for MatchAll {
    fn matches(&self, _entity: &Entity) -> bool {
        true
    }
}

/// Case-insensitive substring match on the entity name.
/// An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

impl EntityFilter for SearchFilter {
    fn matches(&self, entity: &Entity) -> bool {
        self.needle.is_empty() || entity.name.to_lowercase().contains(&self.needle)
    }
}
