//! The badge catalog - an immutable, versioned table loaded once at startup.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

use super::{Badge, BadgeCategory, BadgeId};

/// The curated catalog shipped with this crate.
const BUILTIN_CATALOG: &str = include_str!("catalog.toml");

/// Errors raised while loading or validating a catalog table.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate badge id `{0}`")]
    DuplicateId(BadgeId),

    #[error("badge `{id}` is worth zero points")]
    ZeroPoints { id: BadgeId },

    #[error("badge `{id}` is declared {declared:?} but its criterion belongs to {expected:?}")]
    CategoryMismatch {
        id: BadgeId,
        declared: BadgeCategory,
        expected: BadgeCategory,
    },
}

/// On-disk shape of the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    version: u32,
    badges: Vec<Badge>,
}

/// Read-only badge table with id and category lookups.
///
/// Catalog order is definition order and is preserved by every lookup, which
/// is what makes notification ordering deterministic.
#[derive(Debug, Clone)]
pub struct BadgeCatalog {
    version: u32,
    badges: Vec<Badge>,
    /// Index: BadgeId -> position in `badges`.
    by_id: HashMap<BadgeId, usize>,
}

impl BadgeCatalog {
    /// Parse and validate a catalog from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;
        Self::from_badges(file.version, file.badges)
    }

    /// Build a catalog from already-constructed badges (test fixtures).
    pub fn from_badges(version: u32, badges: Vec<Badge>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(badges.len());

        for (index, badge) in badges.iter().enumerate() {
            if by_id.insert(badge.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(badge.id.clone()));
            }
            if badge.points == 0 {
                return Err(CatalogError::ZeroPoints { id: badge.id.clone() });
            }
            let expected = badge.criterion.category();
            if badge.category != expected {
                return Err(CatalogError::CategoryMismatch {
                    id: badge.id.clone(),
                    declared: badge.category,
                    expected,
                });
            }
        }

        Ok(Self { version, badges, by_id })
    }

    /// Load the catalog embedded in this crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Look up a badge by id. `None` means the id is not defined - a contract
    /// violation on the caller's side, not a catalog failure mode.
    pub fn get(&self, id: &BadgeId) -> Option<&Badge> {
        self.by_id.get(id).map(|&index| &self.badges[index])
    }

    /// All badges in one category, in catalog order.
    pub fn in_category(&self, category: BadgeCategory) -> impl Iterator<Item = &Badge> {
        self.badges.iter().filter(move |b| b.category == category)
    }

    /// All badges in catalog order.
    pub fn all(&self) -> impl Iterator<Item = &Badge> {
        self.badges.iter()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}
