//! Registry of deprecated identifiers.
//!
//! A [`Catalog`] is built once (from the built-in list, config, or both) and is read-only
//! afterwards. Lookups are case-insensitive: names are stored uppercase.

#![forbid(unsafe_code)]

mod defaults;

use legacyscan_types::Category;
use std::collections::BTreeMap;

/// One deprecated object and the advice attached to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeprecatedIdentifier {
    /// Uppercase object name.
    pub name: String,
    pub category: Category,
    /// `None` means obsolete without a direct replacement.
    pub remediation: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("identifier {name} is listed as both {first} and {second}")]
    ConflictingCategory {
        name: String,
        first: Category,
        second: Category,
    },
    #[error("invalid identifier name {0:?}: expected letters, digits and '_'")]
    InvalidName(String),
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<String, DeprecatedIdentifier>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The built-in credit management catalog.
    pub fn credit_management() -> Result<Self, CatalogError> {
        CatalogBuilder::credit_management().build()
    }

    pub fn lookup(&self, name: &str) -> Option<&DeprecatedIdentifier> {
        self.entries.get(&name.to_ascii_uppercase())
    }

    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.lookup(name).map(|id| id.category)
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.category_of(name) == Some(category)
    }

    /// Names of one category, sorted.
    pub fn names(&self, category: Category) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .values()
            .filter(move |id| id.category == category)
            .map(|id| id.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeprecatedIdentifier> + '_ {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects additions and removals; validation happens in [`CatalogBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<DeprecatedIdentifier>,
}

impl CatalogBuilder {
    /// A builder pre-filled with the built-in entries.
    pub fn credit_management() -> Self {
        let mut builder = Self::default();
        for (name, category, remediation) in defaults::credit_management_entries() {
            builder.add(name, category, remediation);
        }
        builder
    }

    /// Add an identifier. A later entry with the same name and category replaces the
    /// earlier remediation; a different category is rejected by `build`.
    pub fn add(
        &mut self,
        name: &str,
        category: Category,
        remediation: Option<String>,
    ) -> &mut Self {
        let remediation = remediation
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        self.entries.push(DeprecatedIdentifier {
            name: name.trim().to_ascii_uppercase(),
            category,
            remediation,
        });
        self
    }

    /// Drop every entry added so far under `name`.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        let key = name.trim().to_ascii_uppercase();
        self.entries.retain(|id| id.name != key);
        self
    }

    pub fn build(&self) -> Result<Catalog, CatalogError> {
        let mut entries: BTreeMap<String, DeprecatedIdentifier> = BTreeMap::new();
        for id in &self.entries {
            if !is_valid_name(&id.name) {
                return Err(CatalogError::InvalidName(id.name.clone()));
            }
            if let Some(existing) = entries.get(&id.name)
                && existing.category != id.category
            {
                return Err(CatalogError::ConflictingCategory {
                    name: id.name.clone(),
                    first: existing.category,
                    second: id.category,
                });
            }
            entries.insert(id.name.clone(), id.clone());
        }
        Ok(Catalog { entries })
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
