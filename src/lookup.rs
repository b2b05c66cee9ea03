//! Checks user input against the catalog and groups catalog entries.

use crate::catalog::token::{DbInstanceType, InstanceType, RegionCode};
use crate::catalog::{DB_INSTANCE_TYPES, INSTANCE_TYPES, REGIONS};
use crate::error::CatalogError;
use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

/// One of the catalog lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// EC2 instance types
    Instance,
    /// RDS instance classes
    Database,
    /// AWS regions
    Region,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Instance, Category::Database, Category::Region];

    /// The catalog list backing this category
    pub fn entries(self) -> &'static [&'static str] {
        match self {
            Category::Instance => INSTANCE_TYPES,
            Category::Database => DB_INSTANCE_TYPES,
            Category::Region => REGIONS,
        }
    }

    /// Name used in messages
    pub fn label(self) -> &'static str {
        match self {
            Category::Instance => "instance type",
            Category::Database => "database instance type",
            Category::Region => "region",
        }
    }

    fn check_shape(self, token: &str) -> Result<(), CatalogError> {
        match self {
            Category::Instance => token.parse::<InstanceType>().map(drop),
            Category::Database => token.parse::<DbInstanceType>().map(drop),
            Category::Region => token.parse::<RegionCode>().map(drop),
        }
    }
}

/// Instance types of one family, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Family {
    pub name: &'static str,
    pub sizes: Vec<&'static str>,
}

fn find_entry(category: Category, token: &str) -> Option<&'static str> {
    category.entries().iter().copied().find(|e| *e == token)
}

/// Check a token against a category and return the catalog's own entry
pub fn check(category: Category, token: &str) -> Result<&'static str, CatalogError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(CatalogError::Empty {
            category: category.label(),
        });
    }

    if let Err(malformed) = category.check_shape(token) {
        // A compute type given where a DB class is expected (or the reverse)
        // is reported as unknown so the counterpart can be suggested.
        let suggestions = suggest(category, token);
        if suggestions.is_empty() {
            return Err(malformed);
        }
        return Err(CatalogError::Unknown {
            category: category.label(),
            token: token.to_string(),
            suggestions,
        });
    }

    match find_entry(category, token) {
        Some(entry) => {
            debug!("Found {} in catalog: {}", category.label(), entry);
            Ok(entry)
        }
        None => Err(CatalogError::Unknown {
            category: category.label(),
            token: token.to_string(),
            suggestions: suggest(category, token),
        }),
    }
}

/// Catalog entries close to a token that is not in the catalog
pub fn suggest(category: Category, token: &str) -> Vec<&'static str> {
    let token = token.trim();
    let suggestions = match category {
        Category::Instance => {
            if let Ok(db) = token.parse::<DbInstanceType>() {
                find_entry(category, &db.compute_equivalent().to_string())
                    .into_iter()
                    .collect()
            } else if let Ok(t) = token.parse::<InstanceType>() {
                same_family(category, &t.family, token)
            } else {
                Vec::new()
            }
        }
        Category::Database => {
            if let Ok(t) = token.parse::<InstanceType>() {
                find_entry(category, &t.db_equivalent().to_string())
                    .into_iter()
                    .collect()
            } else if let Ok(db) = token.parse::<DbInstanceType>() {
                same_family(category, &db.family, token)
            } else {
                Vec::new()
            }
        }
        Category::Region => match token.parse::<RegionCode>() {
            Ok(code) => {
                let prefix = format!("{}-", code.prefix());
                let area = format!("{}-", code.area);
                let near = matching(category, token, |e| e.starts_with(&prefix));
                if near.is_empty() {
                    matching(category, token, |e| e.starts_with(&area))
                } else {
                    near
                }
            }
            Err(_) => Vec::new(),
        },
    };

    if !suggestions.is_empty() {
        debug!("Suggestions for {}: {:?}", token, suggestions);
    }
    suggestions
}

fn matching(
    category: Category,
    token: &str,
    pred: impl Fn(&str) -> bool,
) -> Vec<&'static str> {
    category
        .entries()
        .iter()
        .copied()
        .filter(|&e| e != token && pred(e))
        .collect()
}

fn same_family(category: Category, family: &str, token: &str) -> Vec<&'static str> {
    matching(category, token, |e| {
        split_entry(category, e).is_some_and(|(f, _)| f == family)
    })
}

/// Full catalog entries belonging to one family, e.g. `m5` or `r5d`
pub fn family_entries(category: Category, family: &str) -> Vec<&'static str> {
    same_family(category, family, "")
}

/// Family and size of an instance entry
fn split_entry(category: Category, entry: &str) -> Option<(&str, &str)> {
    let rest = match category {
        Category::Instance => entry,
        Category::Database => entry.strip_prefix("db.")?,
        Category::Region => return None,
    };
    rest.split_once('.')
}

/// Group an instance category by family, in first-appearance order
pub fn families(category: Category) -> Vec<Family> {
    let mut out: Vec<Family> = Vec::new();
    for &entry in category.entries() {
        let Some((name, size)) = split_entry(category, entry) else {
            continue;
        };
        match out.iter_mut().find(|f| f.name == name) {
            Some(family) => family.sizes.push(size),
            None => out.push(Family {
                name,
                sizes: vec![size],
            }),
        }
    }
    out
}
