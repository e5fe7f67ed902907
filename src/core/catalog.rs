//! Image catalog - Validated, read-only list of templates

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::error::{CatalogError, CatalogValidationError};
use super::template::ImageTemplate;

/// Catalog compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../../assets/images.json");

/// Immutable, ordered catalog of image templates
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: Vec<ImageTemplate>,
    /// Search labels, parallel to `templates`
    labels: Vec<String>,
}

impl Catalog {
    /// Build a catalog, rejecting the first entry that breaks a constraint
    pub fn new(templates: Vec<ImageTemplate>) -> Result<Self, CatalogValidationError> {
        for (index, template) in templates.iter().enumerate() {
            template
                .check()
                .map_err(|violation| CatalogValidationError {
                    index,
                    id: template.id.clone(),
                    violation,
                })?;
        }

        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                warn!("Catalog id '{}' is shared by several images", template.id);
            }
        }

        debug!("Validated {} catalog entries", templates.len());
        let labels = templates.iter().map(ImageTemplate::search_label).collect();
        Ok(Self { templates, labels })
    }

    /// Parse and validate a JSON array of templates
    ///
    /// Only a document that is not a JSON array is a parse error. Problems
    /// inside an entry are reported against that entry.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<Value> = serde_json::from_str(json)?;
        let templates = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                ImageTemplate::from_value(entry).map_err(|violation| CatalogValidationError {
                    index,
                    id: entry
                        .get("id")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    violation,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(templates)?)
    }

    /// Load a catalog file from disk
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!("Loaded {} images from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// The catalog shipped with the application
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Exact match on "{name} {type}"; the first entry wins on collisions
    pub fn lookup(&self, search_key: &str) -> Option<&ImageTemplate> {
        self.templates.iter().find(|t| t.matches_label(search_key))
    }

    /// One label per entry, in catalog order
    pub fn search_labels(&self) -> Vec<String> {
        self.labels.clone()
    }

    /// Typeahead suggestions: case-insensitive substring match, catalog order
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        self.labels
            .iter()
            .map(String::as_str)
            .filter(|label| query.is_empty() || label.to_lowercase().contains(&query))
            .take(limit)
            .collect()
    }

    pub fn templates(&self) -> &[ImageTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
