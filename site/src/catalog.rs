//! Video catalog shown on the gallery page.
//!
//! DESIGN
//! ======
//! The catalog is hand-authored JSON embedded at build time and parsed once
//! into an immutable value. Rendering code receives it at construction and
//! only reads it; layout needs nothing beyond category lengths and indices.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

const BUILTIN_JSON: &str = include_str!("../data/catalog.json");

/// Errors produced while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog document is not valid catalog JSON.
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One instructional video.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    /// External video id on the video host.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Thumbnail image path.
    pub image: String,
}

impl VideoEntry {
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// A titled, ordered group of videos.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCategory {
    pub title: String,
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
}

/// A category id that appears more than once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateId {
    pub category: String,
    pub id: String,
}

/// Ordered, read-only collection of video categories.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<VideoCategory>,
}

impl Catalog {
    pub fn new(categories: Vec<VideoCategory>) -> Self {
        Self { categories }
    }

    /// The catalog bundled with the site.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the embedded document is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_JSON)
    }

    /// Parse a catalog from a JSON array of categories.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when `raw` is not a category array.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn categories(&self) -> &[VideoCategory] {
        &self.categories
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.videos.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locate an entry by id, returning its category as well.
    pub fn find(&self, id: &str) -> Option<(&VideoCategory, &VideoEntry)> {
        self.categories.iter().find_map(|category| {
            category
                .videos
                .iter()
                .find(|entry| entry.id == id)
                .map(|entry| (category, entry))
        })
    }

    /// Entry ids repeated within a single category, in catalog order.
    ///
    /// Uniqueness is an authoring convention; this lets the host report
    /// violations without refusing to serve.
    pub fn duplicate_ids(&self) -> Vec<DuplicateId> {
        let mut duplicates = Vec::new();
        for category in &self.categories {
            for (index, entry) in category.videos.iter().enumerate() {
                let seen_before = category.videos[..index].iter().any(|prior| prior.id == entry.id);
                let already_reported = duplicates
                    .iter()
                    .any(|d: &DuplicateId| d.category == category.title && d.id == entry.id);
                if seen_before && !already_reported {
                    duplicates.push(DuplicateId {
                        category: category.title.clone(),
                        id: entry.id.clone(),
                    });
                }
            }
        }
        duplicates
    }
}
