//! In-memory store over the seed dataset.
//!
//! Every center in the dataset is considered active. Filtering mirrors the
//! Postgres pushdown so the two strategies are interchangeable behind
//! [`crate::CenterStore`].

use std::path::Path;

use dropoff_core::{Category, Center, SeedFile};

#[derive(Debug, Clone)]
pub struct StaticCenters {
    categories: Vec<Category>,
    centers: Vec<Center>,
}

impl StaticCenters {
    #[must_use]
    pub fn new(seed: SeedFile) -> Self {
        Self {
            categories: seed.categories,
            centers: seed.centers,
        }
    }

    /// Load the YAML dataset at `path`, falling back to the built-in
    /// dataset when the file is missing or malformed.
    #[must_use]
    pub fn from_path_or_builtin(path: &Path) -> Self {
        match SeedFile::load(path) {
            Ok(seed) => {
                tracing::info!(
                    path = %path.display(),
                    centers = seed.centers.len(),
                    "loaded seed dataset"
                );
                Self::new(seed)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "seed dataset unavailable, using built-in fallback"
                );
                Self::new(SeedFile::builtin())
            }
        }
    }

    #[must_use]
    pub fn list_active(&self, categories: &[String], take: i64) -> Vec<Center> {
        let take = usize::try_from(take).unwrap_or(0);
        self.centers
            .iter()
            .filter(|center| categories.is_empty() || center.matches_any_category(categories))
            .take(take)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn get_center(&self, id: i64) -> Option<Center> {
        self.centers.iter().find(|center| center.id == id).cloned()
    }

    #[must_use]
    pub fn list_categories(&self) -> Vec<Category> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        categories
    }
}
