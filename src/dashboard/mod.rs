pub mod chart;

pub use chart::{extremal_models, ChartBar, ChartCriterion, Extreme};

use crate::domain::ScoredListing;
use crate::errors::ServerError;
use crate::images::ImageResolver;
use crate::spreadsheets::read_ranked_xlsx;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Everything the dashboard renders from: the ranked table (or the reason it
/// could not be loaded) and the image resolver.
pub struct Dashboard {
    data: Result<Vec<ScoredListing>, String>,
    pub images: ImageResolver,
    pub currency: String,
    pub source: PathBuf,
    pub loaded_at: DateTime<Local>,
}

impl Dashboard {
    /// Loads the ranked workbook. A failure is kept and shown on every page.
    pub fn load(path: &Path, images: ImageResolver, currency: &str) -> Self {
        let data = match read_ranked_xlsx(path) {
            Ok(listings) => {
                info!("Loaded {} ranked rows from {}", listings.len(), path.display());
                Ok(listings)
            }
            Err(e) => {
                error!("Error loading data from {}: {e}", path.display());
                Err(e.to_string())
            }
        };

        Self::from_parts(data, path, images, currency)
    }

    pub fn from_parts(
        data: Result<Vec<ScoredListing>, String>,
        path: &Path,
        images: ImageResolver,
        currency: &str,
    ) -> Self {
        Self {
            data,
            images,
            currency: currency.to_string(),
            source: path.to_path_buf(),
            loaded_at: Local::now(),
        }
    }

    pub fn listings(&self) -> Result<&[ScoredListing], ServerError> {
        self.data
            .as_deref()
            .map_err(|e| ServerError::DataLoad(e.clone()))
    }

    /// Brands in table order, without repeats.
    pub fn brands(&self) -> Result<Vec<&str>, ServerError> {
        let mut brands: Vec<&str> = Vec::new();
        for scored in self.listings()? {
            let brand = scored.listing.brand();
            if !brands.contains(&brand) {
                brands.push(brand);
            }
        }
        Ok(brands)
    }

    /// Largest number of rows any brand has in the loaded table: the N the
    /// table was ranked with, unless every brand had fewer models.
    pub fn models_per_brand(&self) -> Result<usize, ServerError> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for scored in self.listings()? {
            let brand = scored.listing.brand();
            match counts.iter_mut().find(|(b, _)| *b == brand) {
                Some((_, count)) => *count += 1,
                None => counts.push((brand, 1)),
            }
        }
        Ok(counts.into_iter().map(|(_, count)| count).max().unwrap_or(0))
    }

    pub fn brand_listings(&self, brand: &str) -> Result<Vec<&ScoredListing>, ServerError> {
        Ok(self
            .listings()?
            .iter()
            .filter(|s| s.listing.brand() == brand)
            .collect())
    }
}
