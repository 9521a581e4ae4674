//! Pipeline configuration: built-in defaults, optional TOML file,
//! environment overrides for credentials.

use crate::domain::Column;
use crate::errors::PipelineError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "ranker.toml";
pub const API_KEY_ENV: &str = "PHONE_RANKER_API_KEY";
pub const ENGINE_ID_ENV: &str = "PHONE_RANKER_ENGINE_ID";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub ranking: RankingConfig,
    pub search: SearchConfig,
    pub dashboard: DashboardConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Allowed brands, matched case-insensitively. Declared order is the
    /// sort order after the priority brand.
    pub brands: Vec<String>,
    pub priority_brand: String,
    /// Sheet of the raw workbook; the first sheet when unset.
    pub raw_sheet: Option<String>,
    pub currency_symbol: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            brands: ["nothing", "motorola", "poco", "iqoo", "infinix"]
                .into_iter()
                .map(String::from)
                .collect(),
            priority_brand: "nothing".to_string(),
            raw_sheet: None,
            currency_symbol: "₹".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CriterionWeight {
    /// Display label of the catalog column.
    pub column: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub top_n: usize,
    pub criteria: Vec<CriterionWeight>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        let weight = |column: Column, weight: f64| CriterionWeight {
            column: column.label().to_string(),
            weight,
        };

        Self {
            top_n: 5,
            criteria: vec![
                weight(Column::Price, -1.0),
                weight(Column::BatteryCapacity, 1.0),
                weight(Column::Ram, 1.0),
                weight(Column::Rom, 1.0),
                weight(Column::ProcessorSpeed, 1.0),
                weight(Column::FrontCamera, 1.0),
                weight(Column::RearCamera, 1.0),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub api_key: Option<String>,
    pub engine_id: Option<String>,
    pub endpoint: String,
    /// Result pages to walk before giving up on a query.
    pub max_pages: usize,
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            engine_id: None,
            endpoint: "https://www.googleapis.com/customsearch/v1".to_string(),
            max_pages: 10,
            timeout_secs: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub addr: String,
    /// SQLite path (or `file:` URI) holding resolved image URLs.
    pub image_cache: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            image_cache: "file:image_cache?mode=memory&cache=shared".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub raw_input: PathBuf,
    pub normalized_output: PathBuf,
    pub ranked_output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_input: PathBuf::from("smartphone_sales.xlsx"),
            normalized_output: PathBuf::from("processed_smartphone_sales.xlsx"),
            ranked_output: PathBuf::from("top_5_models_per_brand.xlsx"),
        }
    }
}

impl AppConfig {
    /// Loads `path` when given, else `ranker.toml` if it exists, else the
    /// defaults. Credentials from the environment win over the file.
    pub fn load(path: Option<&Path>) -> Result<Self, PipelineError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.search.api_key = Some(key);
        }
        if let Ok(id) = std::env::var(ENGINE_ID_ENV) {
            config.search.engine_id = Some(id);
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, PipelineError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| PipelineError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_toml(content: &str) -> Result<Self, PipelineError> {
        toml::from_str(content).map_err(|e| PipelineError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        let catalog = &self.catalog;
        if catalog.brands.is_empty() {
            return Err(PipelineError::Config("brand allow-list is empty".into()));
        }
        let priority = brand_key(&catalog.priority_brand);
        if !catalog.brands.iter().any(|b| brand_key(b) == priority) {
            return Err(PipelineError::Config(format!(
                "priority brand '{}' is not in the allow-list",
                catalog.priority_brand
            )));
        }
        if self.ranking.top_n == 0 {
            return Err(PipelineError::Config("top_n must be at least 1".into()));
        }
        if self.ranking.criteria.is_empty() {
            return Err(PipelineError::Config("no ranking criteria configured".into()));
        }
        for criterion in &self.ranking.criteria {
            if Column::from_label(&criterion.column).is_none() {
                return Err(PipelineError::UnknownCriterion(criterion.column.clone()));
            }
        }
        Ok(())
    }
}

/// Brands compare trimmed and lower-cased.
pub fn brand_key(brand: &str) -> String {
    brand.trim().to_lowercase()
}
