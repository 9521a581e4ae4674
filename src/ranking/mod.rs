pub mod engine;

pub use engine::RankingEngine;

use crate::config::AppConfig;
use crate::errors::PipelineError;
use crate::spreadsheets::{read_catalog_xlsx, write_ranked_xlsx};
use std::path::Path;
use tracing::info;

/// Stage two: normalized catalog -> top models per brand.
/// Returns the number of rows written.
pub fn rank_catalog(config: &AppConfig, input: &Path, output: &Path) -> Result<usize, PipelineError> {
    let engine = RankingEngine::new(&config.ranking, &config.catalog.currency_symbol)?;

    let listings = read_catalog_xlsx(input)?;
    info!("Read {} catalog rows from {}", listings.len(), input.display());

    let ranked = engine.rank(&listings);
    info!(
        "Selected {} rows (top {} per brand)",
        ranked.len(),
        config.ranking.top_n
    );

    write_ranked_xlsx(&ranked, output, &config.catalog.currency_symbol)?;
    info!("Top models data saved to {}", output.display());

    Ok(ranked.len())
}
