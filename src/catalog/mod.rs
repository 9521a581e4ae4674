pub mod normalizer;
pub mod reader;

pub use normalizer::Normalizer;
pub use reader::read_raw_listings;

use crate::config::CatalogConfig;
use crate::domain::Column;
use crate::errors::PipelineError;
use crate::spreadsheets::write_catalog_xlsx;
use std::path::Path;
use tracing::info;

const PREVIEW_ROWS: usize = 5;

/// Stage one: raw sales workbook -> normalized catalog workbook.
/// Returns the number of rows written.
pub fn normalize_catalog(
    config: &CatalogConfig,
    input: &Path,
    output: &Path,
) -> Result<usize, PipelineError> {
    let raw = read_raw_listings(input, config.raw_sheet.as_deref())?;
    info!("Read {} raw rows from {}", raw.len(), input.display());

    let listings = Normalizer::new(config).normalize(&raw);
    info!(
        "Kept {} rows for brands [{}]",
        listings.len(),
        config.brands.join(", ")
    );

    for listing in listings.iter().take(PREVIEW_ROWS) {
        info!(
            "  {} | {} | {} | {}",
            listing.brand(),
            listing.model(),
            listing.get(Column::Price),
            listing.get(Column::BatteryCapacity)
        );
    }

    write_catalog_xlsx(&listings, output, &config.currency_symbol)?;
    info!("Processed data saved to {}", output.display());

    Ok(listings.len())
}
