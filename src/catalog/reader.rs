// src/catalog/reader.rs

use crate::domain::{Column, RawListing};
use crate::errors::PipelineError;
use crate::spreadsheets::{read_sheet, SheetData};
use std::path::Path;

/// Reads the raw sales sheet. The brand column is checked first, then every
/// other source column; any gap aborts with a missing-column error.
pub fn read_raw_listings(path: &Path, sheet: Option<&str>) -> Result<Vec<RawListing>, PipelineError> {
    let sheet = read_sheet(path, sheet)?;
    raw_listings_from_sheet(&sheet)
}

pub fn raw_listings_from_sheet(sheet: &SheetData) -> Result<Vec<RawListing>, PipelineError> {
    let mut indexes = [0usize; 10];
    indexes[Column::BrandName.index()] = sheet.column_index(Column::BrandName.source())?;
    for column in Column::ALL {
        indexes[column.index()] = sheet.column_index(column.source())?;
    }

    Ok(sheet
        .rows
        .iter()
        .map(|row| RawListing {
            cells: std::array::from_fn(|i| SheetData::cell(row, indexes[i]).cloned()),
        })
        .collect())
}
