use crate::domain::listing::{NORMALIZED_SCORE_LABEL, RATING_LABEL, SCORE_LABEL};
use crate::domain::{Cell, ScoredListing};
use crate::errors::PipelineError;
use crate::spreadsheets::catalog_xlsx::{display_indexes, listing_from_row, write_display_columns};
use crate::spreadsheets::read_xlsx::{read_sheet, SheetData};
use crate::spreadsheets::RANKED_SHEET;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;
use tracing::warn;

const SCORE_COL: u16 = 10;
const NORMALIZED_SCORE_COL: u16 = 11;
const RATING_COL: u16 = 12;

/// Builds the "Top Models" workbook in memory.
pub fn ranked_workbook(listings: &[ScoredListing], currency: &str) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(RANKED_SHEET)?;

    write_display_columns(worksheet, listings.iter().map(|s| &s.listing), currency)?;

    let header_format = Format::new().set_bold();
    let score_format = Format::new().set_num_format("0.00");
    let normalized_format = Format::new().set_num_format("0.000");
    let rating_format = Format::new().set_num_format("0");

    for (col, label) in [
        (SCORE_COL, SCORE_LABEL),
        (NORMALIZED_SCORE_COL, NORMALIZED_SCORE_LABEL),
        (RATING_COL, RATING_LABEL),
    ] {
        worksheet.write_string_with_format(0, col, label, &header_format)?;
        worksheet.set_column_width(col, 16)?;
    }

    for (i, scored) in listings.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_number_with_format(r, SCORE_COL, scored.score, &score_format)?;
        worksheet.write_number_with_format(
            r,
            NORMALIZED_SCORE_COL,
            scored.normalized_score,
            &normalized_format,
        )?;
        worksheet.write_number_with_format(r, RATING_COL, scored.rating as f64, &rating_format)?;
    }

    Ok(workbook)
}

pub fn write_ranked_xlsx(
    listings: &[ScoredListing],
    path: &Path,
    currency: &str,
) -> Result<(), PipelineError> {
    let mut workbook = ranked_workbook(listings, currency)?;
    workbook.save(path)?;
    Ok(())
}

/// Reads the ranked table. Rows whose score cells are not numbers are skipped.
pub fn read_ranked_xlsx(path: &Path) -> Result<Vec<ScoredListing>, PipelineError> {
    let sheet = read_sheet(path, Some(RANKED_SHEET))?;
    let indexes = display_indexes(&sheet)?;
    let score = sheet.column_index(SCORE_LABEL)?;
    let normalized = sheet.column_index(NORMALIZED_SCORE_LABEL)?;
    let rating = sheet.column_index(RATING_LABEL)?;

    let mut out = Vec::with_capacity(sheet.rows.len());
    for (i, row) in sheet.rows.iter().enumerate() {
        let numbers = (
            number_at(row, score),
            number_at(row, normalized),
            number_at(row, rating),
        );
        match numbers {
            (Some(score), Some(normalized_score), Some(rating)) => out.push(ScoredListing {
                listing: listing_from_row(row, &indexes),
                score,
                normalized_score,
                rating: rating.round().clamp(1.0, 5.0) as u8,
            }),
            _ => warn!("Skipping ranked row {}: score columns are not numeric", i + 2),
        }
    }

    Ok(out)
}

fn number_at(row: &[Option<Cell>], index: usize) -> Option<f64> {
    match SheetData::cell(row, index)? {
        Cell::Number(value) => Some(*value),
        Cell::Text(text) => text.trim().parse().ok(),
    }
}
