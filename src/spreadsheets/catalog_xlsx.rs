use crate::domain::units::ABSENT;
use crate::domain::{Cell, Column, NormalizedListing};
use crate::errors::PipelineError;
use crate::spreadsheets::read_xlsx::{read_sheet, SheetData};
use crate::spreadsheets::NORMALIZED_SHEET;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

/// Writes the normalized catalog to a fresh workbook at `path`.
pub fn write_catalog_xlsx(
    listings: &[NormalizedListing],
    path: &Path,
    currency: &str,
) -> Result<(), PipelineError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(NORMALIZED_SHEET)?;

    write_display_columns(worksheet, listings.iter(), currency)?;

    workbook.save(path)?;
    Ok(())
}

/// Reads the normalized catalog back. Every display column must be present.
pub fn read_catalog_xlsx(path: &Path) -> Result<Vec<NormalizedListing>, PipelineError> {
    let sheet = read_sheet(path, Some(NORMALIZED_SHEET))?;
    let indexes = display_indexes(&sheet)?;

    Ok(sheet
        .rows
        .iter()
        .map(|row| listing_from_row(row, &indexes))
        .collect())
}

/// Header row, widths and number formats, then one string cell per value.
pub(crate) fn write_display_columns<'a>(
    worksheet: &mut Worksheet,
    listings: impl Iterator<Item = &'a NormalizedListing>,
    currency: &str,
) -> Result<(), XlsxError> {
    let header_format = Format::new().set_bold();

    for column in Column::ALL {
        let col = column.index() as u16;
        worksheet.write_string_with_format(0, col, column.label(), &header_format)?;
        worksheet.set_column_width(col, column_width(column))?;
        if let Some(num_format) = column.unit().num_format(currency) {
            worksheet.set_column_format(col, &Format::new().set_num_format(num_format))?;
        }
    }

    for (i, listing) in listings.enumerate() {
        let r = (i + 1) as u32;
        for column in Column::ALL {
            worksheet.write_string(r, column.index() as u16, listing.get(column))?;
        }
    }

    Ok(())
}

pub(crate) fn display_indexes(sheet: &SheetData) -> Result<[usize; 10], PipelineError> {
    let mut indexes = [0usize; 10];
    for column in Column::ALL {
        indexes[column.index()] = sheet.column_index(column.label())?;
    }
    Ok(indexes)
}

pub(crate) fn listing_from_row(row: &[Option<Cell>], indexes: &[usize; 10]) -> NormalizedListing {
    NormalizedListing {
        values: std::array::from_fn(|i| {
            SheetData::cell(row, indexes[i])
                .map(Cell::to_display)
                .unwrap_or_else(|| ABSENT.to_string())
        }),
    }
}

fn column_width(column: Column) -> f64 {
    match column {
        Column::Model => 28.0,
        Column::BatteryCapacity => 20.0,
        Column::Price | Column::ProcessorSpeed => 15.0,
        Column::Ram | Column::Rom => 10.0,
        _ => 14.0,
    }
}
