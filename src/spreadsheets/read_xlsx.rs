// spreadsheets/read_xlsx.rs
use crate::domain::Cell;
use crate::errors::PipelineError;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// One worksheet: trimmed header row plus data rows.
#[derive(Debug, Clone)]
pub struct SheetData {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<Cell>>>,
}

impl SheetData {
    /// Position of `header`, or a missing-column error naming the sheet.
    pub fn column_index(&self, header: &str) -> Result<usize, PipelineError> {
        self.headers
            .iter()
            .position(|h| h == header)
            .ok_or_else(|| PipelineError::MissingColumn {
                sheet: self.name.clone(),
                column: header.to_string(),
            })
    }

    pub fn cell(row: &[Option<Cell>], index: usize) -> Option<&Cell> {
        row.get(index).and_then(Option::as_ref)
    }
}

/// Reads `sheet` (or the first sheet when `None`) of the workbook at `path`.
pub fn read_sheet(path: &Path, sheet: Option<&str>) -> Result<SheetData, PipelineError> {
    let mut workbook = open_workbook_auto(path)?;

    let name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| PipelineError::MissingSheet("<first sheet>".to_string()))?,
    };

    if !workbook.sheet_names().iter().any(|s| *s == name) {
        return Err(PipelineError::MissingSheet(name));
    }

    let range = workbook.worksheet_range(&name)?;
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .map(|header| {
            header
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect()
        })
        .unwrap_or_default();

    let rows = rows
        .map(|row| row.iter().map(to_cell).collect::<Vec<_>>())
        .filter(|row| row.iter().any(Option::is_some))
        .collect();

    Ok(SheetData { name, headers, rows })
}

fn to_cell(data: &Data) -> Option<Cell> {
    match data {
        Data::Empty | Data::Error(_) => None,
        Data::Int(value) => Some(Cell::Number(*value as f64)),
        Data::Float(value) => Some(Cell::Number(*value)),
        Data::String(text) if text.trim().is_empty() => None,
        Data::String(text) => Some(Cell::Text(text.clone())),
        other => Some(Cell::Text(other.to_string())),
    }
}
