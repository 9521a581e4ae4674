pub mod catalog_xlsx;
pub mod ranked_xlsx;
pub mod read_xlsx;

pub use catalog_xlsx::{read_catalog_xlsx, write_catalog_xlsx};
pub use ranked_xlsx::{ranked_workbook, read_ranked_xlsx, write_ranked_xlsx};
pub use read_xlsx::{read_sheet, SheetData};

pub const NORMALIZED_SHEET: &str = "Processed Data";
pub const RANKED_SHEET: &str = "Top Models";
