// src/domain/listing.rs

use crate::domain::units::{self, Unit};

/// Columns of the normalized catalog, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    BrandName,
    Model,
    Chipset,
    ProcessorSpeed,
    BatteryCapacity,
    Price,
    Ram,
    Rom,
    FrontCamera,
    RearCamera,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::BrandName,
        Column::Model,
        Column::Chipset,
        Column::ProcessorSpeed,
        Column::BatteryCapacity,
        Column::Price,
        Column::Ram,
        Column::Rom,
        Column::FrontCamera,
        Column::RearCamera,
    ];

    /// Display label used as the header of the normalized and ranked sheets.
    pub fn label(self) -> &'static str {
        match self {
            Column::BrandName => "Brand Name",
            Column::Model => "Model",
            Column::Chipset => "Chipset",
            Column::ProcessorSpeed => "Processor Speed",
            Column::BatteryCapacity => "Battery Capacity",
            Column::Price => "Price",
            Column::Ram => "RAM",
            Column::Rom => "ROM",
            Column::FrontCamera => "Front Camera",
            Column::RearCamera => "Rear Camera",
        }
    }

    /// Header of the column in the raw sales sheet.
    pub fn source(self) -> &'static str {
        match self {
            Column::BrandName => "brand_name",
            Column::Model => "model",
            Column::Chipset => "processor_brand",
            Column::ProcessorSpeed => "processor_speed",
            Column::BatteryCapacity => "battery_capacity",
            Column::Price => "price",
            Column::Ram => "ram_capacity",
            Column::Rom => "internal_memory",
            Column::FrontCamera => "primary_camera_front",
            Column::RearCamera => "primary_camera_rear",
        }
    }

    pub fn unit(self) -> Unit {
        match self {
            Column::BrandName | Column::Model | Column::Chipset => Unit::Text,
            Column::ProcessorSpeed => Unit::Suffix("GHz"),
            Column::BatteryCapacity => Unit::Suffix("mAh"),
            Column::Price => Unit::Currency,
            Column::Ram | Column::Rom => Unit::Suffix("GB"),
            Column::FrontCamera | Column::RearCamera => Unit::Plain,
        }
    }

    pub fn from_label(label: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.label() == label.trim())
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single spreadsheet cell as read from disk.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn to_display(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Number(value) => units::display_number(*value),
        }
    }
}

/// One row of the raw sales sheet. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawListing {
    pub cells: [Option<Cell>; 10],
}

impl RawListing {
    pub fn get(&self, column: Column) -> Option<&Cell> {
        self.cells[column.index()].as_ref()
    }

    pub fn with(mut self, column: Column, cell: Cell) -> Self {
        self.cells[column.index()] = Some(cell);
        self
    }
}

/// A catalog row after normalization: display strings in `Column::ALL` order,
/// absent values replaced by `units::ABSENT`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedListing {
    pub values: [String; 10],
}

impl NormalizedListing {
    pub fn get(&self, column: Column) -> &str {
        &self.values[column.index()]
    }

    pub fn brand(&self) -> &str {
        self.get(Column::BrandName)
    }

    pub fn model(&self) -> &str {
        self.get(Column::Model)
    }
}

/// A normalized row carrying its ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredListing {
    pub listing: NormalizedListing,
    pub score: f64,
    pub normalized_score: f64,
    pub rating: u8,
}

pub const SCORE_LABEL: &str = "Score";
pub const NORMALIZED_SCORE_LABEL: &str = "Normalized Score";
pub const RATING_LABEL: &str = "Rating";
