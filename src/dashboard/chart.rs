// src/dashboard/chart.rs

use crate::domain::units::strip_annotation;
use crate::domain::{Column, ScoredListing};
use crate::errors::ServerError;

/// Criteria offered in the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCriterion {
    Price,
    BatteryCapacity,
    ProcessorSpeed,
}

impl ChartCriterion {
    pub const ALL: [ChartCriterion; 3] = [
        ChartCriterion::Price,
        ChartCriterion::BatteryCapacity,
        ChartCriterion::ProcessorSpeed,
    ];

    pub fn column(self) -> Column {
        match self {
            ChartCriterion::Price => Column::Price,
            ChartCriterion::BatteryCapacity => Column::BatteryCapacity,
            ChartCriterion::ProcessorSpeed => Column::ProcessorSpeed,
        }
    }

    pub fn label(self) -> &'static str {
        self.column().label()
    }

    pub fn parse(label: &str) -> Result<Self, ServerError> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| ServerError::BadRequest(format!("Unknown criterion '{label}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Min,
    Max,
}

impl Extreme {
    pub fn as_str(self) -> &'static str {
        match self {
            Extreme::Min => "min",
            Extreme::Max => "max",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Extreme::Min => "Min",
            Extreme::Max => "Max",
        }
    }

    pub fn parse(kind: &str) -> Result<Self, ServerError> {
        match kind.trim() {
            "min" => Ok(Extreme::Min),
            "max" => Ok(Extreme::Max),
            other => Err(ServerError::BadRequest(format!(
                "Kind must be either 'min' or 'max', got '{other}'"
            ))),
        }
    }
}

/// One bar: the extremal model of a brand.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub brand: String,
    pub model: String,
    pub value: f64,
}

/// For every brand (in order of first appearance) the model with the lowest
/// or highest value of `criterion`. The first model wins a tie; rows whose
/// value is not numeric are ignored.
pub fn extremal_models(
    listings: &[ScoredListing],
    criterion: ChartCriterion,
    extreme: Extreme,
    currency: &str,
) -> Vec<ChartBar> {
    let mut bars: Vec<ChartBar> = Vec::new();

    for scored in listings {
        let listing = &scored.listing;
        let Some(value) = strip_annotation(listing.get(criterion.column()), currency) else {
            continue;
        };

        match bars.iter_mut().find(|bar| bar.brand == listing.brand()) {
            Some(bar) => {
                let better = match extreme {
                    Extreme::Min => value < bar.value,
                    Extreme::Max => value > bar.value,
                };
                if better {
                    bar.model = listing.model().to_string();
                    bar.value = value;
                }
            }
            None => bars.push(ChartBar {
                brand: listing.brand().to_string(),
                model: listing.model().to_string(),
                value,
            }),
        }
    }

    bars
}
