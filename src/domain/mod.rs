pub mod listing;
pub mod units;

pub use listing::{Cell, Column, NormalizedListing, RawListing, ScoredListing};
