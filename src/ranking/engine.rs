// src/ranking/engine.rs

use crate::config::RankingConfig;
use crate::domain::units;
use crate::domain::{Column, NormalizedListing, ScoredListing};
use crate::errors::PipelineError;
use tracing::{debug, warn};

/// Scores catalog rows with a weighted sum of their numeric criteria and
/// keeps the best `top_n` models of every brand.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    criteria: Vec<(Column, f64)>,
    top_n: usize,
    currency: String,
}

impl RankingEngine {
    pub fn new(config: &RankingConfig, currency: &str) -> Result<Self, PipelineError> {
        let criteria = config
            .criteria
            .iter()
            .map(|c| {
                Column::from_label(&c.column)
                    .map(|column| (column, c.weight))
                    .ok_or_else(|| PipelineError::UnknownCriterion(c.column.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            criteria,
            top_n: config.top_n,
            currency: currency.to_string(),
        })
    }

    /// Weighted sum of the de-annotated criteria. `Err` names the first
    /// column whose value is not a number or pushes the sum out of range.
    pub fn score(&self, listing: &NormalizedListing) -> Result<f64, Column> {
        self.criteria.iter().try_fold(0.0, |total, &(column, weight)| {
            units::strip_annotation(listing.get(column), &self.currency)
                .map(|value| total + weight * value)
                .filter(|sum: &f64| sum.is_finite())
                .ok_or(column)
        })
    }

    /// Scores every row, groups by brand in order of first appearance and
    /// returns each brand's best `top_n` rows, highest score first.
    pub fn rank(&self, listings: &[NormalizedListing]) -> Vec<ScoredListing> {
        let mut brands: Vec<(&str, Vec<(f64, &NormalizedListing)>)> = Vec::new();

        for listing in listings {
            let score = match self.score(listing) {
                Ok(score) => score,
                Err(column) => {
                    warn!(
                        "Dropping {} {}: {} '{}' is not numeric",
                        listing.brand(),
                        listing.model(),
                        column.label(),
                        listing.get(column)
                    );
                    continue;
                }
            };

            match brands.iter_mut().find(|(brand, _)| *brand == listing.brand()) {
                Some((_, rows)) => rows.push((score, listing)),
                None => brands.push((listing.brand(), vec![(score, listing)])),
            }
        }

        let mut out = Vec::new();
        for (brand, rows) in brands {
            let scores: Vec<f64> = rows.iter().map(|(score, _)| *score).collect();
            let normalized = normalize_scores(&scores);

            let mut scored: Vec<ScoredListing> = rows
                .into_iter()
                .zip(normalized)
                .map(|((score, listing), normalized_score)| ScoredListing {
                    listing: listing.clone(),
                    score,
                    normalized_score,
                    rating: rating(normalized_score),
                })
                .collect();

            // Stable: equal scores keep catalog order.
            scored.sort_by(|a, b| b.score.total_cmp(&a.score));
            scored.truncate(self.top_n);

            debug!("{brand}: kept {} of {} rows", scored.len(), scores.len());
            out.extend(scored);
        }

        out
    }
}

/// Min-max rescale into [0, 1]. When every score is equal the whole set
/// maps to 1.0.
pub fn normalize_scores(scores: &[f64]) -> Vec<f64> {
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if span == 0.0 {
        return vec![1.0; scores.len()];
    }

    // Finite scores far apart can still overflow the span.
    if !span.is_finite() {
        let (min, span) = (min / 2.0, max / 2.0 - min / 2.0);
        return scores.iter().map(|s| (s / 2.0 - min) / span).collect();
    }

    scores.iter().map(|s| (s - min) / span).collect()
}

/// 1-5 stars from a normalized score. Halves round to even.
pub fn rating(normalized_score: f64) -> u8 {
    (normalized_score * 4.0 + 1.0).round_ties_even().clamp(1.0, 5.0) as u8
}
