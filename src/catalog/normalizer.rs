// src/catalog/normalizer.rs

use crate::config::{brand_key, CatalogConfig};
use crate::domain::units::{self, ABSENT};
use crate::domain::{Cell, Column, NormalizedListing, RawListing};

/// Filters raw listings to the allow-list and turns them into display rows.
pub struct Normalizer<'a> {
    config: &'a CatalogConfig,
    /// Lower-cased brands: priority brand first, then the declared order.
    order: Vec<String>,
}

impl<'a> Normalizer<'a> {
    pub fn new(config: &'a CatalogConfig) -> Self {
        let priority = brand_key(&config.priority_brand);
        let mut order = vec![priority.clone()];
        order.extend(
            config
                .brands
                .iter()
                .map(|b| brand_key(b))
                .filter(|b| *b != priority),
        );

        Self { config, order }
    }

    /// Keeps allowed brands, priority brand first. Rows of one brand keep
    /// their input order.
    pub fn normalize(&self, raw: &[RawListing]) -> Vec<NormalizedListing> {
        let mut ranked: Vec<(usize, NormalizedListing)> = raw
            .iter()
            .filter_map(|listing| {
                let rank = self.brand_rank(listing.get(Column::BrandName)?)?;
                Some((rank, self.normalize_listing(listing)))
            })
            .collect();

        // sort_by_key is stable
        ranked.sort_by_key(|(rank, _)| *rank);
        ranked.into_iter().map(|(_, listing)| listing).collect()
    }

    fn brand_rank(&self, brand: &Cell) -> Option<usize> {
        let brand = brand_key(&brand.to_display());
        self.order.iter().position(|b| *b == brand)
    }

    fn normalize_listing(&self, raw: &RawListing) -> NormalizedListing {
        let currency = &self.config.currency_symbol;

        NormalizedListing {
            values: Column::ALL.map(|column| {
                let Some(cell) = raw.get(column) else {
                    return ABSENT.to_string();
                };
                let shown = units::annotate(cell, column.unit(), currency);
                match column {
                    Column::BrandName | Column::Chipset => units::capitalize(&shown),
                    _ => shown,
                }
            }),
        }
    }
}
