use crate::domain::{Column, ScoredListing};
use crate::templates::components::image_slot;
use maud::{html, Markup};

const DETAIL_COLUMNS: [Column; 8] = [
    Column::Price,
    Column::BatteryCapacity,
    Column::Ram,
    Column::Rom,
    Column::Chipset,
    Column::ProcessorSpeed,
    Column::FrontCamera,
    Column::RearCamera,
];

/// Detail cards for one brand's models. Images load separately.
pub fn brand_details(brand: &str, listings: &[&ScoredListing]) -> Markup {
    html! {
        div id="brand-details" {
            h2 { "Models of " (brand) }
            @if listings.is_empty() {
                p { "No models for this brand." }
            }
            @for scored in listings {
                section class="model" {
                    div {
                        h3 { "Model: " (scored.listing.model()) }
                        dl {
                            @for column in DETAIL_COLUMNS {
                                dt { (column.label()) ":" }
                                dd { (scored.listing.get(column)) }
                            }
                            dt { "Rating:" }
                            dd { (scored.rating) " / 5" }
                        }
                    }
                    (image_slot(scored.listing.model()))
                }
            }
        }
    }
}
