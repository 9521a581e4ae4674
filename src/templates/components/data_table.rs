use crate::domain::listing::{NORMALIZED_SCORE_LABEL, RATING_LABEL, SCORE_LABEL};
use crate::domain::{Column, ScoredListing};
use maud::{html, Markup};

/// The whole ranked table, scrollable.
pub fn ranked_table(listings: &[ScoredListing]) -> Markup {
    html! {
        div class="table-scroll" {
            table {
                thead {
                    tr {
                        @for column in Column::ALL {
                            th scope="col" { (column.label()) }
                        }
                        th scope="col" { (SCORE_LABEL) }
                        th scope="col" { (NORMALIZED_SCORE_LABEL) }
                        th scope="col" { (RATING_LABEL) }
                    }
                }
                tbody {
                    @for scored in listings {
                        tr {
                            @for column in Column::ALL {
                                td { (scored.listing.get(column)) }
                            }
                            td { (format!("{:.2}", scored.score)) }
                            td { (format!("{:.3}", scored.normalized_score)) }
                            td title=(format!("{} / 5", scored.rating)) { (stars(scored.rating)) }
                        }
                    }
                }
            }
        }
    }
}

fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
