use crate::dashboard::{ChartBar, ChartCriterion, Extreme};
use crate::domain::ScoredListing;
use crate::templates::components::{bar_chart, brand_details, ranked_table};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub top_n: usize,
    pub listings: &'a [ScoredListing],
    pub brands: Vec<&'a str>,
    pub selected_brand: Option<&'a str>,
    pub brand_listings: Vec<&'a ScoredListing>,
    pub criterion: ChartCriterion,
    pub extreme: Extreme,
    pub bars: Vec<ChartBar>,
    pub source: String,
    pub loaded_at: String,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let title = format!("Top {} Smartphone Models per Brand", vm.top_n);

    desktop_layout(
        &title,
        html! {
            main {
                section class="card" {
                    h1 { (title) }
                    p style="color: #6b7280;" {
                        (vm.listings.len()) " models from " code { (vm.source) }
                        " · loaded " (vm.loaded_at) " · "
                        a href="/download" { "Download spreadsheet" }
                    }
                    (ranked_table(vm.listings))
                }

                section class="card" {
                    label for="brand" { "Select Brand: " }
                    select
                        name="brand"
                        id="brand"
                        hx-get="/brand"
                        hx-target="#brand-details"
                        hx-swap="outerHTML"
                        hx-trigger="change"
                    {
                        @for brand in &vm.brands {
                            option value=(brand) selected[vm.selected_brand == Some(*brand)] { (brand) }
                        }
                    }

                    @match vm.selected_brand {
                        Some(brand) => { (brand_details(brand, &vm.brand_listings)) }
                        None => { div id="brand-details" { p { "No brands to show." } } }
                    }
                }

                section class="card" {
                    (criteria_form(vm.criterion, vm.extreme))
                    (bar_chart(vm.criterion, vm.extreme, &vm.bars))
                }
            }
        },
    )
}

fn criteria_form(criterion: ChartCriterion, extreme: Extreme) -> Markup {
    html! {
        form
            hx-get="/chart"
            hx-target="#chart"
            hx-swap="outerHTML"
            hx-trigger="change"
            style="display: flex; gap: 16px; align-items: center; margin-bottom: 12px;"
        {
            label {
                "Select Criteria for Visualization: "
                select name="criterion" {
                    @for choice in ChartCriterion::ALL {
                        option value=(choice.label()) selected[choice == criterion] { (choice.label()) }
                    }
                }
            }
            label {
                "Select Min or Max: "
                select name="kind" {
                    @for choice in [Extreme::Min, Extreme::Max] {
                        option value=(choice.as_str()) selected[choice == extreme] { (choice.as_str()) }
                    }
                }
            }
        }
    }
}
