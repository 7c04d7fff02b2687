use crate::charts::ChartKind;
use crate::domain::{DailyCounter, PriceSelection, SelectOption};
use crate::feed::Dates;
use crate::templates::components::{card, chart_slot, price_controls};
use crate::templates::desktop_layout;
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub struct DashboardVm {
    pub dates: Option<Dates>,
    pub districts: Vec<SelectOption>,
    pub areas: Vec<SelectOption>,
    pub selection: PriceSelection,
    pub data_url: String,
    pub fetched_at: DateTime<Utc>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Warsaw flat prices",
        html! {
            main {
                @if let Some(dates) = &vm.dates {
                    h1 class="section-title" { "From " (dates.min_date) " to " (dates.max_date) }
                }

                div class="row" {
                    div class="half" { (chart_slot(ChartKind::FlatsPerLocation)) }
                    div class="half" { (chart_slot(ChartKind::FlatsPerArea)) }
                }

                @for counter in DailyCounter::ALL {
                    (chart_slot(ChartKind::Daily(counter)))
                }
                (chart_slot(ChartKind::DistrictPrices))

                h1 class="section-title" { "Select district and flat area to see average prices" }
                (price_controls(&vm.districts, &vm.areas, &vm.selection))
                (chart_slot(ChartKind::DistrictAreaPrice))

                (card("Useful links", html! {
                    ul {
                        li { "JSON data: " a href=(vm.data_url) { (vm.data_url) } }
                        li { "Snapshot fetched at " (vm.fetched_at.format("%Y-%m-%d %H:%M UTC").to_string()) }
                    }
                }))
            }
        },
    )
}
