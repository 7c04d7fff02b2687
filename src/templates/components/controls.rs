use crate::domain::{PriceSelection, SelectOption};
use maud::{html, Markup};

pub const PRICE_CONTROLS_ID: &str = "price-controls";

/// District and area dropdowns plus the axis-lock toggle.
pub fn price_controls(
    districts: &[SelectOption],
    areas: &[SelectOption],
    selection: &PriceSelection,
) -> Markup {
    html! {
        form id=(PRICE_CONTROLS_ID) class="controls" onsubmit="return false;" {
            div {
                label for="district" { "Select district" }
                select name="district" id="district" {
                    @for opt in districts {
                        option value=(opt.value) selected[opt.value == selection.district] { (opt.label) }
                    }
                }
            }
            div {
                label for="area" { "Select a flat size (square metres)" }
                select name="area" id="area" {
                    @for opt in areas {
                        option value=(opt.value) selected[opt.value == selection.area] { (opt.label) }
                    }
                }
            }
            div {
                label for="lock" { "Fix price axis (easier to compare)" }
                input type="checkbox" name="lock" id="lock" value="true" checked[selection.axis_lock];
            }
        }
    }
}
