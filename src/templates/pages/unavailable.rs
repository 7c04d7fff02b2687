use crate::templates::components::unavailable_banner;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn unavailable_page() -> Markup {
    desktop_layout(
        "Warsaw flat prices",
        html! {
            main class="container" {
                (unavailable_banner())
            }
        },
    )
}
