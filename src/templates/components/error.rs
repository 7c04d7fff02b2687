use maud::{html, Markup, DOCTYPE};

const ERROR_STYLE: &str = "
    body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }
    h1 { font-size: 2rem; margin-bottom: 1rem; }
    p { font-size: 1.1rem; color: #444; }
";

/// Build a basic HTML error page
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style { (ERROR_STYLE) }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to the dashboard" } }
            }
        }
    }
}

/// Stand-in for a chart whose data could not be loaded, with a retry button.
pub fn unavailable_card(retry_url: &str, target_id: &str, include: Option<&str>) -> Markup {
    html! {
        div class="unavailable" {
            p { "Data unavailable. The listings dataset could not be loaded." }
            button
                type="button"
                hx-get=(retry_url)
                hx-target=(format!("#{target_id}"))
                hx-include=[include]
                hx-swap="innerHTML"
            { "Retry" }
        }
    }
}

pub fn unavailable_banner() -> Markup {
    html! {
        div class="unavailable" {
            p { "Data unavailable. The listings dataset could not be loaded right now." }
            a href="/" { "Retry" }
        }
    }
}
