use crate::charts::{ChartKind, Figure};
use crate::templates::components::PRICE_CONTROLS_ID;
use maud::{html, Markup, PreEscaped};

/// Empty container that loads its chart fragment once the page is up.
///
/// The district/area chart also reloads whenever a price control changes.
pub fn chart_slot(kind: ChartKind) -> Markup {
    let slug = kind.slug();
    let trigger = if kind.uses_controls() {
        format!("load, change from:#{PRICE_CONTROLS_ID}")
    } else {
        "load".to_string()
    };

    html! {
        div class="chart" {
            @if let Some(heading) = kind.heading() {
                h4 { (heading) }
            }
            div
                id=(slug)
                hx-get=(format!("/charts/{slug}"))
                hx-trigger=(trigger)
                hx-include=[kind.uses_controls().then(|| format!("#{PRICE_CONTROLS_ID}"))]
                hx-swap="innerHTML"
            {
                p class="loading" { "Loading…" }
            }
        }
    }
}

/// Plot target plus the script handing the figure to Plotly.
pub fn chart_fragment(kind: ChartKind, figure: &Figure) -> Result<Markup, serde_json::Error> {
    let plot_id = format!("{}-plot", kind.slug());
    // "</" would end the inline script early.
    let figure_json = serde_json::to_string(figure)?.replace("</", "<\\/");

    let script = format!(
        "(function () {{ var fig = {figure_json}; \
         Plotly.react(\"{plot_id}\", fig.data, fig.layout, {{responsive: true}}); }})();"
    );

    Ok(html! {
        div id=(plot_id) class="plot" {}
        script { (PreEscaped(script)) }
    })
}
