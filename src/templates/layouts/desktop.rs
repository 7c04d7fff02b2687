use maud::{html, Markup, PreEscaped, DOCTYPE};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f3b4d; }
.banner { background-color: #1f3b4d; color: #fff; height: 200px; display: flex;
          flex-direction: column; justify-content: center; text-align: center; }
.banner h1 { font-size: 36px; margin: 0; }
.banner p { font-size: 16px; }
.section-title { text-align: center; font-size: 30px; padding-top: 15px; }
.row { display: flex; flex-wrap: wrap; }
.row > .half { flex: 1 1 480px; }
.chart { padding: 25px; min-height: 450px; }
.chart h4 { text-align: center; }
.controls { display: flex; gap: 50px; padding: 20px 150px 0; align-items: flex-end; }
.controls label { display: block; margin-bottom: 6px; }
.unavailable { border: 1px solid #dc2626; border-radius: 6px; padding: 1rem; color: #444; }
.card { padding: 10px 25px; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
                script src=(PLOTLY_JS) {}
                script src=(HTMX_JS) defer {}
            }
            body {
                header class="banner" {
                    h1 { "Analysis of flat prices in Warsaw, Poland" }
                    p { "An interactive dashboard displaying apartment prices in the districts of Warsaw in real-time" }
                }
                (content)
            }
        }
    }
}
