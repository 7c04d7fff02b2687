use serde::Serialize;
use serde_json::Value;

/// A Plotly figure: `Plotly.newPlot(el, figure.data, figure.layout)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter {
        name: String,
        mode: String,
        x: Vec<Value>,
        y: Vec<f64>,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
    },
}

impl Trace {
    pub fn line(name: impl Into<String>, x: Vec<Value>, y: Vec<f64>) -> Self {
        Trace::Scatter {
            name: name.into(),
            mode: "lines".into(),
            x,
            y,
        }
    }

    pub fn line_with_markers(name: impl Into<String>, x: Vec<Value>, y: Vec<f64>) -> Self {
        Trace::Scatter {
            name: name.into(),
            mode: "markers+lines".into(),
            x,
            y,
        }
    }

    pub fn pie(labels: Vec<String>, values: Vec<u64>) -> Self {
        Trace::Pie { labels, values }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
    pub x: f64,
    pub xanchor: &'static str,
}

impl Title {
    /// Centered 24px heading, the house style of every chart.
    pub fn centered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: Font { size: 24 },
            x: 0.5,
            xanchor: "center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    pub showgrid: bool,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: AxisTitle { text: text.into() },
            range: None,
            showgrid: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

/// Free-floating text placed in paper coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
    pub showarrow: bool,
}

impl Annotation {
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            xref: "paper",
            yref: "paper",
            x: 0.5,
            y: 0.5,
            showarrow: false,
        }
    }
}
