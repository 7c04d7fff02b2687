mod builder;
pub mod figure;
mod kind;

pub use builder::{build_figure, ChartParams};
pub use figure::Figure;
pub use kind::ChartKind;
