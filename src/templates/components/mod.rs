pub mod card;
pub mod chart;
pub mod controls;
pub mod error;

pub use card::card;
pub use chart::{chart_fragment, chart_slot};
pub use controls::{price_controls, PRICE_CONTROLS_ID};
pub use error::{error_page, unavailable_banner, unavailable_card};
