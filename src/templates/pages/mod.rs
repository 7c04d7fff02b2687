pub mod dashboard;
pub mod unavailable;

pub use dashboard::{dashboard_page, DashboardVm};
pub use unavailable::unavailable_page;
