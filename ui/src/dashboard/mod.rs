//! Chart pages: the fetch pipeline, the view state controller and the page
//! component that ties them to the directory and the renderers.

mod controller;
mod page;
mod pipeline;
mod setup;

pub use controller::{ChartController, FetchTicket, RequestToken, Resolution, ViewState, Visibility};
pub use page::PresenceChartPage;
pub use pipeline::{load_chart, ChartError};
pub use setup::{use_dashboard_environment, DashboardEnvironment};
