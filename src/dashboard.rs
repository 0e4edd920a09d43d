//! Stats dashboard
//!
//! Renders the per-difficulty progress gauges and the submission summary
//! cards for the most recently fetched user.

mod dashboard_render;
mod dashboard_state;

pub use dashboard_render::render_dashboard;
pub use dashboard_state::DashboardState;
