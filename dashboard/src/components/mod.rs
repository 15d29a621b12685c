//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod action_bar;
mod financial_dashboard;
mod header;
mod status_panel;

pub use action_bar::ActionBar;
pub use financial_dashboard::FinancialDashboard;
pub use header::Header;
pub use status_panel::StatusPanelView;
