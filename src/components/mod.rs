pub mod chart;
pub mod dashboard;
pub mod division_table;
pub mod enrollment_table;
pub mod header;
pub mod leaderboard;
pub mod marketing;
pub mod status;
pub mod summary;

pub use dashboard::{DashboardPage, DashboardView};
pub use header::Header;
pub use marketing::MarketingPage;
