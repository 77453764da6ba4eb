pub mod dashboard;
pub mod enrollment;
pub mod error;
pub mod program;
pub mod stats;
