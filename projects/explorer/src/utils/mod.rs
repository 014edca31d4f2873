pub mod analytics;
pub mod chart;
pub mod format;
