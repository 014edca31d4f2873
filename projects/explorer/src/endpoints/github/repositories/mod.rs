pub mod analytics;
pub mod chart;
pub mod search;
pub mod trending;
