pub mod favorites;
pub mod github;
pub mod theme;
