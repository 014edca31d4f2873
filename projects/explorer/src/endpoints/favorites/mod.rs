pub mod list;
pub mod read;
pub mod remove;
pub mod toggle;
