pub mod grid;
pub mod messages;
