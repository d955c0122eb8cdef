pub mod add;
pub mod calendar;
pub mod daily;
pub mod log;
pub mod pivot;
pub mod session;
