pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod items;
pub mod log;
pub mod show;
