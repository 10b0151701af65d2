//! CLI command implementations.

pub mod init;
pub mod cities;
pub mod connection;
pub mod route;
pub mod export;
