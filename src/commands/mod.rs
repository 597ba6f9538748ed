//! CLI commands for rota

pub mod compare;
pub mod config;
pub mod dispatch;
pub mod edges;
pub mod init;
pub mod neighbors;
pub mod route;
pub mod vertices;
