pub mod config;
pub mod database;
pub mod logger;
pub mod server;
pub mod shell;
