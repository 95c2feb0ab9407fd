pub mod config;
pub mod handlers;
pub mod routes;
pub mod server;
