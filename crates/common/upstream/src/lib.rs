pub mod beacon;
pub mod config;
pub mod error;
pub mod execution;
pub mod explorer;
pub mod http_client;
pub mod json;
pub mod source;
