pub mod client;
pub mod config;
pub mod logging;
pub mod rpc;
pub mod server;
pub mod store;
pub mod ui;
