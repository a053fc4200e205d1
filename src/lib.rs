pub mod classifier;
pub mod config;
pub mod consts;
pub mod emotion;
pub mod gateway;
pub mod server;
