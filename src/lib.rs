pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod notify;
pub mod persistence;
pub mod pipeline;
pub mod sources;
pub mod tracking;
pub mod utils;
