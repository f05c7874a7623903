pub mod commands;
pub mod run;
pub mod validate;
pub mod cache;

pub use commands::{Cli, Commands, LogFormat};
