pub mod parser;
pub mod schema;
pub mod types;
pub mod credentials;

pub use types::*;
pub use parser::{parse_config, DEFAULT_CONFIG_PATH};
