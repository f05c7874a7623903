pub mod store;

pub use store::{CacheStore, YamlCacheStore};
