pub mod data;
pub mod error;
pub mod io;
pub mod store;

pub use data::{Config, Field};
pub use error::ConfigError;
pub use store::ConfigStore;
