pub mod schema;
pub mod setup;

pub use schema::{Config, DefaultConfig};
pub use setup::{run_setup, save_language_to_config};
