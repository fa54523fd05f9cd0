//! Startup: configuration, logging and dependency wiring.

pub mod config;
pub mod runtime;
pub mod tracing;

pub use config::{default_data_dir, load_config, resolve_config};
pub use runtime::AppRuntime;
pub use self::tracing::init_tracing_subscriber;
