pub mod cli;
pub mod config;
pub mod context;
pub mod logging;

pub use config::{ZtpConfig, load_config, parse_config_content};
pub use context::AppContext;
