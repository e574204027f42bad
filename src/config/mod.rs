//! Configuration module for moisson
//!
//! Every setting has a built-in default pointing at the dealer site, so the
//! binary runs with no arguments. A TOML file, when given, replaces those
//! defaults and is validated before use.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, HttpConfig, OutputConfig, PacingConfig, SiteConfig};
pub use validation::validate;
