//! Configuration layer for API-Probe.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The only required field is `url`; CLI takes precedence over TOML for it.
//! Optional fields with defaults (`method`, `timeout`) resolve as CLI
//! explicit, then TOML, then built-in default.
//!
//! For headers, TOML entries are applied first and CLI `--header` values
//! override entries with the same name. The `--bearer` convenience flag
//! (CLI wins over TOML) sets the `Authorization` header last.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
