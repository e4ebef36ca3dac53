//! Aura Utils - shared helpers

pub mod config;

pub use config::{env_var, env_var_any, load_env};
