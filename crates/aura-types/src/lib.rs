//! Aura Types - Shared domain types
//!
//! This crate contains domain types used across the AuraStream crates:
//! - User identity and subscription status
//! - Plans, tiers and billing cycles
//! - Usage history and money formatting

pub mod error;
pub mod money;
pub mod plan;
pub mod subscription;
pub mod usage;
pub mod user;

pub use error::*;
pub use money::*;
pub use plan::*;
pub use subscription::*;
pub use usage::*;
pub use user::*;
