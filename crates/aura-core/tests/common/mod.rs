//! Common test utilities for aura-core integration tests

pub mod doubles;

#[allow(unused_imports)]
pub use doubles::{logged_in_with, FailingMailer, ScriptedAdvisor};
