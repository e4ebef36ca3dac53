//! Common test utilities for aura-advisor integration tests

pub mod gemini_mock;

#[allow(unused_imports)]
pub use gemini_mock::{sample_plans, GeminiMockServer};
