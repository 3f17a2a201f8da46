//! Application layer containing the core orchestration.
//!
//! This module defines the `OrderSession` driving the interactive
//! read-validate-accumulate loop, and the `OrderProcessor` which simulates
//! per-item processing with `tokio` tasks and channels.

pub mod processing;
pub mod session;
