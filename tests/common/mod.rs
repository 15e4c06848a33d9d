//! Common test utilities for Strata scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated project in a temp directory
//! - Helpers to lay out feature-sliced trees and run the `strata` binary
//! - Fixtures: reusable source snippets

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
