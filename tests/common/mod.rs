//! Common test utilities for microtopo CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and config directories plus a CLI runner
//! - Fixtures: topology documents shared between tests

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
