//! Shared helpers for the integration tests.
//!
//! Each test binary pulls this in with `mod common;`, so not every helper is
//! used by every binary.
#![allow(dead_code)]

pub mod helpers;
pub mod scenario;
