//! # vzremote-common
//!
//! Error definitions, domain types, host configuration, and constants
//! shared by the vzremote crates.
//!
//! Leaf crate: nothing here depends on another workspace member, so the
//! session and OpenVZ layers can both build on the same primitives.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
