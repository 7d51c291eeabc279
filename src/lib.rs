//! Library crate for user-dashboard.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state, request orchestration and the update loop (`app`)
//! - Command-line flags and config file lookup (`config`)
//! - Error and result types (`error`)
//! - Exact name search over a record pool (`search`)
//! - The random-user API client (`source`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `user-dashboard` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod app;
pub mod config;
pub mod error;
pub mod search;
pub mod source;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{FetchError, Result};
