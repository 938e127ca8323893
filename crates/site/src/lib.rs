//! Coffee Compass site library.
//!
//! This crate provides the site functionality as a library,
//! allowing it to be tested and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod places;
pub mod routes;
pub mod state;
