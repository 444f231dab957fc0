//! Core types and pure functions for the atlas country/continent API.
//!
//! This crate follows the Functional Core pattern: domain types, request
//! payloads, merge functions, repository traits and the seed-dump parsing
//! functions live here, with no I/O. The `atlas` server crate provides the
//! imperative shell (HTTP, SQLite, network fetch).

pub mod geo;
pub mod seed;
pub mod storage;
