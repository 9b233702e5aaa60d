//! # neoquery Architecture
//!
//! neoquery loads near-Earth objects (NEOs) and their recorded close
//! approaches to Earth, links the two into one in-memory graph, and answers
//! multi-criteria queries over the approaches. The binary is a thin client:
//! everything it does goes through the library.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the linked database, dispatches to commands         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - inspect, query, export; returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: database (linking), filters, query, model            │
//! │  Adapters: extract (loading), write (CSV/JSON output)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Query pipeline
//!
//! 1. [`extract`] loads objects and approaches independently.
//! 2. [`database::NeoDatabase::new`] links every approach to its object.
//! 3. [`filters::create_filters`] turns a [`filters::Criteria`] into filters.
//! 4. [`query::query`] lazily keeps approaches passing every filter, and
//!    [`query::limit`] truncates without pulling further.
//! 5. [`write`] serializes whatever the consumer collected.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: inspect, query and export
//! - [`database`]: The linked object/approach graph
//! - [`filters`]: Attribute filters and the filter factory
//! - [`query`]: Lazy query and limit adapters
//! - [`model`]: `NearEarthObject`, `CloseApproach`, `LinkedApproach`
//! - [`extract`] / [`write`]: File loading and result output
//! - [`config`]: Configuration management
//! - [`helpers`]: Date parsing and formatting
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod filters;
pub mod helpers;
pub mod model;
pub mod query;
pub mod write;
