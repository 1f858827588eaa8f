//! # Shoestock Architecture
//!
//! Shoestock keeps a small shoe inventory in a flat text file and lets a user
//! view, capture, search, restock and rank the records from a console.
//! The library holds all of the behaviour; the `shoestock` binary is a thin
//! client over it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the menu, renders tables          │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the RecordStore and the active config               │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user operation                            │
//! │  - Turns store outcomes into records + messages             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - RecordStore over a Resource trait                        │
//! │  - FileResource (production), InMemoryResource (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record handles
//!
//! Queries that single out a record ([`store::RecordStore::find_by_code`],
//! [`store::RecordStore::find_extremum`]) return a [`model::RecordId`] rather
//! than a reference. Mutations such as restocking take that handle, so the
//! caller never holds a borrow into the store between the two steps.
//!
//! ## Persistence
//!
//! Restocking always rewrites the inventory file. Capturing a new record only
//! does so when `autosave-capture` is enabled; otherwise the record is written
//! with the next restock.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Record store and resource implementations
//! - [`codec`]: Inventory file format
//! - [`model`]: Core data types (`Shoe`, `RecordId`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
