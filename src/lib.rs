//! In-memory people record HTTP API.
//!
//! Exposes a small mutable collection of person records (`id`, `name`, `age`)
//! over HTTP+JSON: a health probe, a list endpoint, and a create endpoint.
//! Records live only for the lifetime of the process; the store is seeded
//! with two records at startup and identifiers are assigned monotonically.
//!
//! # Endpoints
//!
//! ```text
//! GET  /status   -> 200 {"status":"ok"}
//! GET  /people   -> 200 [{"id":1,"name":"Alice","age":30}, ...]
//! POST /people   -> 201 {"id":3,"name":"Carol","age":22}
//! GET  /metrics  -> Prometheus text exposition
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Store and request error types
//! - [`people`]: Person records and the in-memory store
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Counters and the Prometheus exporter
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod people;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, StoreError};
