//! In-memory record service.
//!
//! A single ordered collection of JSON records exposed over HTTP at
//! `/api/data`, with a fixed artificial latency in front of every operation.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

pub use app::build_router;
pub use error::{AppError, AppResult};
pub use models::{Record, RecordFields, RecordId};
pub use store::RecordStore;
