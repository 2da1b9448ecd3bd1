//! HTTP API for the search engine
//!
//! REST endpoints over a shared [`SearchIndex`](crate::search::SearchIndex).

pub mod http;
pub mod rest;
pub mod state;

pub use http::{create_router, serve};
pub use state::AppState;
