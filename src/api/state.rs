//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::search::SearchIndex;

/// State shared by all REST handlers
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<SearchIndex>,
}

impl AppState {
    pub fn new(index: Arc<SearchIndex>) -> Self {
        Self { index }
    }
}
