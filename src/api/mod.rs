use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

pub mod handlers;

use crate::generator::SampleTextGenerator;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<SampleTextGenerator>,
}

/// Callable endpoint plus a liveness probe.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generateSampleText", post(handlers::generate_sample_text))
        .route("/health", get(handlers::health))
}
