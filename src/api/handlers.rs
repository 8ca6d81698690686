use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    api::AppState,
    callable::{CallableError, CallableRequest, CallableResponse},
    generator::{GenerationRequest, GenerationResult, RawGenerationInput},
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

pub async fn generate_sample_text(
    State(state): State<AppState>,
    payload: Result<Json<CallableRequest<Value>>, JsonRejection>,
) -> Result<Json<CallableResponse<GenerationResult>>, CallableError> {
    let request_id = Uuid::new_v4().to_string();
    let span = info_span!("generateSampleText", %request_id);

    async move {
        let Json(envelope) = payload.map_err(|rejection| {
            warn!(%rejection, "malformed callable request");
            CallableError::InvalidArgument("Bad Request".to_string())
        })?;

        let raw = RawGenerationInput::from_data(envelope.data);
        let request = GenerationRequest::from_raw(raw).inspect_err(|err| {
            warn!(code = err.code(), "rejected request");
        })?;

        let result = state.generator.generate(&request).await?;
        Ok(Json(CallableResponse { result }))
    }
    .instrument(span)
    .await
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
