//! Symptom prediction endpoint.
//!
//! `POST /predict` with `{"symptoms": "<text>"}`. A missing or non-string
//! `symptoms` field is treated as empty input, which yields the
//! "could not identify" message rather than an error.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, RequestId};
use crate::pipeline::ResponseKind;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub response: String,
    pub kind: ResponseKind,
}

/// Pull the symptom text out of an arbitrary JSON body.
pub fn symptoms_text(body: &Value) -> &str {
    body.get("symptoms").and_then(Value::as_str).unwrap_or_default()
}

/// `POST /predict`: classify a free-text symptom description.
pub async fn predict(
    State(ctx): State<ApiContext>,
    request_id: Option<Extension<RequestId>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(body) = payload?;
    let text = symptoms_text(&body);

    let result = ctx.engine.classify(text)?;

    tracing::debug!(
        request_id = ?request_id.map(|Extension(id)| id.0),
        kind = ?result.kind,
        input_chars = text.chars().count(),
        "Prediction served"
    );

    Ok(Json(PredictResponse {
        response: result.body,
        kind: result.kind,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_string_symptoms() {
        let body = json!({ "symptoms": "fever cough" });
        assert_eq!(symptoms_text(&body), "fever cough");
    }

    #[test]
    fn non_text_symptoms_become_empty() {
        assert_eq!(symptoms_text(&json!({ "symptoms": 42 })), "");
        assert_eq!(symptoms_text(&json!({ "symptoms": null })), "");
        assert_eq!(symptoms_text(&json!({ "symptoms": ["fever"] })), "");
        assert_eq!(symptoms_text(&json!({})), "");
        assert_eq!(symptoms_text(&json!("fever")), "");
    }
}
