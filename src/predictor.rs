//! HTTP client for the external prediction model
//!
//! The model service is a black box that maps an input text to a
//! whitespace-delimited token string. Wire format: POST the configured URL
//! with `{"input_text": "..."}` and read `{"output_text": "..."}` back.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::PredictorError;
use crate::suggest::AttributePredictor;

/// Default predictor endpoint, matching the model service's local port
pub const DEFAULT_PREDICTOR_URL: &str = "http://localhost:5000/predict";

/// Attribute predictor backed by an HTTP model service
#[derive(Clone)]
pub struct HttpPredictor {
    client: reqwest::Client,
    url: String,
}

impl HttpPredictor {
    /// Create a client for the given predictor endpoint
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Create from the `PREDICTOR_URL` environment variable, falling back to
    /// [`DEFAULT_PREDICTOR_URL`]
    pub fn from_env() -> Self {
        let url =
            std::env::var("PREDICTOR_URL").unwrap_or_else(|_| DEFAULT_PREDICTOR_URL.to_string());
        Self::new(url)
    }
}

#[async_trait]
impl AttributePredictor for HttpPredictor {
    async fn predict(&self, input: &str) -> Result<String, PredictorError> {
        let response = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "input_text": input }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PredictorError::Upstream { status, body });
        }

        #[derive(Deserialize)]
        struct PredictResponse {
            output_text: String,
        }

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| PredictorError::Malformed(e.to_string()))?;
        Ok(parsed.output_text)
    }
}
