//! Roboflow hosted-inference HTTP client.
//!
//! One operation: POST the base64 image to
//! `{base}/{model_id}/{model_version}?api_key={key}` as a urlencoded body and
//! read back `{ "predictions": [ { "class", "confidence" }, ... ] }`.

use serde::Deserialize;

use super::ClassifyError;
use crate::config::ClassifierModel;
use crate::models::Prediction;

/// Sends an encoded image to the remote classifier.
///
/// On success, a possibly-empty prediction list; on failure, a
/// distinguishable transport error. Interpretation is not this client's job.
pub trait ClassifyClient {
    fn classify(&self, encoded_image: &str) -> Result<Vec<Prediction>, ClassifyError>;
}

/// Roboflow detection API client for one model id/version pair.
pub struct RoboflowClient {
    base_url: String,
    model: ClassifierModel,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl RoboflowClient {
    /// Create a client for one classifier model. No explicit timeout is
    /// configured beyond the HTTP client's defaults; no retry policy exists.
    pub fn new(base_url: &str, model: ClassifierModel, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key: api_key.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Client for the stock eye model at the production endpoint.
    pub fn eye() -> Self {
        Self::new(
            crate::config::CLASSIFIER_BASE_URL,
            crate::config::EYE_MODEL,
            crate::config::classifier_api_key(),
        )
    }

    /// Client for the stock skin model at the production endpoint.
    pub fn skin() -> Self {
        Self::new(
            crate::config::CLASSIFIER_BASE_URL,
            crate::config::SKIN_MODEL,
            crate::config::classifier_api_key(),
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}/{}?api_key={}",
            self.base_url, self.model.id, self.model.version, self.api_key
        )
    }
}

/// Response body from the detection endpoint.
#[derive(Deserialize)]
struct DetectResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

/// Parse the detection response body. An absent `predictions` key is treated
/// as an empty list; anything else malformed is a parse error.
pub fn parse_predictions(body: &str) -> Result<Vec<Prediction>, ClassifyError> {
    let parsed: DetectResponse =
        serde_json::from_str(body).map_err(|e| ClassifyError::ResponseParsing(e.to_string()))?;
    Ok(parsed.predictions)
}

impl ClassifyClient for RoboflowClient {
    fn classify(&self, encoded_image: &str) -> Result<Vec<Prediction>, ClassifyError> {
        let _span = tracing::info_span!(
            "classify",
            model = %self.model.id,
            version = %self.model.version,
            payload_len = encoded_image.len(),
        )
        .entered();
        let start = std::time::Instant::now();

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(encoded_image.to_string())
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ClassifyError::Connection(self.base_url.clone())
                } else {
                    ClassifyError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClassifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .map_err(|e| ClassifyError::HttpClient(e.to_string()))?;
        let predictions = parse_predictions(&body)?;

        tracing::info!(
            model = %self.model.id,
            elapsed_ms = %start.elapsed().as_millis(),
            predictions = predictions.len(),
            "classification complete"
        );

        Ok(predictions)
    }
}

/// Mock classifier for testing — returns a configurable result.
pub struct MockClassifyClient {
    result: Result<Vec<Prediction>, ClassifyError>,
}

impl MockClassifyClient {
    pub fn with_predictions(predictions: Vec<Prediction>) -> Self {
        Self {
            result: Ok(predictions),
        }
    }

    pub fn with_error(error: ClassifyError) -> Self {
        Self { result: Err(error) }
    }
}

impl ClassifyClient for MockClassifyClient {
    fn classify(&self, _encoded_image: &str) -> Result<Vec<Prediction>, ClassifyError> {
        match &self.result {
            Ok(preds) => Ok(preds.clone()),
            Err(ClassifyError::Connection(s)) => Err(ClassifyError::Connection(s.clone())),
            Err(ClassifyError::Api { status, body }) => Err(ClassifyError::Api {
                status: *status,
                body: body.clone(),
            }),
            Err(ClassifyError::HttpClient(s)) => Err(ClassifyError::HttpClient(s.clone())),
            Err(ClassifyError::ResponseParsing(s)) => {
                Err(ClassifyError::ResponseParsing(s.clone()))
            }
        }
    }
}
