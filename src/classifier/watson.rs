use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

use crate::consts::{DEFAULT_TIMEOUT_SECS, DEFAULT_WATSON_MODEL, DEFAULT_WATSON_URL};
use crate::emotion::RawScores;

use super::EmotionClassifier;

const MODEL_HEADER: &str = "grpc-metadata-mm-model-id";

/// Connection settings for the Watson NLP emotion endpoint.
#[derive(Debug, Clone)]
pub struct WatsonConfig {
    pub endpoint: String,
    pub model_id: String,
    pub timeout: Duration,
}

impl Default for WatsonConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WATSON_URL.to_string(),
            model_id: DEFAULT_WATSON_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Classifier backed by Watson's `EmotionPredict` endpoint.
pub struct WatsonClassifier {
    client: reqwest::Client,
    config: WatsonConfig,
}

impl WatsonClassifier {
    pub fn new(config: WatsonConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &WatsonConfig {
        &self.config
    }

    /// Pull `emotionPredictions[0].emotion` out of a response body.
    /// A body without predictions yields an empty mapping; validation
    /// downstream decides what that means.
    fn parse_response(text: &str) -> Result<RawScores> {
        let response: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| anyhow::anyhow!("failed to parse Watson response as JSON: {}\nraw: {}", e, text))?;

        let emotion = response
            .get("emotionPredictions")
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("emotion"))
            .and_then(|e| e.as_object())
            .cloned()
            .unwrap_or_default();

        Ok(emotion)
    }
}

#[async_trait]
impl EmotionClassifier for WatsonClassifier {
    async fn classify_raw(&self, text: &str) -> Result<Option<RawScores>> {
        let body = ApiRequest {
            raw_document: RawDocument { text },
        };

        let resp = self
            .client
            .post(&self.config.endpoint)
            .header(MODEL_HEADER, &self.config.model_id)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Watson request to {} failed", self.config.endpoint))?;

        let status = resp.status();
        if status == StatusCode::BAD_REQUEST {
            tracing::debug!("Watson refused to classify text");
            return Ok(None);
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            bail!("Watson API error ({}): {}", status, text);
        }

        let text = resp
            .text()
            .await
            .context("failed to read Watson response body")?;

        Self::parse_response(&text).map(Some)
    }
}

// --- API types ---

#[derive(Serialize)]
struct ApiRequest<'a> {
    raw_document: RawDocument<'a>,
}

#[derive(Serialize)]
struct RawDocument<'a> {
    text: &'a str,
}
