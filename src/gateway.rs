//! The classification gateway: validate input, call the backend once,
//! and turn its untrusted reply into an [`EmotionReport`].

use std::sync::Arc;
use thiserror::Error;

use crate::classifier::EmotionClassifier;
use crate::emotion::{EmotionReport, EmotionScores};

/// Infrastructure failure. Invalid text is never an error; it comes back
/// as [`EmotionReport::invalid`].
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classifier backend failed: {0:#}")]
    Backend(anyhow::Error),
}

pub struct EmotionGateway {
    classifier: Arc<dyn EmotionClassifier>,
}

impl EmotionGateway {
    pub fn new(classifier: Arc<dyn EmotionClassifier>) -> Self {
        Self { classifier }
    }

    pub async fn classify(&self, text: Option<&str>) -> Result<EmotionReport, ClassifyError> {
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                tracing::info!("empty text, skipping classifier");
                return Ok(EmotionReport::invalid());
            }
        };

        let raw = match self.classifier.classify_raw(text).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("classifier refused text");
                return Ok(EmotionReport::invalid());
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "classifier backend failed");
                return Err(ClassifyError::Backend(e));
            }
        };

        match EmotionScores::from_raw(&raw) {
            Ok(scores) => {
                let report = EmotionReport::from_scores(scores);
                tracing::debug!(dominant = ?report.dominant_emotion(), "classified text");
                Ok(report)
            }
            Err(e) => {
                tracing::info!(error = %e, "classifier returned unusable scores");
                Ok(EmotionReport::invalid())
            }
        }
    }
}
