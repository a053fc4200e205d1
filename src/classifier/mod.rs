pub mod mock;
pub mod watson;

use anyhow::Result;
use async_trait::async_trait;

use crate::emotion::RawScores;

/// The external model that turns text into per-emotion scores.
///
/// `Ok(None)` means the backend looked at the text and refused to classify
/// it. `Err` is reserved for transport or protocol failures.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    async fn classify_raw(&self, text: &str) -> Result<Option<RawScores>>;
}
