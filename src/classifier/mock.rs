use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::EmotionClassifier;
use crate::emotion::RawScores;

/// One scripted backend reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    Scores(RawScores),
    Refused,
    Fail(String),
}

/// A scripted classifier for tests. Returns pre-defined replies in order.
pub struct MockClassifier {
    replies: Vec<MockReply>,
    index: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl MockClassifier {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// How many times `classify_raw` was called.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    /// Texts received so far, in call order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmotionClassifier for MockClassifier {
    async fn classify_raw(&self, text: &str) -> Result<Option<RawScores>> {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(text.to_string());
        let reply = self.replies.get(i).ok_or_else(|| {
            anyhow::anyhow!("MockClassifier: no more replies (called {} times)", i + 1)
        })?;
        match reply {
            MockReply::Scores(raw) => Ok(Some(raw.clone())),
            MockReply::Refused => Ok(None),
            MockReply::Fail(msg) => Err(anyhow::anyhow!("{}", msg)),
        }
    }
}
