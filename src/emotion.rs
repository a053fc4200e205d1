//! Emotion categories, validated scores, and the per-request report.

use std::fmt;

use thiserror::Error;

/// Untrusted category → score mapping, as returned by a classifier backend.
pub type RawScores = serde_json::Map<String, serde_json::Value>;

/// The five fixed emotion categories.
///
/// Declaration order doubles as tie-break priority: when two categories
/// share the top score, the one declared first is dominant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// All categories, in priority (and rendering) order.
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a raw mapping was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("missing score for {0}")]
    MissingCategory(Emotion),
    #[error("invalid score for {emotion}: {value}")]
    InvalidScore {
        emotion: Emotion,
        value: serde_json::Value,
    },
}

/// Five validated scores: finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    /// Validate a raw backend mapping. Extra keys are ignored.
    pub fn from_raw(raw: &RawScores) -> Result<Self, ScoreError> {
        let score = |emotion: Emotion| -> Result<f64, ScoreError> {
            let value = raw
                .get(emotion.as_str())
                .ok_or(ScoreError::MissingCategory(emotion))?;
            match value.as_f64() {
                Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
                _ => Err(ScoreError::InvalidScore {
                    emotion,
                    value: value.clone(),
                }),
            }
        };

        Ok(Self {
            anger: score(Emotion::Anger)?,
            disgust: score(Emotion::Disgust)?,
            fear: score(Emotion::Fear)?,
            joy: score(Emotion::Joy)?,
            sadness: score(Emotion::Sadness)?,
        })
    }

    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// Arg-max over [`Emotion::ALL`]. Only a strictly greater score
    /// displaces the current leader, so ties go to the earlier category.
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::ALL[0];
        for emotion in &Emotion::ALL[1..] {
            if self.get(*emotion) > self.get(best) {
                best = *emotion;
            }
        }
        best
    }
}

/// The outcome of classifying one piece of text.
///
/// Either all scores and the dominant emotion are present, or none are.
/// The absent case is the in-band "invalid text" signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionReport {
    scores: Option<EmotionScores>,
    dominant_emotion: Option<Emotion>,
}

impl EmotionReport {
    pub fn invalid() -> Self {
        Self {
            scores: None,
            dominant_emotion: None,
        }
    }

    pub fn from_scores(scores: EmotionScores) -> Self {
        Self {
            dominant_emotion: Some(scores.dominant()),
            scores: Some(scores),
        }
    }

    pub fn scores(&self) -> Option<&EmotionScores> {
        self.scores.as_ref()
    }

    pub fn dominant_emotion(&self) -> Option<Emotion> {
        self.dominant_emotion
    }

    pub fn is_valid(&self) -> bool {
        self.dominant_emotion.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawScores {
        value.as_object().unwrap().clone()
    }

    fn scores(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> EmotionScores {
        EmotionScores {
            anger,
            disgust,
            fear,
            joy,
            sadness,
        }
    }

    #[test]
    fn emotion_names_are_lowercase() {
        let names: Vec<&str> = Emotion::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(names, ["anger", "disgust", "fear", "joy", "sadness"]);
        assert_eq!(Emotion::Joy.to_string(), "joy");
    }

    #[test]
    fn from_raw_accepts_complete_mapping() {
        let parsed = EmotionScores::from_raw(&raw(json!({
            "anger": 0.01, "disgust": 0.02, "fear": 0.03, "joy": 0.9, "sadness": 0.04
        })))
        .unwrap();
        assert_eq!(parsed, scores(0.01, 0.02, 0.03, 0.9, 0.04));
    }

    #[test]
    fn from_raw_ignores_extra_keys() {
        let parsed = EmotionScores::from_raw(&raw(json!({
            "anger": 0.1, "disgust": 0.1, "fear": 0.1, "joy": 0.1, "sadness": 0.1,
            "surprise": 0.9
        })))
        .unwrap();
        assert_eq!(parsed.dominant(), Emotion::Anger);
    }

    #[test]
    fn from_raw_accepts_integer_scores() {
        let parsed = EmotionScores::from_raw(&raw(json!({
            "anger": 0, "disgust": 0, "fear": 0, "joy": 1, "sadness": 0
        })))
        .unwrap();
        assert_eq!(parsed.joy, 1.0);
    }

    #[test]
    fn from_raw_missing_category_fails() {
        let err = EmotionScores::from_raw(&raw(json!({
            "anger": 0.1, "disgust": 0.1, "joy": 0.1, "sadness": 0.1
        })))
        .unwrap_err();
        assert_eq!(err, ScoreError::MissingCategory(Emotion::Fear));
        assert_eq!(err.to_string(), "missing score for fear");
    }

    #[test]
    fn from_raw_empty_mapping_fails_on_first_category() {
        let err = EmotionScores::from_raw(&RawScores::new()).unwrap_err();
        assert_eq!(err, ScoreError::MissingCategory(Emotion::Anger));
    }

    #[test]
    fn from_raw_non_numeric_fails() {
        let err = EmotionScores::from_raw(&raw(json!({
            "anger": "high", "disgust": 0.1, "fear": 0.1, "joy": 0.1, "sadness": 0.1
        })))
        .unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InvalidScore {
                emotion: Emotion::Anger,
                ..
            }
        ));
    }

    #[test]
    fn from_raw_negative_fails() {
        let err = EmotionScores::from_raw(&raw(json!({
            "anger": 0.1, "disgust": 0.1, "fear": 0.1, "joy": 0.1, "sadness": -0.5
        })))
        .unwrap_err();
        assert!(err.to_string().contains("sadness"));
    }

    #[test]
    fn from_raw_null_fails() {
        let err = EmotionScores::from_raw(&raw(json!({
            "anger": 0.1, "disgust": null, "fear": 0.1, "joy": 0.1, "sadness": 0.1
        })))
        .unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InvalidScore {
                emotion: Emotion::Disgust,
                ..
            }
        ));
    }

    #[test]
    fn dominant_picks_strict_max() {
        assert_eq!(scores(0.01, 0.01, 0.01, 0.95, 0.02).dominant(), Emotion::Joy);
        assert_eq!(scores(0.1, 0.2, 0.3, 0.4, 0.5).dominant(), Emotion::Sadness);
        assert_eq!(scores(0.9, 0.2, 0.3, 0.4, 0.5).dominant(), Emotion::Anger);
    }

    #[test]
    fn dominant_tie_goes_to_first_declared() {
        assert_eq!(scores(0.0, 0.0, 0.0, 0.0, 0.0).dominant(), Emotion::Anger);
        assert_eq!(scores(0.1, 0.5, 0.5, 0.2, 0.5).dominant(), Emotion::Disgust);
        assert_eq!(scores(0.1, 0.2, 0.3, 0.7, 0.7).dominant(), Emotion::Joy);
    }

    #[test]
    fn invalid_report_has_nothing() {
        let report = EmotionReport::invalid();
        assert!(!report.is_valid());
        assert!(report.scores().is_none());
        assert!(report.dominant_emotion().is_none());
    }

    #[test]
    fn report_from_scores_derives_dominant() {
        let report = EmotionReport::from_scores(scores(0.3, 0.1, 0.6, 0.0, 0.2));
        assert!(report.is_valid());
        assert_eq!(report.dominant_emotion(), Some(Emotion::Fear));
        assert_eq!(report.scores().unwrap().fear, 0.6);
    }
}
