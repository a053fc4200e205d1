//! Project-wide constants.

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Default Watson NLP emotion endpoint.
pub const DEFAULT_WATSON_URL: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

/// Default Watson model id, sent in the `grpc-metadata-mm-model-id` header.
pub const DEFAULT_WATSON_MODEL: &str = "emotion_aggregated-workflow_lang_en_stock";

/// Default request timeout for the classifier backend, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Body returned when the text could not be classified.
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!.";

/// Body returned when the classifier backend failed.
pub const BACKEND_UNAVAILABLE_MESSAGE: &str = "Emotion service unavailable. Please try again later.";
