use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::consts::{BACKEND_UNAVAILABLE_MESSAGE, INVALID_TEXT_MESSAGE};
use crate::emotion::EmotionReport;
use crate::gateway::{ClassifyError, EmotionGateway};

use super::AppState;

const INDEX_HTML: &str = include_str!("index.html");

const TEXT_PARAM: &str = "textToAnalyze";

#[derive(Debug, Default, PartialEq)]
pub struct DetectParams {
    pub text_to_analyze: Option<String>,
}

impl DetectParams {
    /// First `textToAnalyze` wins when the key is repeated.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            text_to_analyze: pairs
                .into_iter()
                .find(|(key, _)| key == TEXT_PARAM)
                .map(|(_, value)| value),
        }
    }
}

/// Render a report as the user-facing response line.
///
/// Scores use `f64`'s shortest round-trip `Display`: a whole score renders
/// as `1` (not `1.0`) and tiny ones in positional form (`0.0000001`, not
/// `1e-07`). Parsing the text back still yields the exact values.
pub fn render(report: &EmotionReport) -> String {
    match (report.scores(), report.dominant_emotion()) {
        (Some(s), Some(dominant)) => format!(
            "For the given statement, the system response is 'anger':{}, 'disgust': {}, 'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
            s.anger, s.disgust, s.fear, s.joy, s.sadness, dominant
        ),
        _ => INVALID_TEXT_MESSAGE.to_string(),
    }
}

/// Classify `text` and render the result.
pub async fn detect(gateway: &EmotionGateway, text: Option<&str>) -> Result<String, ClassifyError> {
    let report = gateway.classify(text).await?;
    Ok(render(&report))
}

pub async fn emotion_detector(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let params = match query {
        Ok(Query(pairs)) => DetectParams::from_pairs(pairs),
        Err(e) => {
            tracing::info!(error = %e, "unreadable query string, treating text as absent");
            DetectParams::default()
        }
    };
    match detect(&state.gateway, params.text_to_analyze.as_deref()).await {
        Ok(body) => body.into_response(),
        Err(_) => (StatusCode::BAD_GATEWAY, BACKEND_UNAVAILABLE_MESSAGE).into_response(),
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
