//! Process configuration: command-line flags with environment fallbacks.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::classifier::watson::WatsonConfig;
use crate::consts::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_WATSON_MODEL, DEFAULT_WATSON_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "emotion-detector",
    version,
    about = "Tells you how a sentence feels."
)]
pub struct Settings {
    /// Address to listen on
    #[arg(long, env = "EMOTION_DETECTOR_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "EMOTION_DETECTOR_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Watson NLP EmotionPredict endpoint
    #[arg(long, env = "WATSON_EMOTION_URL", default_value = DEFAULT_WATSON_URL)]
    pub endpoint: String,

    /// Watson model id
    #[arg(long, env = "WATSON_EMOTION_MODEL", default_value = DEFAULT_WATSON_MODEL)]
    pub model_id: String,

    /// Classifier request timeout in seconds
    #[arg(
        short,
        long,
        env = "WATSON_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

impl Settings {
    /// `host` must be an IPv4 or IPv6 literal.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("invalid listen address {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn watson(&self) -> WatsonConfig {
        WatsonConfig {
            endpoint: self.endpoint.clone(),
            model_id: self.model_id.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
