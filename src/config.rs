use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use axum::http::HeaderValue;
use clap::Parser;
use url::Url;

use crate::translate::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

const DEFAULT_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:3001",
    "http://127.0.0.1:3001",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CORS origin {origin:?}")]
    InvalidOrigin { origin: String },

    #[error("invalid translation endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("translation endpoint must use http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("minimum detection confidence must be within 0.0..=1.0, got {0}")]
    InvalidConfidence(f64),

    #[error("translation timeout must be at least one second")]
    ZeroTimeout,
}

/// Command-line flags; every flag can also be set through its `PARLEY_*` variable.
#[derive(Debug, Parser)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "PARLEY_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PARLEY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Origin allowed to call the API (repeatable; defaults to local dev servers)
    #[arg(long = "allowed-origin", env = "PARLEY_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Translation service endpoint
    #[arg(long, env = "PARLEY_TRANSLATE_URL", default_value = DEFAULT_ENDPOINT)]
    pub translate_url: String,

    /// Per-request timeout for the translation service, in seconds
    #[arg(long, env = "PARLEY_TRANSLATE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub translate_timeout_secs: u64,

    /// Detections below this confidence are reported as unknown
    #[arg(long, env = "PARLEY_MIN_CONFIDENCE", default_value_t = 0.0)]
    pub min_confidence: f64,

    /// Report short or ambiguous inputs as unknown instead of guessing
    #[arg(long, env = "PARLEY_REQUIRE_RELIABLE")]
    pub require_reliable: bool,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub allowed_origins: Vec<HeaderValue>,
    pub translate_url: Url,
    pub translate_timeout: Duration,
    pub min_confidence: f64,
    pub require_reliable: bool,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let origins: Vec<String> = if args.allowed_origins.is_empty() {
            DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect()
        } else {
            args.allowed_origins
        };
        let allowed_origins = origins
            .into_iter()
            .map(|origin| {
                let trimmed = origin.trim();
                HeaderValue::from_str(trimmed)
                    .ok()
                    .filter(|_| Url::parse(trimmed).is_ok())
                    .ok_or(ConfigError::InvalidOrigin { origin })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let translate_url = Url::parse(args.translate_url.trim())?;
        if !matches!(translate_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(
                translate_url.scheme().to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&args.min_confidence) {
            return Err(ConfigError::InvalidConfidence(args.min_confidence));
        }

        if args.translate_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            addr: SocketAddr::new(args.host, args.port),
            allowed_origins,
            translate_url,
            translate_timeout: Duration::from_secs(args.translate_timeout_secs),
            min_confidence: args.min_confidence,
            require_reliable: args.require_reliable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Result<Config, ConfigError> {
        let argv = std::iter::once("parley").chain(extra.iter().copied());
        Config::try_from(Args::parse_from(argv))
    }

    #[test]
    fn defaults_cover_local_dev_servers() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8000".parse().unwrap());
        assert_eq!(config.allowed_origins.len(), 4);
        assert_eq!(config.translate_url.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.translate_timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.min_confidence, 0.0);
        assert!(!config.require_reliable);
    }

    #[test]
    fn explicit_origins_replace_defaults() {
        let config = parse(&[
            "--allowed-origin",
            "https://app.example.com",
            "--allowed-origin",
            "https://admin.example.com",
        ])
        .unwrap();
        assert_eq!(
            config.allowed_origins,
            vec![
                HeaderValue::from_static("https://app.example.com"),
                HeaderValue::from_static("https://admin.example.com"),
            ]
        );
    }

    #[test]
    fn comma_separated_origins_are_split() {
        let config = parse(&["--allowed-origin", "http://a.test,http://b.test"]).unwrap();
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn rejects_origin_that_is_not_a_url() {
        let err = parse(&["--allowed-origin", "not an origin"]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOrigin { .. }));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = parse(&["--translate-url", "ftp://example.com/translate"]).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(ref s) if s == "ftp"));
    }

    #[test]
    fn rejects_out_of_range_confidence() {
        let err = parse(&["--min-confidence", "1.5"]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfidence(_)));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = parse(&["--translate-timeout-secs", "0"]).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));
    }

    #[test]
    fn reliability_gate_is_opt_in() {
        let config = parse(&["--require-reliable"]).unwrap();
        assert!(config.require_reliable);
    }

    #[test]
    fn custom_listen_address() {
        let config = parse(&["--host", "0.0.0.0", "--port", "9090"]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:9090".parse().unwrap());
    }
}
