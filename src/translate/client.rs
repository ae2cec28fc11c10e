use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::response::extract_translation;
use super::{TranslateError, TranslationClient};
use crate::lang::{LanguageCode, Source};

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the public Google Translate web endpoint.
#[derive(Clone)]
pub struct GoogleTranslateClient {
    http: Client,
    endpoint: Url,
    timeout: Duration,
}

impl GoogleTranslateClient {
    pub fn new(http: Client, endpoint: Url, timeout: Duration) -> Self {
        Self {
            http,
            endpoint,
            timeout,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        let endpoint = Url::parse(&format!("{base_url}/translate_a/single"))
            .expect("mock server URL is valid");
        Self::new(http, endpoint, Duration::from_secs(2))
    }

    fn request_url(&self, text: &str, source: &Source, target: &LanguageCode) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client", "gtx")
            .append_pair("sl", source.as_str())
            .append_pair("tl", target.as_str())
            .append_pair("dt", "t")
            .append_pair("q", text);
        url
    }
}

impl TranslationClient for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source: &Source,
        target: &LanguageCode,
    ) -> Result<String, TranslateError> {
        let url = self.request_url(text, source, target);

        let response = self
            .http
            .get(url)
            .header("User-Agent", crate::USER_AGENT)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("translation service rate limited");
            return Err(TranslateError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let end = body.floor_char_boundary(200);
            warn!(status = %status, body = &body[..end], "translation service error");
            return Err(TranslateError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let json: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| TranslateError::Malformed(e.to_string()))?;
        let translation = extract_translation(&json)?;

        debug!(
            source = source.as_str(),
            detected_source = translation.detected_source.as_deref().unwrap_or("-"),
            %target,
            "translation complete"
        );
        Ok(translation.text)
    }
}
