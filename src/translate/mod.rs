//! Translation: service client seam plus the pass-through wrapper the pipeline calls.

mod client;
mod response;

pub use client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, GoogleTranslateClient};

use tracing::{debug, warn};

use crate::lang::{LanguageCode, Source};
use crate::outcome::Outcome;

/// Longest input the translation service accepts in one call.
pub const MAX_INPUT_CHARS: usize = 5000;

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("nothing to translate")]
    EmptyInput,

    #[error("input of {len} characters exceeds the {MAX_INPUT_CHARS} character limit")]
    TooLong { len: usize },

    #[error("translation service rate limit exceeded")]
    RateLimited,

    #[error("translation service returned status {0}")]
    Status(u16),

    #[error("unexpected translation response: {0}")]
    Malformed(String),

    #[error("translation service returned an empty translation")]
    EmptyTranslation,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Abstraction over a translation service.
/// Implemented by `GoogleTranslateClient` for production; stubs used in tests.
pub trait TranslationClient {
    fn translate(
        &self,
        text: &str,
        source: &Source,
        target: &LanguageCode,
    ) -> impl Future<Output = Result<String, TranslateError>> + Send;
}

/// Single-attempt translation that hands back the input text when the
/// service fails.
pub struct Translator<C> {
    client: C,
}

impl<C: TranslationClient> Translator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    pub async fn to_english(&self, text: &str) -> Outcome<String, TranslateError> {
        self.translate_or_pass_through(text, &Source::Auto, &LanguageCode::english())
            .await
    }

    pub async fn from_english(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Outcome<String, TranslateError> {
        self.translate_or_pass_through(text, &Source::Code(LanguageCode::english()), target)
            .await
    }

    async fn translate_or_pass_through(
        &self,
        text: &str,
        source: &Source,
        target: &LanguageCode,
    ) -> Outcome<String, TranslateError> {
        let result = match check_input(text) {
            Ok(()) => self.client.translate(text, source, target).await,
            Err(e) => Err(e),
        };
        let outcome = Outcome::or_fallback(result, || text.to_string());
        match outcome.cause() {
            None => debug!(source = source.as_str(), %target, "translated"),
            Some(TranslateError::EmptyInput) => {
                debug!(source = source.as_str(), %target, "empty input passed through")
            }
            Some(cause) => warn!(
                source = source.as_str(),
                %target,
                error = %cause,
                "translation failed, passing text through"
            ),
        }
        outcome
    }
}

fn check_input(text: &str) -> Result<(), TranslateError> {
    if text.trim().is_empty() {
        return Err(TranslateError::EmptyInput);
    }
    let len = text.chars().count();
    if len > MAX_INPUT_CHARS {
        return Err(TranslateError::TooLong { len });
    }
    Ok(())
}
