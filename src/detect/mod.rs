//! Language detection: engine seam plus the never-failing wrapper the pipeline calls.

mod engine;

pub use engine::WhatlangDetector;

use tracing::debug;

use crate::lang::LanguageCode;
use crate::outcome::Outcome;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectError {
    #[error("no text to detect a language from")]
    EmptyInput,

    #[error("language could not be determined")]
    Undetermined,

    #[error("detected {code} with confidence {confidence:.2}, below the configured minimum")]
    LowConfidence { code: String, confidence: f64 },

    #[error("detected {code} but the guess is not reliable")]
    Unreliable { code: String },
}

/// Abstraction over a language detection engine.
/// Implemented by `WhatlangDetector` for production; stubs used in tests.
pub trait LanguageDetector {
    fn detect(&self, text: &str) -> Result<LanguageCode, DetectError>;
}

/// Detects the language of `text`, degrading to `"unknown"` on any failure.
pub fn detect_language(
    detector: &impl LanguageDetector,
    text: &str,
) -> Outcome<LanguageCode, DetectError> {
    let outcome = Outcome::or_fallback(detector.detect(text), LanguageCode::unknown);
    match &outcome {
        Outcome::Success(code) => debug!(%code, "language detected"),
        Outcome::Fallback { cause, .. } => debug!(%cause, "language detection fell back to unknown"),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<LanguageCode, DetectError>);

    impl LanguageDetector for Fixed {
        fn detect(&self, _text: &str) -> Result<LanguageCode, DetectError> {
            self.0.clone()
        }
    }

    #[test]
    fn success_keeps_detected_code() {
        let outcome = detect_language(&Fixed(Ok(LanguageCode::new("fr"))), "Bonjour");
        assert_eq!(outcome, Outcome::Success(LanguageCode::new("fr")));
    }

    #[test]
    fn failure_maps_to_unknown() {
        let outcome = detect_language(&Fixed(Err(DetectError::Undetermined)), "???");
        assert!(outcome.is_fallback());
        assert_eq!(outcome.cause(), Some(&DetectError::Undetermined));
        assert!(outcome.into_value().is_unknown());
    }
}
