use isolang::Language;
use whatlang::{Detector, Lang};

use super::{DetectError, LanguageDetector};
use crate::lang::LanguageCode;

/// Trigram-based detector backed by `whatlang`.
pub struct WhatlangDetector {
    detector: Detector,
    min_confidence: f64,
    require_reliable: bool,
}

impl WhatlangDetector {
    pub fn new(min_confidence: f64) -> Self {
        Self {
            detector: Detector::new(),
            min_confidence,
            require_reliable: false,
        }
    }

    /// Also reject guesses whatlang itself flags as unreliable, which is
    /// most one- and two-word inputs.
    pub fn require_reliable(mut self, require: bool) -> Self {
        self.require_reliable = require;
        self
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<LanguageCode, DetectError> {
        if !text.chars().any(char::is_alphabetic) {
            return Err(DetectError::EmptyInput);
        }

        let info = self.detector.detect(text).ok_or(DetectError::Undetermined)?;
        let code = short_code(info.lang());

        if info.confidence() < self.min_confidence {
            return Err(DetectError::LowConfidence {
                code: code.to_string(),
                confidence: info.confidence(),
            });
        }

        if self.require_reliable && !info.is_reliable() {
            return Err(DetectError::Unreliable {
                code: code.to_string(),
            });
        }

        Ok(LanguageCode::new(code))
    }
}

/// whatlang reports ISO 639-3; prefer the two-letter form the translation
/// service expects whenever one exists.
fn short_code(lang: Lang) -> &'static str {
    match lang {
        // Mandarin has no 639-1 code of its own; translators know it as `zh`.
        Lang::Cmn => "zh",
        // Iranian Persian sits under the `fas` macrolanguage, which owns `fa`.
        Lang::Pes => "fa",
        l => Language::from_639_3(l.code())
            .and_then(|iso| iso.to_639_1())
            .unwrap_or_else(|| l.code()),
    }
}
