//! Request pipeline: detect, translate to English, reply, translate back.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::detect::{LanguageDetector, detect_language};
use crate::lang::{LanguageCode, display_name};
use crate::respond::generate;
use crate::translate::{TranslationClient, Translator};

#[derive(Debug, Deserialize)]
pub struct Query {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineResult {
    pub detected_language: LanguageCode,
    pub language_name: String,
    pub english_query: String,
    pub answer: String,
}

pub struct Pipeline<D, C> {
    detector: D,
    translator: Translator<C>,
}

impl<D, C> Pipeline<D, C>
where
    D: LanguageDetector,
    C: TranslationClient,
{
    pub fn new(detector: D, client: C) -> Self {
        Self {
            detector,
            translator: Translator::new(client),
        }
    }

    /// Runs every step in order. Each step degrades to a default instead of
    /// failing, so a result is always produced.
    pub async fn handle(&self, query: &Query) -> PipelineResult {
        let detected = detect_language(&self.detector, &query.text);
        let detection_fell_back = detected.is_fallback();
        let detected_language = detected.into_value();

        let english = self.translator.to_english(&query.text).await;
        let inbound_fell_back = english.is_fallback();
        let english_query = english.into_value();

        let reply = generate(&english_query);

        let (answer, outbound_fell_back) = if detected_language.needs_back_translation() {
            let translated = self.translator.from_english(reply, &detected_language).await;
            let fell_back = translated.is_fallback();
            (translated.into_value(), fell_back)
        } else {
            (reply.to_string(), false)
        };

        let language_name = display_name(&detected_language);

        info!(
            language = %detected_language,
            detection_fell_back,
            inbound_fell_back,
            outbound_fell_back,
            "query handled"
        );

        PipelineResult {
            detected_language,
            language_name,
            english_query,
            answer,
        }
    }
}
