//! Canned English replies selected by keyword.

/// The reply chosen for a query. Variants are listed in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Weather,
    Identity,
    Time,
    Greeting,
    Acknowledgement,
}

impl Reply {
    /// Picks the first rule whose keyword occurs in the lower-cased text.
    pub fn select(english_text: &str) -> Self {
        let text = english_text.to_lowercase();

        if text.contains("weather") {
            Reply::Weather
        } else if text.contains("name") {
            Reply::Identity
        } else if text.contains("time") {
            Reply::Time
        } else if text.contains("hello") || text.contains("hi") || text.contains("hey") {
            Reply::Greeting
        } else {
            Reply::Acknowledgement
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Reply::Weather => "The weather is clear and pleasant today.",
            Reply::Identity => "I am your multilingual AI assistant.",
            Reply::Time => "I cannot check the exact time, but I'm here to help!",
            Reply::Greeting => "Hello! How can I assist you today?",
            Reply::Acknowledgement => "I have received your query and processed it successfully.",
        }
    }
}

/// English reply for English (or pass-through) text.
pub fn generate(english_text: &str) -> &'static str {
    Reply::select(english_text).text()
}
