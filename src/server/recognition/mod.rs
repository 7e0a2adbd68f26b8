//! Boundary wrappers around external image-understanding services.

pub(crate) mod extract;
pub(crate) mod fallback;
pub(crate) mod gemini;
pub(crate) mod ollama;

use derive_more::{Display, Error};

/// One image → raw model output text. The prompt and wire format are each
/// adapter's own business; callers only see this contract.
pub(crate) trait Recognizer {
    async fn recognize(&self, image: &[u8], mime_type: &str) -> Result<String, RecognitionError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub(crate) enum RecognitionError {
    #[display("provider returned status {status}")]
    Provider { status: u16 },
    #[display("provider timed out")]
    Timeout,
    #[display("transport failure: {message}")]
    Transport { message: String },
}

/// Configured recognition providers, tried in order by the coordinator.
pub(crate) enum Provider {
    Gemini(gemini::GeminiAdapter),
    Ollama(ollama::OllamaAdapter),
    #[cfg(test)]
    Mock(MockRecognizer),
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gemini(_) => "gemini",
            Self::Ollama(_) => "ollama",
            #[cfg(test)]
            Self::Mock(_) => "mock",
        }
    }
}

impl Recognizer for Provider {
    async fn recognize(&self, image: &[u8], mime_type: &str) -> Result<String, RecognitionError> {
        match self {
            Self::Gemini(adapter) => adapter.recognize(image, mime_type).await,
            Self::Ollama(adapter) => adapter.recognize(image, mime_type).await,
            #[cfg(test)]
            Self::Mock(adapter) => adapter.recognize(image, mime_type).await,
        }
    }
}

/// for test
#[cfg(test)]
pub(crate) struct MockRecognizer {
    pub output: Result<String, RecognitionError>,
}

#[cfg(test)]
impl Recognizer for MockRecognizer {
    async fn recognize(&self, _: &[u8], _: &str) -> Result<String, RecognitionError> {
        self.output.clone()
    }
}
