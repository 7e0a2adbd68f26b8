use crate::server::recognition::gemini::GeminiAdapter;
use crate::server::recognition::ollama::OllamaAdapter;
use crate::server::recognition::Provider;
use std::env;
use std::net::SocketAddrV4;
use std::time::Duration;

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
const DEFAULT_OLLAMA_MODEL: &str = "qwen3-vl:32b";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Server configs
#[derive(Debug)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    pub recognition: RecognitionConfig,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, recognition: RecognitionConfig) -> Self {
        Self { addr, recognition }
    }
}

/// Recognition provider settings. The Gemini adapter is skipped entirely when
/// no api key is configured; the local Ollama pipeline is always appended as
/// the last resort.
#[derive(Debug)]
pub(crate) struct RecognitionConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub timeout: Duration,
}

impl RecognitionConfig {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or(DEFAULT_GEMINI_MODEL.to_string()),
            ollama_url: env::var("OLLAMA_URL").unwrap_or(DEFAULT_OLLAMA_URL.to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or(DEFAULT_OLLAMA_MODEL.to_string()),
            timeout: Duration::from_secs(
                env::var("RECOGNITION_TIMEOUT_SECONDS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            ),
        }
    }

    /// Providers in fallback order: preferred vision-language provider first,
    /// then the local pipeline.
    pub fn providers(&self) -> Vec<Provider> {
        let mut providers = Vec::with_capacity(2);
        if let Some(api_key) = &self.gemini_api_key {
            providers.push(Provider::Gemini(GeminiAdapter::new(
                api_key.clone(),
                self.gemini_model.clone(),
                self.timeout,
            )));
        }
        providers.push(Provider::Ollama(OllamaAdapter::new(
            self.ollama_url.clone(),
            self.ollama_model.clone(),
            self.timeout,
        )));
        providers
    }
}
