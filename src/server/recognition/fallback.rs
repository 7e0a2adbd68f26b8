use crate::server::model::catalog::Candidate;
use crate::server::recognition::extract::extract_candidates;
use crate::server::recognition::{Provider, Recognizer};
use log::{info, warn};

/// Tries providers in order and keeps the first non-empty normalized result.
/// Recognition failure is never an error at this boundary: when every
/// provider strikes out the organizer simply types the menu in by hand.
pub(crate) struct FallbackCoordinator {
    providers: Vec<Provider>,
}

impl FallbackCoordinator {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    pub async fn suggest(&self, image: &[u8], mime_type: &str) -> Vec<Candidate> {
        for provider in &self.providers {
            match provider.recognize(image, mime_type).await {
                Ok(raw) => {
                    let candidates = extract_candidates(&raw);
                    if !candidates.is_empty() {
                        info!(
                            "provider {} suggested {} menu items",
                            provider.name(),
                            candidates.len()
                        );
                        return candidates;
                    }
                    warn!("provider {} returned no usable menu items", provider.name());
                }
                Err(e) => {
                    warn!("provider {} failed, {}", provider.name(), e);
                }
            }
        }
        info!("all recognition providers exhausted, degrading to manual entry");
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::recognition::{MockRecognizer, RecognitionError};

    fn mock(output: Result<&str, RecognitionError>) -> Provider {
        Provider::Mock(MockRecognizer {
            output: output.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn first_usable_provider_wins() {
        let coordinator = FallbackCoordinator::new(vec![
            mock(Ok("menu looks blurry, cannot help")),
            mock(Ok("[{\"name\":\"珍珠奶茶\",\"price\":50},{\"name\":\"檸檬綠茶\",\"price\":45}]")),
        ]);
        let candidates = coordinator.suggest(b"img", "image/jpeg").await;
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "珍珠奶茶");
        assert_eq!(candidates[1].name, "檸檬綠茶");
    }

    #[tokio::test]
    async fn provider_errors_are_swallowed() {
        let coordinator = FallbackCoordinator::new(vec![
            mock(Err(RecognitionError::Provider { status: 503 })),
            mock(Err(RecognitionError::Timeout)),
            mock(Ok("[{\"name\":\"冬瓜檸檬\",\"price\":40}]")),
        ]);
        let candidates = coordinator.suggest(b"img", "image/jpeg").await;
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "冬瓜檸檬");
    }

    #[tokio::test]
    async fn all_failures_degrade_to_empty() {
        let coordinator = FallbackCoordinator::new(vec![
            mock(Err(RecognitionError::Timeout)),
            mock(Ok("no json here")),
        ]);
        assert!(coordinator.suggest(b"img", "image/jpeg").await.is_empty());
    }

    #[tokio::test]
    async fn no_providers_means_no_suggestions() {
        let coordinator = FallbackCoordinator::new(Vec::new());
        assert!(coordinator.suggest(b"img", "image/jpeg").await.is_empty());
    }
}
