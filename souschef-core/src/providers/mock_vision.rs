//! Mock image classifier.
//!
//! No real inference happens here: detection is keyed on hint substrings and
//! falls back to a fixed ingredient list, so the rest of the flow can be
//! exercised deterministically without a vision backend.

use async_trait::async_trait;

use super::{ImageClassifier, ProviderError};
use crate::types::Recognition;

#[derive(Debug, Default)]
pub struct MockClassifier;

impl MockClassifier {
    pub fn new() -> Self {
        Self
    }

    fn detect(hint: &str) -> Recognition {
        let hint = hint.to_lowercase();
        let items: &[&str] = if hint.contains("caprese") || hint.contains("salad") {
            &["tomato", "mozzarella", "basil", "olive oil"]
        } else if hint.contains("japanese") || hint.contains("roll") {
            &["egg", "cucumber", "salt"]
        } else {
            &["tomato", "egg", "salt", "oil"]
        };
        Recognition::all_fresh(items.iter().map(|i| i.to_string()).collect())
    }
}

#[async_trait]
impl ImageClassifier for MockClassifier {
    async fn classify_image(&self, _image: &[u8]) -> Result<Recognition, ProviderError> {
        // Image content is ignored until a real vision provider exists.
        Ok(Self::detect(""))
    }

    async fn classify_hint(&self, hint: &str) -> Result<Recognition, ProviderError> {
        Ok(Self::detect(hint))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
