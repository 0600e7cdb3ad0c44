use std::sync::Arc;

use souschef_core::{CatalogStore, ImageClassifier, PlacesProvider, WebSearchProvider};

/// Shared application context: the seeded catalog plus the injected
/// provider capabilities.
pub struct AppContext {
    pub catalog: Arc<dyn CatalogStore>,
    pub classifier: Box<dyn ImageClassifier>,
    pub places: Box<dyn PlacesProvider>,
    /// None when search credentials are absent; the discover handler
    /// surfaces that as a configuration error.
    pub search: Option<Box<dyn WebSearchProvider>>,
    pub match_threshold: f64,
}
