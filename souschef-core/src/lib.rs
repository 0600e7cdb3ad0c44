pub mod catalog;
pub mod discovery;
pub mod error;
pub mod matching;
pub mod normalize;
pub mod providers;
pub mod shopping;
pub mod types;

pub use catalog::{CatalogStore, MemoryCatalog};
pub use discovery::{discover, rank_candidates, score_text};
pub use error::CatalogError;
pub use matching::recommend;
pub use normalize::normalize;
pub use providers::{
    FailingPlaces, FakeSearch, GoogleCse, ImageClassifier, MockClassifier, PlacesProvider,
    ProviderError, StaticPlaces, WebSearchProvider,
};
pub use shopping::{missing_ingredients, shopping_gap};
pub use types::{
    IngredientRequirement, MatchResult, Recipe, Recognition, SearchHit, ShoppingItem, Venue,
    WebRecipeCandidate,
};
