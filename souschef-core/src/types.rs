//! Shared record types used across the matching, shopping, and discovery
//! components. These are plain structured data; no wire format is owned here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A recipe as stored in the catalog.
///
/// The requirement list keeps its authoring order; shopping-gap output
/// preserves it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Ordered free-text cooking steps, opaque to matching.
    #[serde(default)]
    pub steps: String,
    #[serde(default)]
    pub required: Vec<IngredientRequirement>,
}

/// One required ingredient of a recipe. The name is the case-insensitive
/// identity key; the quantity is an opaque display string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientRequirement {
    pub name: String,
    #[serde(default)]
    pub qty: Option<String>,
}

impl IngredientRequirement {
    pub fn new(name: &str, qty: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            qty: qty.map(str::to_string),
        }
    }
}

/// A ranked recommendation produced by the match engine.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MatchResult {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    /// Fraction of the recipe's requirements present in the user's set,
    /// in [0, 1], rounded to 2 decimal places.
    pub match_ratio: f64,
    /// Lowercased requirement names, in stored order.
    pub required_ingredients: Vec<String>,
    pub steps: String,
}

/// One missing ingredient of a shopping gap, original casing preserved.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ShoppingItem {
    pub ingredient: String,
    pub qty: Option<String>,
}

/// A raw search-engine result, as returned by a `WebSearchProvider`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchHit {
    pub title: String,
    pub link: Option<String>,
    pub snippet: String,
}

/// A web recipe candidate produced by the discovery scorer.
///
/// `ingredients` is always empty: nothing is extracted from the source text.
/// `instructions` carries the raw snippet verbatim as its sole element.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WebRecipeCandidate {
    pub name: String,
    pub url: Option<String>,
    pub image: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Lexical overlap score in [0, 1], rounded to 3 decimal places.
    pub score: f64,
}

/// Output of an image classification: detected ingredients plus a
/// per-ingredient freshness status.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Recognition {
    pub ingredients: Vec<String>,
    pub freshness: BTreeMap<String, String>,
}

impl Recognition {
    /// Build a recognition where every ingredient is reported as "fresh".
    pub fn all_fresh(ingredients: Vec<String>) -> Self {
        let freshness = ingredients
            .iter()
            .map(|i| (i.clone(), "fresh".to_string()))
            .collect();
        Self {
            ingredients,
            freshness,
        }
    }
}

/// A restaurant returned by a places provider.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Venue {
    pub name: String,
    pub rating: f64,
    pub distance_km: f64,
    pub lat: f64,
    pub lng: f64,
}
