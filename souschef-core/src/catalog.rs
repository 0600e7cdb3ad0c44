//! Recipe catalog storage.
//!
//! The catalog is a read-mostly repository: seeded once at startup, read by
//! the match engine and the shopping-gap calculator, never mutated in
//! steady state. Storage choice is swappable behind `CatalogStore`.

use crate::error::CatalogError;
use crate::types::{IngredientRequirement, Recipe};

/// Read-only repository of recipes.
pub trait CatalogStore: Send + Sync {
    /// All recipes, in catalog order.
    fn all(&self) -> Vec<Recipe>;

    /// Look up a single recipe by id.
    fn by_id(&self, id: i64) -> Option<Recipe>;
}

/// In-memory catalog backed by a plain vector.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    recipes: Vec<Recipe>,
}

impl MemoryCatalog {
    /// Build a catalog from the given recipes, validating each entry.
    ///
    /// Rejects blank recipe names and duplicate ids so the match engine can
    /// assume catalog integrity.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for recipe in &recipes {
            if recipe.name.trim().is_empty() {
                return Err(CatalogError::InvalidEntry(format!(
                    "recipe {} has a blank name",
                    recipe.id
                )));
            }
            if !seen.insert(recipe.id) {
                return Err(CatalogError::InvalidEntry(format!(
                    "duplicate recipe id {}",
                    recipe.id
                )));
            }
        }
        Ok(Self { recipes })
    }

    /// Build the catalog with the built-in seed recipes.
    pub fn seeded() -> Self {
        Self {
            recipes: seed_recipes(),
        }
    }
}

impl CatalogStore for MemoryCatalog {
    fn all(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    fn by_id(&self, id: i64) -> Option<Recipe> {
        self.recipes.iter().find(|r| r.id == id).cloned()
    }
}

/// The built-in seed data used until a write API exists.
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            name: "Tomato Egg Stir-Fry".to_string(),
            cuisine: Some("Chinese".to_string()),
            steps: "Beat eggs; stir-fry tomatoes; combine; season.".to_string(),
            required: vec![
                IngredientRequirement::new("tomato", Some("2")),
                IngredientRequirement::new("egg", Some("3")),
                IngredientRequirement::new("salt", Some("to taste")),
                IngredientRequirement::new("oil", Some("1 tbsp")),
            ],
        },
        Recipe {
            id: 2,
            name: "Caprese Salad".to_string(),
            cuisine: Some("Italian".to_string()),
            steps: "Slice tomatoes; add mozzarella & basil; drizzle olive oil; season."
                .to_string(),
            required: vec![
                IngredientRequirement::new("tomato", Some("2")),
                IngredientRequirement::new("mozzarella", Some("120g")),
                IngredientRequirement::new("basil", Some("few leaves")),
                IngredientRequirement::new("olive oil", Some("1 tbsp")),
            ],
        },
        Recipe {
            id: 3,
            name: "Cucumber Egg Roll".to_string(),
            cuisine: Some("Japanese".to_string()),
            steps: "Make thin omelet; add cucumber; roll and slice.".to_string(),
            required: vec![
                IngredientRequirement::new("egg", Some("3")),
                IngredientRequirement::new("cucumber", Some("1")),
                IngredientRequirement::new("salt", Some("pinch")),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_lookup() {
        let catalog = MemoryCatalog::seeded();
        let recipe = catalog.by_id(1).unwrap();
        assert_eq!(recipe.name, "Tomato Egg Stir-Fry");
        assert_eq!(recipe.required.len(), 4);
    }

    #[test]
    fn test_unknown_id_is_none() {
        let catalog = MemoryCatalog::seeded();
        assert!(catalog.by_id(999).is_none());
    }

    #[test]
    fn test_all_preserves_order() {
        let catalog = MemoryCatalog::seeded();
        let ids: Vec<i64> = catalog.all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_blank_name_rejected() {
        let recipes = vec![Recipe {
            id: 1,
            name: "   ".to_string(),
            cuisine: None,
            steps: String::new(),
            required: vec![],
        }];
        assert!(matches!(
            MemoryCatalog::new(recipes),
            Err(CatalogError::InvalidEntry(_))
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let recipes = vec![
            Recipe {
                id: 7,
                name: "A".to_string(),
                cuisine: None,
                steps: String::new(),
                required: vec![],
            },
            Recipe {
                id: 7,
                name: "B".to_string(),
                cuisine: None,
                steps: String::new(),
                required: vec![],
            },
        ];
        assert!(matches!(
            MemoryCatalog::new(recipes),
            Err(CatalogError::InvalidEntry(_))
        ));
    }
}
