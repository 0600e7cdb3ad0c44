//! Shopping-gap calculation: which required ingredients the user still
//! needs to buy for a chosen recipe.

use std::collections::HashSet;

use crate::catalog::CatalogStore;
use crate::error::CatalogError;
use crate::normalize::normalize;
use crate::types::{Recipe, ShoppingItem};

/// Requirements of `recipe` not covered by the owned set, in stored order.
///
/// Names keep their original casing and the quantity string passes through
/// unchanged. `owned` must already be normalized (lowercased).
pub fn missing_ingredients(recipe: &Recipe, owned: &HashSet<String>) -> Vec<ShoppingItem> {
    recipe
        .required
        .iter()
        .filter(|req| !owned.contains(&req.name.to_lowercase()))
        .map(|req| ShoppingItem {
            ingredient: req.name.clone(),
            qty: req.qty.clone(),
        })
        .collect()
}

/// Resolve `recipe_id` in the store and compute the missing-ingredient list
/// from the raw owned strings. Unknown ids are `CatalogError::NotFound`,
/// never an empty success.
pub fn shopping_gap(
    store: &dyn CatalogStore,
    recipe_id: i64,
    owned_raw: &[String],
) -> Result<Vec<ShoppingItem>, CatalogError> {
    let recipe = store
        .by_id(recipe_id)
        .ok_or(CatalogError::NotFound(recipe_id))?;
    let owned = normalize(owned_raw);
    Ok(missing_ingredients(&recipe, &owned))
}
