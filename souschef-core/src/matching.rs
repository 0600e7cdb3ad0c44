//! The match engine: ranks catalog recipes by ingredient overlap.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::types::{MatchResult, Recipe};

/// Recommend recipes whose requirement overlap with the user's ingredient
/// set meets `threshold`.
///
/// For each recipe the ratio is `|user ∩ required| / |required|`, rounded
/// half-up to 2 decimal places before the threshold comparison. Recipes with
/// no requirements are skipped. Results are sorted by ratio descending; the
/// sort is stable, so recipes earlier in the catalog win ties.
pub fn recommend(
    user_ingredients: &HashSet<String>,
    catalog: &[Recipe],
    threshold: f64,
) -> Vec<MatchResult> {
    let mut results = Vec::new();

    for recipe in catalog {
        let required_names: Vec<String> = recipe
            .required
            .iter()
            .map(|req| req.name.to_lowercase())
            .collect();
        let required: HashSet<&str> = required_names.iter().map(String::as_str).collect();
        if required.is_empty() {
            continue;
        }

        let overlap = required
            .iter()
            .filter(|name| user_ingredients.contains(**name))
            .count();
        let ratio = round_half_up(overlap as f64 / required.len() as f64, 2);
        if ratio < threshold {
            continue;
        }

        results.push(MatchResult {
            id: recipe.id,
            name: recipe.name.clone(),
            cuisine: recipe
                .cuisine
                .clone()
                .unwrap_or_else(|| "General".to_string()),
            match_ratio: ratio,
            required_ingredients: required_names,
            steps: recipe.steps.clone(),
        });
    }

    // Vec::sort_by is stable: equal ratios keep catalog order.
    results.sort_by(|a, b| {
        b.match_ratio
            .partial_cmp(&a.match_ratio)
            .unwrap_or(Ordering::Equal)
    });

    tracing::debug!(
        candidates = results.len(),
        threshold,
        "recommendation pass complete"
    );

    results
}

/// Round half-up (half away from zero) to `places` decimal places.
fn round_half_up(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
