//! Web recipe discovery: scores external search results against the user's
//! ingredients and ranks them.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::normalize;
use crate::providers::{ProviderError, WebSearchProvider};
use crate::types::{SearchHit, WebRecipeCandidate};

/// Alphabetic-only tokens; numerals and punctuation are boundaries, never
/// token content.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("invalid token regex"));

/// Lexical overlap score of `text` against a lowercased ingredient set.
///
/// The denominator is the text's distinct token count, not the ingredient
/// count: a short, focused snippet outranks a long one with the same
/// overlap. Result is in [0, 1], rounded half-up to 3 decimal places; an
/// empty token set scores 0.0.
pub fn score_text(text: &str, ingredients: &HashSet<String>) -> f64 {
    let lowered = text.to_lowercase();
    let tokens: HashSet<&str> = TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()).collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let overlap = tokens
        .iter()
        .filter(|token| ingredients.contains(**token))
        .count();
    round_half_up(overlap as f64 / tokens.len() as f64, 3)
}

/// Score and rank raw search hits into web recipe candidates.
///
/// Sorted by score descending (tie order unspecified), truncated to
/// `limit`. Candidates never carry extracted ingredients; the snippet is
/// passed through verbatim as the sole instruction line.
pub fn rank_candidates(
    hits: Vec<SearchHit>,
    ingredients: &HashSet<String>,
    limit: usize,
) -> Vec<WebRecipeCandidate> {
    let mut candidates: Vec<WebRecipeCandidate> = hits
        .into_iter()
        .map(|hit| {
            let text = format!("{} {}", hit.title, hit.snippet);
            let score = score_text(&text, ingredients);
            let instructions = if hit.snippet.is_empty() {
                Vec::new()
            } else {
                vec![hit.snippet]
            };
            WebRecipeCandidate {
                name: hit.title,
                url: hit.link,
                image: None,
                ingredients: Vec::new(),
                instructions,
                score,
            }
        })
        .collect();

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates.truncate(limit);
    candidates
}

/// Query the web search capability and rank the results.
///
/// The query is the raw ingredient list joined by spaces, with the cuisine
/// appended when present; the provider adds its own "recipe" qualifier.
/// Provider errors propagate unchanged so the caller can distinguish a
/// missing configuration from an upstream failure.
pub async fn discover(
    provider: &dyn WebSearchProvider,
    ingredients: &[String],
    cuisine: Option<&str>,
    limit: usize,
) -> Result<Vec<WebRecipeCandidate>, ProviderError> {
    let mut query = ingredients.join(" ");
    if let Some(cuisine) = cuisine {
        query.push(' ');
        query.push_str(cuisine);
    }

    let hits = provider.search(&query, limit).await?;
    tracing::debug!(hits = hits.len(), %query, "web search returned");

    Ok(rank_candidates(hits, &normalize(ingredients), limit))
}

fn round_half_up(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
