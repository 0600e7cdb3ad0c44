//! Ingredient normalization.
//!
//! Raw user input ("  Egg ", "TOMATO", "") becomes a comparable set:
//! trimmed, lowercased, empties dropped, duplicates collapsed.

use std::collections::HashSet;

/// Normalize raw ingredient strings into a set.
pub fn normalize<I, S>(raw: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
