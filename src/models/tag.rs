use std::cmp::Ordering;
use std::collections::HashSet;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

use super::project::Project;

/// Collect every tag used by any project, deduplicated and sorted with the
/// French collation rules (see [`french_cmp`]).
pub fn derive_tags(projects: &[Project]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut tags: Vec<String> = Vec::new();
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }

    let collator = french_collator();
    tags.sort_by(|a, b| compare_with(collator.as_ref(), a, b));
    tags
}

/// Compare two strings as a French reader would: base letters first, then
/// accents (e < é < è < ê < ë), then case (lowercase first).
/// Ties fall back to code-point order so the result is a total order.
pub fn french_cmp(a: &str, b: &str) -> Ordering {
    compare_with(french_collator().as_ref(), a, b)
}

fn french_collator() -> Option<Collator> {
    match Collator::try_new(&locale!("fr").into(), CollatorOptions::new()) {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("French collation unavailable, sorting tags by code point: {}", e);
            None
        }
    }
}

fn compare_with(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    collator
        .map(|c| c.compare(a, b))
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.cmp(b))
}
