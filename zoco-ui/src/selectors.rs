//! Pure derivations over store state. No caching: callers recompute on
//! every render, the way the stores are meant to be consumed.

use std::borrow::Cow;

use crate::display_types::{Advert, AdvertFilters};

/// Whether one listing satisfies every active filter dimension.
fn matches_filters(advert: &Advert, filters: &AdvertFilters) -> bool {
    if let Some(name) = filters.name.as_deref().filter(|n| !n.is_empty()) {
        if !advert.name.to_lowercase().contains(&name.to_lowercase()) {
            return false;
        }
    }

    if let Some(sale) = filters.sale {
        if advert.sale != sale {
            return false;
        }
    }

    // An unparsable price string is no constraint, not an error.
    if let Some(price) = filters
        .price
        .as_deref()
        .and_then(|p| p.trim().parse::<f64>().ok())
    {
        if advert.price != price {
            return false;
        }
    }

    if let Some(tags) = filters.tags.as_deref().filter(|t| !t.is_empty()) {
        // ANY matching tag qualifies.
        if !tags.iter().any(|tag| advert.tags.contains(tag)) {
            return false;
        }
    }

    true
}

/// Listings satisfying the conjunction of all active filters.
///
/// With no active filter this borrows the original slice unchanged; order is
/// always preserved.
pub fn filtered_adverts<'a>(items: &'a [Advert], filters: &AdvertFilters) -> Cow<'a, [Advert]> {
    if !filters.is_active() {
        return Cow::Borrowed(items);
    }

    Cow::Owned(
        items
            .iter()
            .filter(|advert| matches_filters(advert, filters))
            .cloned()
            .collect(),
    )
}

/// Length of the filtered view. Recomputed every call.
pub fn filtered_adverts_count(items: &[Advert], filters: &AdvertFilters) -> usize {
    filtered_adverts(items, filters).len()
}

/// Listings offered for sale, ignoring all other filters.
pub fn sale_adverts<'a>(items: &'a [Advert]) -> Vec<&'a Advert> {
    items.iter().filter(|a| a.sale).collect()
}

/// Wanted-to-buy listings, ignoring all other filters.
pub fn buy_adverts<'a>(items: &'a [Advert]) -> Vec<&'a Advert> {
    items.iter().filter(|a| !a.sale).collect()
}

/// Tag vocabulary with duplicates removed, first occurrence order kept.
pub fn unique_tags(tags: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.iter()
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

/// Tag vocabulary sorted lexicographically.
pub fn sorted_tags(tags: &[String]) -> Vec<String> {
    let mut sorted = tags.to_vec();
    sorted.sort();
    sorted
}

/// Tags containing `search`, case-insensitively.
pub fn tags_matching<'a>(tags: &'a [String], search: &str) -> Vec<&'a String> {
    let needle = search.to_lowercase();
    tags.iter()
        .filter(|t| t.to_lowercase().contains(&needle))
        .collect()
}
