//! Display-side types the stores and selectors work with.
//!
//! Wire types live in zoco-core; the app layer converts at the boundary so
//! this crate never depends on the HTTP stack.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A marketplace listing as the UI sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Advert {
    pub id: String,
    /// Parsed creation timestamp; None when the server sent something
    /// unparsable.
    pub created_at: Option<DateTime<Utc>>,
    pub name: String,
    /// true = for sale, false = wanted-to-buy.
    pub sale: bool,
    pub price: f64,
    pub tags: Vec<String>,
    /// Photo URL, absent when the listing has none.
    pub photo: Option<String>,
}

/// Active listing filters. An absent field means "no constraint on this
/// dimension"; set fields combine with logical AND.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvertFilters {
    /// Case-insensitive substring match on the listing name.
    pub name: Option<String>,
    pub sale: Option<bool>,
    /// Exact price, kept as the raw input string; an unparsable value is
    /// treated as no constraint, not an error.
    pub price: Option<String>,
    /// Tag constraint: an item with ANY of these tags qualifies.
    pub tags: Option<Vec<String>>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl AdvertFilters {
    /// Whether any dimension is constrained.
    pub fn is_active(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
            || self.sale.is_some()
            || self.price.as_deref().is_some_and(|p| !p.is_empty())
            || self.tags.as_deref().is_some_and(|t| !t.is_empty())
    }
}

pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Client-side pagination over the listing collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    /// Heuristic: a full page suggests more results exist (the server sends
    /// no true pagination metadata).
    pub has_more: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            total: 0,
            has_more: false,
        }
    }
}

/// The authenticated user. The server returns no profile data beyond the
/// token, so this is populated from the login request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pagination_starts_at_page_one() {
        let p = Pagination::default();
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(p.total, 0);
        assert!(!p.has_more);
    }

    #[test]
    fn empty_filters_are_inactive() {
        assert!(!AdvertFilters::default().is_active());
    }

    #[test]
    fn blank_strings_and_empty_tag_lists_do_not_activate_filters() {
        let filters = AdvertFilters {
            name: Some(String::new()),
            price: Some(String::new()),
            tags: Some(vec![]),
            ..Default::default()
        };
        assert!(!filters.is_active());
    }

    #[test]
    fn any_set_dimension_activates_filters() {
        let filters = AdvertFilters {
            sale: Some(false),
            ..Default::default()
        };
        assert!(filters.is_active());
    }

    #[test]
    fn filters_serde_roundtrip_keeps_field_names() {
        // Filters are serializable so a host can persist UI state between
        // runs; field names are part of that contract.
        let filters = AdvertFilters {
            name: Some("bike".to_string()),
            sale: Some(true),
            tags: Some(vec!["motor".to_string()]),
            ..Default::default()
        };
        let json = serde_json::to_string(&filters).unwrap();
        assert!(json.contains("\"name\":\"bike\""));
        assert!(json.contains("\"sale\":true"));
        assert!(json.contains("\"min_price\":null"));

        let parsed: AdvertFilters = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, filters);
    }
}
