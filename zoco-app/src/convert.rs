//! Conversions between wire types (zoco-core) and display types (zoco-ui).

use chrono::{DateTime, Utc};
use zoco_core::services::{Advert as WireAdvert, AdvertQuery};
use zoco_ui::{Advert, AdvertFilters};

/// Wire listing to display listing. An unparsable `createdAt` becomes
/// `None` rather than failing the whole fetch.
pub fn advert_from_wire(wire: WireAdvert) -> Advert {
    let created_at = DateTime::parse_from_rfc3339(&wire.created_at)
        .ok()
        .map(|dt| dt.with_timezone(&Utc));

    Advert {
        id: wire.id,
        created_at,
        name: wire.name,
        sale: wire.sale,
        price: wire.price,
        tags: wire.tags,
        photo: wire.photo,
    }
}

/// Display filters to the wire query. One parameter per active dimension;
/// the query serializer joins tags with commas.
pub fn query_from_filters(filters: &AdvertFilters) -> AdvertQuery {
    AdvertQuery {
        name: filters.name.clone().filter(|n| !n.is_empty()),
        sale: filters.sale,
        price: filters.price.clone().filter(|p| !p.is_empty()),
        tags: filters.tags.clone().filter(|t| !t.is_empty()),
        min_price: filters.min_price,
        max_price: filters.max_price,
    }
}
