use serde::Deserialize;

use crate::client::{error_from_response, network_error, ApiClient};
use crate::error::ApiError;

/// A marketplace listing as the server sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advert {
    pub id: String,
    /// RFC 3339 creation timestamp, kept as-is on the wire.
    pub created_at: String,
    pub name: String,
    /// true = for sale, false = wanted-to-buy.
    pub sale: bool,
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Photo URL, absent when the listing has none.
    #[serde(default)]
    pub photo: Option<String>,
}

/// Server-side listing filters, serialized into the query string.
///
/// Absent fields are omitted entirely (never sent as empty strings); `tags`
/// goes on the wire as a single comma-joined parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvertQuery {
    pub name: Option<String>,
    pub sale: Option<bool>,
    pub price: Option<String>,
    pub tags: Option<Vec<String>>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl AdvertQuery {
    /// Serialize to a query string without the leading `?`. Empty when no
    /// field is set.
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();

        if let Some(name) = self.name.as_ref().filter(|n| !n.is_empty()) {
            params.push(("name", name.clone()));
        }
        if let Some(sale) = self.sale {
            params.push(("sale", sale.to_string()));
        }
        if let Some(price) = self.price.as_ref().filter(|p| !p.is_empty()) {
            params.push(("price", price.clone()));
        }
        if let Some(tags) = self.tags.as_ref().filter(|t| !t.is_empty()) {
            params.push(("tags", tags.join(",")));
        }
        if let Some(min) = self.min_price {
            params.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            params.push(("maxPrice", max.to_string()));
        }

        // Infallible for string pairs.
        serde_urlencoded::to_string(&params).unwrap_or_default()
    }
}

/// Payload for creating a listing. Sent as a multipart form.
#[derive(Debug, Clone)]
pub struct NewAdvert {
    pub name: String,
    pub sale: bool,
    pub price: f64,
    pub tags: Vec<String>,
    pub photo: Option<PhotoUpload>,
}

/// Optional photo attachment for a new listing.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Endpoint path for a listing query, `?` omitted when the query is empty.
fn adverts_path(query: &AdvertQuery) -> String {
    let qs = query.to_query_string();
    if qs.is_empty() {
        "/adverts".to_string()
    } else {
        format!("/adverts?{qs}")
    }
}

/// Fetch listings matching `query`. Public endpoint, no credential.
pub async fn get_adverts(client: &ApiClient, query: &AdvertQuery) -> Result<Vec<Advert>, ApiError> {
    let resp = client
        .get(&adverts_path(query), None)
        .send()
        .await
        .map_err(network_error)?;

    if !resp.status().is_success() {
        return Err(error_from_response(resp).await);
    }

    resp.json().await.map_err(|_| ApiError::Parse)
}

/// Fetch a single listing by id.
pub async fn get_advert_by_id(
    client: &ApiClient,
    token: Option<&str>,
    id: &str,
) -> Result<Advert, ApiError> {
    let path = format!("/adverts/{}", urlencoding::encode(id));
    let resp = client
        .get(&path, token)
        .send()
        .await
        .map_err(network_error)?;

    if !resp.status().is_success() {
        return Err(error_from_response(resp).await);
    }

    resp.json().await.map_err(|_| ApiError::Parse)
}

/// Delete a listing by id. Success body is empty.
pub async fn delete_advert_by_id(
    client: &ApiClient,
    token: Option<&str>,
    id: &str,
) -> Result<(), ApiError> {
    let path = format!("/adverts/{}", urlencoding::encode(id));
    let resp = client
        .delete(&path, token)
        .send()
        .await
        .map_err(network_error)?;

    if !resp.status().is_success() {
        return Err(error_from_response(resp).await);
    }

    Ok(())
}

/// Create a listing. Multipart form: `name`, `sale`, `price`, one `tags`
/// part per tag, and an optional binary `photo` part.
pub async fn create_advert(
    client: &ApiClient,
    token: Option<&str>,
    advert: &NewAdvert,
) -> Result<Advert, ApiError> {
    let mut form = reqwest::multipart::Form::new()
        .text("name", advert.name.clone())
        .text("sale", advert.sale.to_string())
        .text("price", advert.price.to_string());

    for tag in &advert.tags {
        form = form.text("tags", tag.clone());
    }

    if let Some(photo) = &advert.photo {
        let part = reqwest::multipart::Part::bytes(photo.bytes.clone())
            .file_name(photo.file_name.clone());
        form = form.part("photo", part);
    }

    let resp = client
        .post("/adverts", token)
        .multipart(form)
        .send()
        .await
        .map_err(network_error)?;

    if !resp.status().is_success() {
        return Err(error_from_response(resp).await);
    }

    resp.json().await.map_err(|_| ApiError::Parse)
}
