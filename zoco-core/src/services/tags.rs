use crate::client::{error_from_response, network_error, ApiClient};
use crate::error::ApiError;

/// Fetch the set of tags the server knows about. Public endpoint.
pub async fn get_available_tags(client: &ApiClient) -> Result<Vec<String>, ApiError> {
    let resp = client
        .get("/adverts/tags", None)
        .send()
        .await
        .map_err(network_error)?;

    if !resp.status().is_success() {
        return Err(error_from_response(resp).await);
    }

    resp.json().await.map_err(|_| ApiError::Parse)
}
