use serde::Deserialize;

use crate::client::{error_from_response, network_error, ApiClient};
use crate::error::ApiError;

/// Success body of `POST /auth/login`.
///
/// Wire contract: the field is `accessToken`. Earlier iterations of the
/// server also shipped `token`; that spelling is not accepted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// Exchange credentials for a bearer token.
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let resp = client
        .post("/auth/login", None)
        .json(&serde_json::json!({
            "email": email,
            "password": password,
        }))
        .send()
        .await
        .map_err(network_error)?;

    if !resp.status().is_success() {
        return Err(error_from_response(resp).await);
    }

    resp.json().await.map_err(|_| ApiError::Parse)
}
