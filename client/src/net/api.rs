//! REST API helpers for the external auth/user/product service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`, since the
//! bearer token only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses are decoded as
//! `MessageResponse` when possible so pages can show the API's own wording.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{LoginResponse, Product, User, UserRecord};
#[cfg(feature = "hydrate")]
use super::{
    error::error_from_body,
    types::{LoginRequest, MessageResponse, RegisterRequest},
};

/// API base used when `API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Base URL of the external API, without a trailing slash.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("API_URL").unwrap_or(DEFAULT_API_URL).trim_end_matches('/')
}

/// Absolute URL for an API path such as `/users/me`.
#[must_use]
pub fn endpoint(path: &str) -> String {
    join_url(api_base_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn products_path(encoded_category: Option<&str>) -> String {
    match encoded_category {
        Some(category) if !category.is_empty() => format!("/products/category/{category}"),
        _ => "/products".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn product_path(encoded_id: &str) -> String {
    format!("/products/{encoded_id}")
}

#[cfg(feature = "hydrate")]
fn encode_segment(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    ensure_ok(&resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(error_from_body(status, &body))
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails, the API rejects the credentials,
/// or the response cannot be decoded.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { username: username.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(&endpoint("/auth/login"))
            .json(&payload)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`. Returns the API's message.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the registration
/// (duplicate username or email, invalid fields).
pub async fn register(username: &str, email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload =
            RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(&endpoint("/auth/register"))
            .json(&payload)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(&resp).await?;
        let body = resp.text().await.unwrap_or_default();
        Ok(serde_json::from_str::<MessageResponse>(&body).map(|m| m.message).unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the user that owns `token` from `GET /users/me`.
///
/// # Errors
///
/// Returns an error if the token is rejected or the request fails.
pub async fn fetch_current_user(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/users/me"))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch every user from `GET /users/all` (admin only).
///
/// # Errors
///
/// Returns an error if the caller is not an admin or the request fails.
pub async fn fetch_all_users(token: &str) -> Result<Vec<UserRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/users/all"))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch products, optionally restricted to one category.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn fetch_products(token: &str, category: Option<&str>) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let encoded = category.map(encode_segment);
        let url = endpoint(&products_path(encoded.as_deref()));
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, category);
        Err(ApiError::Unavailable)
    }
}

/// Create a product via `POST /products`. Returns the stored product.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the product.
pub async fn create_product(token: &str, product: &Product) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/products"))
            .header("Authorization", &bearer_header(token))
            .json(product)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, product);
        Err(ApiError::Unavailable)
    }
}

/// Replace a product via `PUT /products/{id}`. Returns the stored product.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the product.
pub async fn update_product(token: &str, id: &str, product: &Product) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&product_path(&encode_segment(id)));
        let resp = gloo_net::http::Request::put(&url)
            .header("Authorization", &bearer_header(token))
            .json(product)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, product);
        Err(ApiError::Unavailable)
    }
}

/// Delete a product via `DELETE /products/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the API refuses the delete.
pub async fn delete_product(token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&product_path(&encode_segment(id)));
        let resp = gloo_net::http::Request::delete(&url)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(&resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}
