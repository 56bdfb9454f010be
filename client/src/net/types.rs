//! Wire DTOs for the external REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API's JSON exactly. Numeric ids arrive as JSON
//! numbers from a JVM backend, so integral floats are tolerated as well.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Authority string the API attaches to administrators.
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// The signed-in user as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user id assigned by the API.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Authority strings, e.g. `ROLE_USER`, `ROLE_ADMIN`.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    /// Whether this user carries the admin authority.
    #[must_use]
    pub fn has_admin_role(&self) -> bool {
        self.roles.iter().any(|role| role == ADMIN_ROLE)
    }

    /// Roles joined for display, e.g. `"ROLE_USER, ROLE_ADMIN"`.
    #[must_use]
    pub fn roles_label(&self) -> String {
        self.roles.join(", ")
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` response: the bearer token plus the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl LoginResponse {
    /// Split into the token and the user fields that accompany it.
    #[must_use]
    pub fn into_parts(self) -> (String, User) {
        let user = User { id: self.id, username: self.username, email: self.email, roles: self.roles };
        (self.token, user)
    }
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

/// Generic `{ "message": ... }` body used for both success and error replies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// A role entity as embedded in `GET /users/all` rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub id: Option<i64>,
    pub name: String,
}

/// A user row from the admin listing. Passwords are never included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<RoleRecord>,
}

impl UserRecord {
    /// Role names joined for the admin table.
    #[must_use]
    pub fn role_names(&self) -> String {
        self.roles.iter().map(|role| role.name.as_str()).collect::<Vec<_>>().join(", ")
    }
}

/// A catalog product. `id` is absent until the API has stored it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub quantity: i32,
    #[serde(default)]
    pub category: String,
}

impl Product {
    /// Price formatted with two decimals.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    i32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for i32")))
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(number)) => number_to_i64(&number).map(Some).map_err(D::Error::custom),
        Some(_) => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number_to_i64(&number).map_err(D::Error::custom),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn number_to_i64(number: &serde_json::Number) -> Result<i64, &'static str> {
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float < i64::MAX as f64
    {
        return Ok(float as i64);
    }
    Err("expected integer-compatible number")
}
