//! Wire types for the fundraising REST API.
//!
//! Responses are deserialized into these structs up front; a shape mismatch
//! fails the call instead of rendering missing fields downstream.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response from `POST /api-token-auth/`.
///
/// Identity fields are optional; a minimal deployment returns the token only.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub token: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A fundraising campaign as returned by `/fundraisers/`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Fundraiser {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub goal: f64,
    #[serde(default)]
    pub image: Option<String>,
    pub is_open: bool,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub owner: Option<i64>,
    #[serde(default)]
    pub owner_username: Option<String>,
    /// List views may omit pledges; detail views include them.
    #[serde(default)]
    pub pledges: Vec<Pledge>,
}

/// A pledge toward a fundraiser.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Pledge {
    pub id: i64,
    pub amount: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(default)]
    pub supporter: Option<i64>,
    #[serde(default)]
    pub supporter_username: Option<String>,
    #[serde(default)]
    pub fundraiser: Option<i64>,
}

/// Body for `POST /api-token-auth/`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body for `POST /users/`.
#[derive(Clone, Debug, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /fundraisers/`.
#[derive(Clone, Debug, Serialize)]
pub struct NewFundraiser {
    pub title: String,
    pub description: String,
    pub goal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_open: bool,
}

/// Body for `PUT /fundraisers/{id}/`.
#[derive(Clone, Debug, Serialize)]
pub struct FundraiserUpdate {
    pub title: String,
    pub description: String,
    pub goal: f64,
    pub is_open: bool,
}

/// Body for `POST /pledges/`.
#[derive(Clone, Debug, Serialize)]
pub struct NewPledge {
    pub amount: f64,
    pub comment: String,
    pub anonymous: bool,
    pub fundraiser: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporter: Option<i64>,
}
