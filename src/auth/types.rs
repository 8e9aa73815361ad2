// Authentication types

use serde::{Deserialize, Serialize};

/// Roles the backend issues. Closed set; comparisons go through the
/// predicates instead of string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Superadmin,
    Admin,
    Student,
}

impl Role {
    /// Admin-or-above: superadmins can do everything admins can
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::Superadmin)
    }

    pub fn is_superadmin(&self) -> bool {
        matches!(self, Role::Superadmin)
    }

    pub fn is_student(&self) -> bool {
        matches!(self, Role::Student)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => "SUPERADMIN",
            Role::Admin => "ADMIN",
            Role::Student => "STUDENT",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login credentials; transient, never persisted
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration payload
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Body of the refresh-token exchange
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Token pair plus identity, returned by both login and refresh
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtAuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

/// Identity stored alongside the token pair; lifecycle bound to it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl From<&JwtAuthResponse> for SessionUser {
    fn from(response: &JwtAuthResponse) -> Self {
        SessionUser {
            id: response.user_id,
            username: response.username.clone(),
            role: response.role,
        }
    }
}
