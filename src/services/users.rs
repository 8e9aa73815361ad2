// User administration endpoints (superadmin)

use std::sync::Arc;

use crate::error::Result;
use crate::http_client::ApiClient;
use crate::models::{User, UserCreateRequest, UserUpdateRequest};

pub struct UserService {
    api: Arc<ApiClient>,
}

impl UserService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.api.get("/users").await
    }

    pub async fn get(&self, id: i64) -> Result<User> {
        self.api.get(&format!("/users/{}", id)).await
    }

    pub async fn create(&self, request: &UserCreateRequest) -> Result<User> {
        self.api.post("/users", request).await
    }

    pub async fn update(&self, id: i64, request: &UserUpdateRequest) -> Result<User> {
        self.api.put(&format!("/users/{}", id), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/users/{}", id)).await
    }

    /// Users with the admin role, for location assignment pickers
    pub async fn admins(&self) -> Result<Vec<User>> {
        self.api.get("/users/admins").await
    }
}
