use nexus_types::auth::{AuthResponse, LoginRequest, RegisterRequest};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/register", request).await
    }
}
