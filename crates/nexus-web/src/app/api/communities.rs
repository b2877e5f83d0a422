use nexus_types::community::{
    AnnouncementRequest, ChatPostRequest, Community, CommunityDetail, CreateCommunityRequest,
};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_communities(&self) -> Result<Vec<Community>, ApiError> {
        self.get("/communities").await
    }

    /// Community with its chat history and queries.
    pub async fn community(&self, id: &str) -> Result<CommunityDetail, ApiError> {
        self.get(&format!("/communities/{id}")).await
    }

    /// Communities administered by the signed-in admin.
    pub async fn my_communities(&self) -> Result<Vec<Community>, ApiError> {
        self.get("/communities/admin/my-communities").await
    }

    pub async fn create_community(&self, request: &CreateCommunityRequest) -> Result<(), ApiError> {
        self.post_ack("/communities", request).await
    }

    pub async fn join_community(&self, id: &str) -> Result<(), ApiError> {
        self.post_ack(&format!("/communities/{id}/join"), &serde_json::json!({})).await
    }

    pub async fn post_chat(&self, id: &str, request: &ChatPostRequest) -> Result<(), ApiError> {
        self.post_ack(&format!("/communities/{id}/chat"), request).await
    }

    pub async fn post_announcement(&self, id: &str, request: &AnnouncementRequest) -> Result<(), ApiError> {
        self.post_ack(&format!("/communities/{id}/announcements"), request).await
    }
}
