use nexus_types::users::{Activity, AdminStats, LeaderboardEntry, Profile};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.get("/users/profile").await
    }

    pub async fn activity(&self) -> Result<Vec<Activity>, ApiError> {
        self.get("/users/activity").await
    }

    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get("/users/admin/stats").await
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.get("/users/leaderboard").await
    }

    /// Link target for a certificate PDF. The browser downloads it directly.
    pub fn certificate_url(&self, event_id: &str) -> String {
        self.config().certificate_url(event_id)
    }
}
