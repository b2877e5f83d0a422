use nexus_types::events::{CreateEventRequest, Event, EventRegistration, EventSearch, UpdateEventRequest};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /events`, filtered when the search has any terms.
    pub async fn list_events(&self, search: &EventSearch) -> Result<Vec<Event>, ApiError> {
        let query = search.query_pairs();
        if query.is_empty() {
            self.get("/events").await
        } else {
            self.get_query("/events", &query).await
        }
    }

    pub async fn event(&self, id: &str) -> Result<Event, ApiError> {
        self.get(&format!("/events/{id}")).await
    }

    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<(), ApiError> {
        self.post_ack("/events", request).await
    }

    pub async fn update_event(&self, id: &str, request: &UpdateEventRequest) -> Result<(), ApiError> {
        self.put_ack(&format!("/events/{id}"), request).await
    }

    pub async fn register_for_event(&self, id: &str, registration: &EventRegistration) -> Result<(), ApiError> {
        self.post_ack(&format!("/events/{id}/register"), registration).await
    }
}
