use nexus_types::community::CreateQueryRequest;

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn submit_query(&self, request: &CreateQueryRequest) -> Result<(), ApiError> {
        self.post_ack("/queries", request).await
    }
}
