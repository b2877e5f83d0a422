//! REST client for the Nexus API.
//!
//! One `ApiClient` method per endpoint, grouped by resource in the submodules.
//! Every call resolves to `Result<T, ApiError>`.

pub mod auth;
pub mod communities;
pub mod events;
pub mod queries;
pub mod users;

use dioxus::prelude::*;
use reqwest::{header::AUTHORIZATION, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    app::{auth::use_session, config::WebConfig},
    error::ApiError,
};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: WebConfig,
    token: Option<String>,
}

/// Client for the current component, carrying the session token if signed in.
pub fn use_api() -> ApiClient {
    let config = use_context::<WebConfig>();
    let session = use_session();
    ApiClient::new(config, session.token())
}

impl ApiClient {
    pub fn new(config: WebConfig, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Send and turn any non-2xx status into an `ApiError`.
    async fn execute(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), error = %err, "api request failed");
        Err(err)
    }

    async fn json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        Ok(Self::execute(builder).await?.json::<T>().await?)
    }

    /// For endpoints whose response body the UI does not use.
    async fn ack(builder: RequestBuilder) -> Result<(), ApiError> {
        Self::execute(builder).await.map(drop)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Self::json(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        Self::json(self.request(Method::GET, path).query(query)).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        Self::json(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn post_ack<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        Self::ack(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn put_ack<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        Self::ack(self.request(Method::PUT, path).json(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_dropped() {
        let client = ApiClient::new(WebConfig::default(), Some(String::new()));
        assert!(!client.has_token());
        let client = ApiClient::new(WebConfig::default(), Some("t1".into()));
        assert!(client.has_token());
    }

    #[test]
    fn requests_carry_bearer_token() {
        let client = ApiClient::new(WebConfig::new("http://api.test/api"), Some("t1".into()));
        let request = client.request(Method::GET, "/users/profile").build().unwrap();
        assert_eq!(request.url().as_str(), "http://api.test/api/users/profile");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer t1");
    }

    #[test]
    fn anonymous_requests_have_no_authorization() {
        let client = ApiClient::new(WebConfig::new("http://api.test/api"), None);
        let request = client.request(Method::GET, "/events").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}
