//! Page data loading.
//!
//! Pages fetch what they show when they mount. `use_load` wraps
//! `use_resource` so that failures are logged in one place, and `LoadState`
//! turns the resource value into the three states a page renders.

use std::future::Future;

use dioxus::prelude::*;

use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T: Clone> LoadState<T> {
    pub fn from_result(result: &Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data.clone()),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }

    /// State of a resource value: `None` while the request is in flight.
    pub fn from_option(value: Option<&Result<T, ApiError>>) -> Self {
        value.map_or(LoadState::Loading, Self::from_result)
    }

    pub fn of(resource: &Resource<Result<T, ApiError>>) -> Self {
        Self::from_option(resource.read().as_ref())
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Loaded(data) => LoadState::Loaded(f(data)),
            LoadState::Failed(message) => LoadState::Failed(message),
        }
    }
}

/// Log a failed background fetch and pass the result through.
pub fn log_failure<T>(what: &'static str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        tracing::error!(resource = what, error = %err, "failed to load");
    }
    result
}

/// Fetch on mount. Call `restart()` on the returned resource to fetch again.
pub fn use_load<T, F, Fut>(what: &'static str, mut fetch: F) -> Resource<Result<T, ApiError>>
where
    T: 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    use_resource(move || {
        let request = fetch();
        async move {
            tracing::debug!(resource = what, "loading");
            log_failure(what, request.await)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_value_is_loading() {
        let state = LoadState::<u32>::from_option(None);
        assert!(state.is_loading());
        assert_eq!(state.loaded(), None);
    }

    #[test]
    fn success_is_loaded() {
        let value: Result<u32, ApiError> = Ok(7);
        let state = LoadState::from_option(Some(&value));
        assert_eq!(state, LoadState::Loaded(7));
        assert_eq!(state.map(|n| n * 2), LoadState::Loaded(14));
    }

    #[test]
    fn failure_keeps_message() {
        let value: Result<u32, ApiError> = Err(ApiError::from_status(404, r#"{"message":"No such event"}"#));
        let state = LoadState::from_option(Some(&value));
        assert_eq!(state, LoadState::Failed("not found: No such event".to_string()));
        assert_eq!(state.map(|n| n + 1), LoadState::Failed("not found: No such event".to_string()));
    }

    #[test]
    fn log_failure_passes_results_through() {
        assert_eq!(log_failure("n", Ok::<_, ApiError>(1)), Ok(1));
        let err = ApiError::Network { message: "offline".into() };
        assert_eq!(log_failure::<u8>("n", Err(err.clone())), Err(err));
    }
}
