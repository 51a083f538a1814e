//! Random user client — the single point of entry for the external identity
//! API. The recruiter handlers never call randomuser.me directly.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::debug;

pub const DEFAULT_RANDOM_USER_URL: &str = "https://randomuser.me/api";

/// Bound on the whole fetch, spawn to join. The handler never blocks past it.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum RandomUserError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Random user API returned status {status}")]
    Api { status: u16 },

    #[error("Random user API returned no results")]
    EmptyResults,

    #[error("Random user fetch timed out")]
    TimedOut,

    #[error("Random user fetch task failed: {0}")]
    TaskFailed(String),
}

#[derive(Debug, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<RandomUser>,
}

#[derive(Debug, Deserialize)]
pub struct RandomUser {
    pub email: String,
    pub name: RandomUserName,
}

#[derive(Debug, Deserialize)]
pub struct RandomUserName {
    pub first: String,
    pub last: String,
}

/// Flat identity mapped from the first entry of a random user response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub full_name: String,
    pub email: String,
}

impl RandomUserResponse {
    /// Takes the first candidate and flattens its nested name.
    /// An empty result list is an explicit error, never an index panic.
    pub fn into_identity(mut self) -> Result<Identity, RandomUserError> {
        if self.results.is_empty() {
            return Err(RandomUserError::EmptyResults);
        }
        let user = self.results.remove(0);
        Ok(Identity {
            full_name: format!("{} {}", user.name.first, user.name.last),
            email: user.email,
        })
    }
}

/// Client for the external random user API.
#[derive(Clone)]
pub struct RandomUserClient {
    client: Client,
    url: String,
}

impl RandomUserClient {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            url,
        }
    }

    /// Performs one GET against the configured endpoint and maps the first
    /// result into an [`Identity`].
    pub async fn fetch_identity(&self) -> Result<Identity, RandomUserError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RandomUserError::Api {
                status: status.as_u16(),
            });
        }

        let body: RandomUserResponse = response.json().await?;
        let identity = body.into_identity()?;
        debug!("Fetched random identity for {}", identity.email);
        Ok(identity)
    }

    /// Runs the fetch on a worker task. The caller may await the handle;
    /// failures surface through the returned result, not a panic.
    pub fn spawn_fetch(&self) -> JoinHandle<Result<Identity, RandomUserError>> {
        let client = self.clone();
        tokio::spawn(async move { client.fetch_identity().await })
    }

    /// Spawned fetch awaited under [`FETCH_TIMEOUT`]. This is what the
    /// recruiter handler calls: asynchronous inside, synchronous at the
    /// request boundary.
    pub async fn fetch_identity_bounded(&self) -> Result<Identity, RandomUserError> {
        let handle = self.spawn_fetch();
        match tokio::time::timeout(FETCH_TIMEOUT, handle).await {
            Err(_) => Err(RandomUserError::TimedOut),
            Ok(Err(join_err)) => Err(RandomUserError::TaskFailed(join_err.to_string())),
            Ok(Ok(result)) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [
            {
                "email": "freya.sorensen@example.com",
                "name": {"title": "Ms", "first": "Freya", "last": "Sorensen"}
            },
            {
                "email": "other.user@example.com",
                "name": {"title": "Mr", "first": "Other", "last": "User"}
            }
        ]
    }"#;

    #[test]
    fn maps_first_result_to_flat_identity() {
        let response: RandomUserResponse = serde_json::from_str(SAMPLE).unwrap();
        let identity = response.into_identity().unwrap();
        assert_eq!(identity.full_name, "Freya Sorensen");
        assert_eq!(identity.email, "freya.sorensen@example.com");
    }

    #[test]
    fn empty_results_is_an_error_not_a_panic() {
        let response: RandomUserResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(matches!(
            response.into_identity(),
            Err(RandomUserError::EmptyResults)
        ));
    }

    #[tokio::test]
    async fn bounded_fetch_surfaces_transport_failure_as_error() {
        // Nothing listens on this port; the spawned fetch must come back
        // with a retrievable error, not a panic or an indefinite block.
        let client = RandomUserClient::new("http://127.0.0.1:1".to_string());
        let err = client.fetch_identity_bounded().await.unwrap_err();
        assert!(matches!(err, RandomUserError::Http(_)));
    }

    #[test]
    fn unrecognized_payload_fields_are_tolerated() {
        let response: RandomUserResponse = serde_json::from_str(
            r#"{"results": [{"email": "a@b.c", "gender": "female",
                "name": {"title": "Ms", "first": "A", "last": "B"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_identity().unwrap().full_name, "A B");
    }
}
