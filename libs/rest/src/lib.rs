//! REST implementation of the remote registration interface.
//!
//! Talks to an OpenMRS server's `ws/rest/v1` API: module inventory, patient
//! search, the `registrationcore` similar-patients endpoint, and patient
//! creation. Transport policy stays minimal here — no retries, no
//! authentication; callers own anything beyond a per-request timeout.

use async_trait::async_trait;
use omrs_models::{ModuleInfo, Patient, Results};
use omrs_registration::{ApiError, RegistrationApi};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Representation-format selector asking the server for fully expanded
/// resources rather than ref stubs.
const FULL_REPRESENTATION: &str = "full";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one OpenMRS server.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    /// Build a client for a server root such as
    /// `https://demo.openmrs.org/openmrs`; the `ws/rest/v1` prefix is
    /// appended here.
    pub fn new(server_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self::with_client(http, server_url))
    }

    /// Build a client reusing a preconfigured `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, server_url: &str) -> Self {
        Self {
            http,
            base_url: rest_base_url(server_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn fetch_results<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Vec<T>, ApiError> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body: Results<T> = response.json().await.map_err(transport)?;
        Ok(body.results)
    }
}

fn rest_base_url(server_url: &str) -> String {
    format!("{}/ws/rest/v1", server_url.trim_end_matches('/'))
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[async_trait]
impl RegistrationApi for RestClient {
    async fn list_modules(&self) -> Result<Vec<ModuleInfo>, ApiError> {
        let url = self.endpoint("module");
        tracing::debug!("GET {url}");
        self.fetch_results(self.http.get(&url).query(&[("v", FULL_REPRESENTATION)]))
            .await
    }

    async fn find_patients(&self, given_name: &str) -> Result<Vec<Patient>, ApiError> {
        let url = self.endpoint("patient");
        tracing::debug!("GET {url} q={given_name}");
        self.fetch_results(
            self.http
                .get(&url)
                .query(&[("q", given_name), ("v", FULL_REPRESENTATION)]),
        )
        .await
    }

    async fn find_similar(&self, patient: &Patient) -> Result<Vec<Patient>, ApiError> {
        let url = self.endpoint("registrationcore/similarpatients");
        tracing::debug!("GET {url}");
        self.fetch_results(self.http.get(&url).query(&patient.as_query_map()))
            .await
    }

    async fn register(&self, patient: &Patient) -> Result<(), ApiError> {
        let url = self.endpoint("patient");
        tracing::debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .json(patient)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}
