//! reqwest-backed gateway against the university backend.

mod wire;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use scout_core::model::{University, UniversityId, WizardPreferences};

use crate::config::ApiConfig;
use crate::gateway::{GatewayError, UniversityGateway};

/// Every request gets one attempt and this much time; a timeout surfaces as
/// the same `Network` error as a connection failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP implementation of [`UniversityGateway`].
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Builds a gateway for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Network` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url().to_owned(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get(&self, path: &str) -> Result<Response, GatewayError> {
        let response = self
            .client
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| transport(path, &e))?;
        check_status(path, response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = self.get(path).await?;
        decode(path, response).await
    }
}

fn transport(path: &str, error: &reqwest::Error) -> GatewayError {
    warn!(path, %error, "backend request failed");
    GatewayError::Network(error.to_string())
}

fn check_status(path: &str, response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!(path, %status, "backend returned an error status");
        Err(GatewayError::Network(format!("{path} returned {status}")))
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, GatewayError> {
    response.json().await.map_err(|error| {
        warn!(path, %error, "backend payload failed to decode");
        GatewayError::Validation(error.to_string())
    })
}

#[async_trait]
impl UniversityGateway for HttpGateway {
    async fn fetch_all(&self) -> Result<Vec<University>, GatewayError> {
        let dtos = self.get_json("/universities/").await?;
        wire::map_universities(dtos)
    }

    async fn fetch_one(&self, id: UniversityId) -> Result<University, GatewayError> {
        let path = format!("/universities/{id}");
        let response = self
            .client
            .get(self.endpoint(&path))
            .send()
            .await
            .map_err(|e| transport(&path, &e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(id));
        }
        let response = check_status(&path, response)?;
        let dto = decode(&path, response).await?;
        wire::map_university(dto)
    }

    async fn region_insights(&self) -> Result<HashMap<String, u64>, GatewayError> {
        self.get_json("/insights/regions").await
    }

    async fn type_insights(&self) -> Result<HashMap<String, u64>, GatewayError> {
        self.get_json("/insights/types").await
    }

    async fn difficulty_insights(&self) -> Result<HashMap<String, u64>, GatewayError> {
        self.get_json("/insights/difficulty").await
    }

    async fn recommendations(
        &self,
        preferences: &WizardPreferences,
    ) -> Result<Vec<University>, GatewayError> {
        let path = "/wizard/recommendations";
        let response = self
            .client
            .post(self.endpoint(path))
            .json(preferences)
            .send()
            .await
            .map_err(|e| transport(path, &e))?;
        let response = check_status(path, response)?;
        let dtos = decode(path, response).await?;
        wire::map_universities(dtos)
    }

    async fn trigger_refresh(&self) -> Result<(), GatewayError> {
        let path = "/scrape/";
        let response = self
            .client
            .post(self.endpoint(path))
            .send()
            .await
            .map_err(|e| transport(path, &e))?;
        check_status(path, response)?;
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_without_double_slashes() {
        let config = ApiConfig::new("https://uniscout.example/api/").unwrap();
        let gateway = HttpGateway::new(&config).unwrap();

        assert_eq!(
            gateway.endpoint("/universities/"),
            "https://uniscout.example/api/universities/"
        );
        assert_eq!(
            gateway.endpoint("/insights/regions"),
            "https://uniscout.example/api/insights/regions"
        );
    }
}
