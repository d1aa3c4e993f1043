use async_trait::async_trait;
use dto::Astronaut;
use reqwest::StatusCode;

use crate::ApiClientError;

/// Remote side of the astronaut list
#[async_trait]
pub trait AstronautApi: Send + Sync {
    async fn list_astronauts(&self) -> Result<Vec<Astronaut>, ApiClientError>;

    async fn delete_astronaut(&self, id: i32) -> Result<(), ApiClientError>;
}

/// [`AstronautApi`] over the service's REST endpoints
#[derive(Clone, Debug)]
pub struct HttpAstronautApi {
    client: reqwest::Client,
    base_url: String,
    legacy_status_codes: bool,
}

impl HttpAstronautApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            legacy_status_codes: false,
        }
    }

    /// Talk to a server running with the legacy status policy, where a
    /// successful delete answers `403`.
    pub fn legacy_status_codes(mut self) -> Self {
        self.legacy_status_codes = true;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn delete_succeeded(&self, status: StatusCode) -> bool {
        match self.legacy_status_codes {
            true => status == StatusCode::FORBIDDEN,
            false => status.is_success(),
        }
    }
}

#[async_trait]
impl AstronautApi for HttpAstronautApi {
    async fn list_astronauts(&self) -> Result<Vec<Astronaut>, ApiClientError> {
        let response = self.client.get(self.url("/astronauts")).send().await?;

        if response.status() != StatusCode::OK {
            return Err(ApiClientError::Status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn delete_astronaut(&self, id: i32) -> Result<(), ApiClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/astronauts/{id}")))
            .send()
            .await?;

        match self.delete_succeeded(response.status()) {
            true => Ok(()),
            false => Err(ApiClientError::Status(response.status().as_u16())),
        }
    }
}
