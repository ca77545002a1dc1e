//! Defines a connection to gitlab
use core::fmt;
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::Error;

/// Infos needed to connect to gitlab
#[derive(Clone)]
pub struct Connection {
    /// REST API root, ie `https://gitlab.example.com/api/v4`
    pub api_url: String,
    /// [`reqwest`] client
    pub http_client: Client,
    /// Authentication token
    pub token: String,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl Connection {
    /// Creates a new [`Connection`]
    pub fn new(api_url: String, token: String, accept_invalid_certs: bool) -> Result<Self, Error> {
        let http_client = reqwest::ClientBuilder::new()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(Error::HttpClient)?;
        Ok(Self {
            api_url,
            http_client,
            token,
        })
    }

    /// Creates a new [`Connection`] from the [`Config`]
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(
            config.api_url(),
            config.token.clone(),
            config.accept_invalid_certs,
        )
    }

    /// GET `{api_url}{path}` and decode the JSON body as a `T`
    ///
    /// Non-success statuses are turned into an [`Error`] by `status_error`.
    #[instrument(skip(self, status_error))]
    pub async fn get_json<T, F>(
        &self,
        path: &str,
        resource: &'static str,
        status_error: F,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        F: FnOnce(StatusCode) -> Error,
    {
        let url = format!("{}{path}", self.api_url);
        debug!("trying to GET {url}");

        let resp = self
            .http_client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            // The body is only logged, failing to read it must not hide the status
            let body = resp.text().await.unwrap_or_default();
            debug!("{url} - {status} : {body}");
            return Err(status_error(status));
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode { resource, source })
    }
}
