//! Reads the configuration from the environment (and from an optional `.env` file)

use core::fmt;
use std::env;
use tracing::{debug, instrument};

use crate::error::Error;

/// Personal access token, sent as `PRIVATE-TOKEN`
const GITLAB_TOKEN: &str = "GITLAB_TOKEN";
/// Instance URL, `/api/v4` is appended to it
const GITLAB_BASE_URL: &str = "GITLAB_BASE_URL";
/// Set to `yes` to talk to an instance with a self-signed certificate
const ACCEPT_INVALID_CERTS: &str = "ACCEPT_INVALID_CERTS";

/// Everything needed to talk to gitlab
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Authentication token
    pub token: String,
    /// Instance URL, without a trailing `/`
    pub base_url: String,
    /// Disables TLS certificate validation
    pub accept_invalid_certs: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

impl Config {
    /// Builds a [`Config`] from the process environment, after loading `.env` if there is one
    #[instrument(skip_all)]
    pub fn from_env() -> Result<Self, Error> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("loaded {}", path.display()),
            Err(err) => debug!("no .env file loaded: {err}"),
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a [`Config`] using `lookup` to read each variable
    ///
    /// Empty values are treated as if the variable was not set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(Error::MissingConfig(name))
        };

        let token = required(GITLAB_TOKEN)?;
        let base_url = required(GITLAB_BASE_URL)?
            .trim_end_matches('/')
            .to_owned();

        let accept_invalid_certs = match lookup(ACCEPT_INVALID_CERTS) {
            Some(value) if value == "yes" => true,
            Some(_) => {
                return Err(Error::InvalidConfig {
                    name: ACCEPT_INVALID_CERTS,
                    expected: "yes",
                });
            }
            None => false,
        };

        Ok(Self {
            token,
            base_url,
            accept_invalid_certs,
        })
    }

    /// Root of the REST API, ie `{base_url}/api/v4`
    pub fn api_url(&self) -> String {
        format!("{}/api/v4", self.base_url)
    }
}
