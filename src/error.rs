//! Defines every way a `cr-pls` run can fail
use reqwest::StatusCode;

/// Custom error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable is not set (or is empty)
    #[error("{0} environment variable is required")]
    MissingConfig(&'static str),

    /// An environment variable is set to an unsupported value
    #[error("the environment variable '{name}' is set, but not to its only value : '{expected}'")]
    InvalidConfig {
        /// Variable name
        name: &'static str,
        /// The only accepted value
        expected: &'static str,
    },

    /// No merge request URL on the command line
    #[error("a merge request URL is required")]
    MissingArgument,

    /// The argument can't be parsed as an URL
    #[error("Invalid URL format")]
    InvalidUrl(#[source] url::ParseError),

    /// The URL doesn't point to a merge request
    #[error("Invalid GitLab merge request URL format")]
    InvalidMergeRequestUrl,

    /// The merge request id isn't a base-10 integer
    #[error("Invalid merge request ID in URL")]
    InvalidMergeRequestId,

    /// The project doesn't exist or the token can't see it
    #[error("Project '{path}' not found. Check the path and your access permissions.")]
    ProjectNotFound {
        /// Project path, as found in the merge request URL
        path: String,
    },

    /// Any other non-success status on the project lookup
    #[error("Failed to fetch project details (HTTP {})", .status.as_u16())]
    ProjectFetch {
        /// Response status
        status: StatusCode,
    },

    /// The merge request doesn't exist in the project
    #[error("Merge request #{iid} not found in project {project_id}")]
    MergeRequestNotFound {
        /// Merge request iid
        iid: u64,
        /// Project id
        project_id: u64,
    },

    /// Any other non-success status on the merge request lookup
    #[error("Failed to fetch merge request (HTTP {})", .status.as_u16())]
    MergeRequestFetch {
        /// Response status
        status: StatusCode,
    },

    /// The [`reqwest`] client can't be built (TLS backend setup)
    #[error("Failed to create the HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Transport level failure (DNS, TLS, connection refused...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with something we can't read
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// What we were trying to decode
        resource: &'static str,
        /// Underlying [`serde_json`] error
        source: serde_json::Error,
    },
}
