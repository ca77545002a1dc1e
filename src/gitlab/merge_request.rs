//! Defines a gitlab merge request

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Error;
use crate::gitlab::connection::Connection;

/// Defines a [gitlab merge request](https://docs.gitlab.com/api/merge_requests/#get-single-mr)
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MergeRequest {
    /// Id, unique in its project
    pub iid: u64,
    /// Title
    pub title: String,
    /// Merge request URL
    pub web_url: String,
    /// Id of the target project
    pub project_id: u64,
}

impl MergeRequest {
    /// Get the merge request `iid` of the project `project_id`
    #[instrument(skip(connection))]
    pub async fn get(connection: &Connection, project_id: u64, iid: u64) -> Result<Self, Error> {
        connection
            .get_json(
                &format!("/projects/{project_id}/merge_requests/{iid}"),
                "merge request",
                |status| {
                    if status == StatusCode::NOT_FOUND {
                        Error::MergeRequestNotFound { iid, project_id }
                    } else {
                        Error::MergeRequestFetch { status }
                    }
                },
            )
            .await
    }
}
