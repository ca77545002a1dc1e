//! Builds the line we print

use crate::gitlab::{MergeRequest, Project};

/// `:pray: [<project name>] [<merge request title>](<merge request url>)`
pub fn review_request(project: &Project, merge_request: &MergeRequest) -> String {
    format!(
        ":pray: [{}] [{}]({})",
        project.name, merge_request.title, merge_request.web_url
    )
}
