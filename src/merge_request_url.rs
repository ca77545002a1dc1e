//! Extracts the project path and the merge request iid from a merge request URL

use url::Url;

use crate::error::Error;

/// What comes between the project path and the merge request iid
const MERGE_REQUESTS_SEPARATOR: &str = "/-/merge_requests/";

/// Location of a merge request, as found in its URL
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeRequestRef {
    /// Project path, ie `group/subgroup/project`
    pub project_path: String,
    /// Merge request iid (per project)
    pub iid: u64,
}

impl MergeRequestRef {
    /// Parses `https://{host}/{project path}/-/merge_requests/{iid}`
    ///
    /// Anything after the iid (`/diffs`, a query string, an anchor...) is ignored.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let url = Url::parse(input).map_err(Error::InvalidUrl)?;

        let parts: Vec<&str> = url.path().split(MERGE_REQUESTS_SEPARATOR).collect();
        let &[project_part, iid_part] = parts.as_slice() else {
            return Err(Error::InvalidMergeRequestUrl);
        };

        let project_path = project_part.strip_prefix('/').unwrap_or(project_part);
        if project_path.is_empty() {
            return Err(Error::InvalidMergeRequestUrl);
        }
        // The path is encoded again when calling the API
        let project_path = urlencoding::decode(project_path)
            .map_err(|_err| Error::InvalidMergeRequestUrl)?
            .into_owned();

        let iid_segment = iid_part.split('/').next().unwrap_or_default();
        // `u64::from_str` also accepts a leading '+'
        if !iid_segment.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(Error::InvalidMergeRequestId);
        }
        let iid = iid_segment
            .parse()
            .map_err(|_err| Error::InvalidMergeRequestId)?;

        Ok(Self { project_path, iid })
    }
}
