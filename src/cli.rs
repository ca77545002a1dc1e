//! Command line definition

use clap::Parser;

/// Shown after the arguments in `--help`
const AFTER_HELP: &str = "\
Environment variables:
  GITLAB_TOKEN          Required GitLab personal access token with API scope
  GITLAB_BASE_URL       Required GitLab instance URL
  ACCEPT_INVALID_CERTS  Set to 'yes' to skip TLS certificate validation

A .env file in the current directory is loaded too.

Examples:
  cr-pls https://gitlab.com/my-group/my-project/-/merge_requests/123";

/// Turn a GitLab merge request URL into a one-line code review request
#[derive(Debug, Parser)]
#[command(version, about, after_help = AFTER_HELP)]
pub struct Cli {
    /// Merge request URL
    #[arg(value_name = "MERGE_REQUEST_URL")]
    pub merge_request_url: Option<String>,
}
