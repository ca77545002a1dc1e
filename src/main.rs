//! Turn a GitLab merge request URL into a one-line code review request.

use clap::{CommandFactory as _, Parser as _};
use std::io;
use std::process::ExitCode;
use tracing::{debug, error, instrument};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Error;
use crate::gitlab::{Connection, MergeRequest, Project};
use crate::merge_request_url::MergeRequestRef;

mod cli;
mod config;
mod error;
mod gitlab;
mod merge_request_url;
mod output;

/// Default log level when `RUST_LOG` isn't set
const DEFAULT_LOG_FILTER: &str = "warn";

/// Prints `err` and the usage, for errors the user can fix by reading it
#[expect(clippy::print_stderr, reason = "Errors are reported on stderr")]
fn usage_error(err: &Error) -> ExitCode {
    eprintln!("Error: {err}");
    if let Err(print_err) = Cli::command().print_help() {
        error!("{print_err}");
    }
    ExitCode::FAILURE
}

/// Resolves the merge request behind `input` and builds the line to print
#[instrument(skip(config))]
async fn run(config: &Config, input: &str) -> Result<String, Error> {
    // Nothing is sent to gitlab if the URL is invalid
    let merge_request_ref = MergeRequestRef::parse(input)?;
    debug!("{merge_request_ref:?}");

    let connection = Connection::from_config(config)?;

    let project = Project::get_by_path(&connection, &merge_request_ref.project_path).await?;
    debug!("{project:?}");

    let merge_request = MergeRequest::get(&connection, project.id, merge_request_ref.iid).await?;
    debug!(
        "found merge request !{} of project {}",
        merge_request.iid, merge_request.project_id
    );

    Ok(output::review_request(&project, &merge_request))
}

#[expect(clippy::print_stdout, reason = "The result is printed on stdout")]
#[expect(clippy::print_stderr, reason = "Errors are reported on stderr")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout only carries the result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_err| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    // `--help` and `--version` are handled here, before reading the configuration
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let exit_code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            if let Err(print_err) = err.print() {
                error!("{print_err}");
            }
            return exit_code;
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => return usage_error(&err),
    };

    let Some(input) = cli.merge_request_url else {
        return usage_error(&Error::MissingArgument);
    };

    match run(&config, &input).await {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
