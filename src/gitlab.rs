//! Talks to the gitlab REST API

pub mod connection;
pub mod merge_request;
pub mod project;

pub use connection::Connection;
pub use merge_request::MergeRequest;
pub use project::Project;
