//! Defines a gitlab project

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Error;
use crate::gitlab::connection::Connection;

/// Defines a [gitlab project](https://docs.gitlab.com/api/projects/#get-a-single-project)
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// Project id
    pub id: u64,
    /// Project name
    pub name: String,
}

impl Project {
    /// Get a project by its path (`group/subgroup/project`)
    #[instrument(skip(connection))]
    pub async fn get_by_path(connection: &Connection, path: &str) -> Result<Self, Error> {
        let encoded_path = urlencoding::encode(path);
        connection
            .get_json(&format!("/projects/{encoded_path}"), "project", |status| {
                if status == StatusCode::NOT_FOUND {
                    Error::ProjectNotFound {
                        path: path.to_owned(),
                    }
                } else {
                    Error::ProjectFetch { status }
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Server, ServerGuard};
    use std::io::{Read as _, Write as _};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    fn connection(server: &ServerGuard) -> Connection {
        Connection::new(format!("{}/api/v4", server.url()), "glpat-xxx".to_owned(), false)
            .unwrap()
    }

    #[tokio::test]
    async fn project_path_is_encoded_and_token_is_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v4/projects/acme%2Fwidgets")
            .match_header("PRIVATE-TOKEN", "glpat-xxx")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":7,"name":"widgets","path_with_namespace":"acme/widgets"}"#)
            .create_async()
            .await;

        let project = Project::get_by_path(&connection(&server), "acme/widgets")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            project,
            Project {
                id: 7,
                name: "widgets".to_owned(),
            }
        );
    }

    #[tokio::test]
    async fn not_found_names_the_path() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v4/projects/acme%2Fgadgets")
            .with_status(404)
            .with_body(r#"{"message":"404 Project Not Found"}"#)
            .create_async()
            .await;

        let err = Project::get_by_path(&connection(&server), "acme/gadgets")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ProjectNotFound { .. }));
        assert!(err.to_string().contains("acme/gadgets"), "{err}");
    }

    #[tokio::test]
    async fn other_status_includes_the_code() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v4/projects/acme%2Fwidgets")
            .with_status(401)
            .with_body(r#"{"message":"401 Unauthorized"}"#)
            .create_async()
            .await;

        let err = Project::get_by_path(&connection(&server), "acme/widgets")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch project details (HTTP 401)");
    }

    #[tokio::test]
    async fn missing_field_is_a_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v4/projects/acme%2Fwidgets")
            .with_status(200)
            .with_body(r#"{"id":7}"#)
            .create_async()
            .await;

        let err = Project::get_by_path(&connection(&server), "acme/widgets")
            .await
            .unwrap_err();

        assert!(
            matches!(err, Error::Decode { resource: "project", .. }),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn connection_refused_is_an_http_error() {
        // Nothing listens on port 1
        let connection =
            Connection::new("http://127.0.0.1:1/api/v4".to_owned(), "glpat-xxx".to_owned(), false)
                .unwrap();

        let err = Project::get_by_path(&connection, "acme/widgets")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Http(_)), "{err:?}");
        assert!(err.to_string().starts_with("HTTP request failed"), "{err}");
    }

    #[tokio::test]
    async fn truncated_not_found_body_keeps_the_not_found_error() {
        // Announces a 100 bytes body and hangs up after a few of them
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0_u8; 4096];
            let _read = stream.read(&mut request).unwrap();
            stream
                .write_all(
                    b"HTTP/1.1 404 Not Found\r\n\
                      Content-Type: application/json\r\n\
                      Content-Length: 100\r\n\
                      \r\n\
                      {\"message\"",
                )
                .unwrap();
        });

        let connection = Connection::new(
            format!("http://{addr}/api/v4"),
            "glpat-xxx".to_owned(),
            false,
        )
        .unwrap();

        let err = Project::get_by_path(&connection, "acme/widgets")
            .await
            .unwrap_err();
        handle.join().unwrap();

        assert!(matches!(err, Error::ProjectNotFound { .. }), "{err:?}");
    }
}
