//! HTTP access to the shortening service.
//!
//! `ShortenClient` is the seam the UI talks to; `TinyUrlClient` is the
//! reqwest-backed implementation used by the application.

use std::future::Future;

use log::{debug, warn};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::app::AppConfig;

pub type ShortenResult<T> = Result<T, ShortenError>;

/// Why a shortening request did not produce a link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    /// The service answered with something other than `200 OK`.
    #[error("service responded with HTTP {status}")]
    HttpStatus { status: u16 },

    /// DNS, connect, timeout or body read failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The request could not be put together before dispatch.
    #[error("could not build request: {0}")]
    RequestConstruction(String),
}

impl From<reqwest::Error> for ShortenError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            return Self::RequestConstruction(error.to_string());
        }
        if error.is_timeout() {
            return Self::Transport(format!("request timed out: {error}"));
        }
        if error.is_connect() {
            return Self::Transport(format!("connection failed: {error}"));
        }
        Self::Transport(error.to_string())
    }
}

impl From<url::ParseError> for ShortenError {
    fn from(error: url::ParseError) -> Self {
        Self::RequestConstruction(error.to_string())
    }
}

/// Something that can turn a prepared endpoint into a short link.
pub trait ShortenClient: Send + Sync + 'static {
    /// Perform the GET and return the response body on `200 OK`.
    fn shorten(&self, endpoint: Url) -> impl Future<Output = ShortenResult<String>> + Send;
}

/// Shortening client backed by reqwest.
#[derive(Debug, Clone)]
pub struct TinyUrlClient {
    client: Client,
}

impl TinyUrlClient {
    pub fn new(config: &AppConfig) -> ShortenResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            // A redirect is not a short link
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { client })
    }
}

impl ShortenClient for TinyUrlClient {
    fn shorten(&self, endpoint: Url) -> impl Future<Output = ShortenResult<String>> + Send {
        let request = self.client.get(endpoint);

        async move {
            let response = request.send().await?;
            let status = response.status();

            if status != StatusCode::OK {
                warn!("Shortening service returned {}", status);
                return Err(ShortenError::HttpStatus {
                    status: status.as_u16(),
                });
            }

            let body = response.text().await?;
            debug!("Shortening service returned {} bytes", body.len());
            Ok(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::StatusCode as AxumStatus;
    use axum::response::Redirect;
    use axum::routing::get;
    use axum::Router;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    use crate::shortener::build_endpoint;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api-create.php")
    }

    fn client() -> TinyUrlClient {
        TinyUrlClient::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_client_creation() {
        assert!(TinyUrlClient::new(&AppConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_returns_body_on_ok() {
        let base = serve(Router::new().route(
            "/api-create.php",
            get(|| async { "https://tinyurl.com/abc123" }),
        ))
        .await;
        let endpoint = build_endpoint(&base, "http://example.com").unwrap();

        let result = client().shorten(endpoint).await;
        assert_eq!(result, Ok("https://tinyurl.com/abc123".to_string()));
    }

    #[tokio::test]
    async fn test_non_ok_status_is_error() {
        let base = serve(Router::new().route(
            "/api-create.php",
            get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "Error") }),
        ))
        .await;
        let endpoint = build_endpoint(&base, "http://example.com").unwrap();

        let result = client().shorten(endpoint).await;
        assert_eq!(result, Err(ShortenError::HttpStatus { status: 500 }));
    }

    #[tokio::test]
    async fn test_redirect_is_not_followed() {
        let base = serve(
            Router::new()
                .route(
                    "/api-create.php",
                    get(|| async { Redirect::temporary("/elsewhere") }),
                )
                .route(
                    "/elsewhere",
                    get(|| async { "<html>not a short link</html>" }),
                ),
        )
        .await;
        let endpoint = build_endpoint(&base, "http://example.com").unwrap();

        let result = client().shorten(endpoint).await;
        assert_eq!(result, Err(ShortenError::HttpStatus { status: 307 }));
    }

    #[tokio::test]
    async fn test_service_sees_decoded_link() {
        let base = serve(Router::new().route(
            "/api-create.php",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                params.get("url").cloned().unwrap_or_default()
            }),
        ))
        .await;
        let link = "http://example.com/?a=1&b=two words#frag";
        let endpoint = build_endpoint(&base, link).unwrap();

        let result = client().shorten(endpoint).await;
        assert_eq!(result, Ok(link.to_string()));
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = format!("http://{addr}/api-create.php");
        let endpoint = build_endpoint(&base, "http://example.com").unwrap();

        let result = client().shorten(endpoint).await;
        assert!(matches!(result, Err(ShortenError::Transport(_))));
    }

    #[test]
    fn test_parse_error_maps_to_construction() {
        let error: ShortenError = Url::parse("::").unwrap_err().into();
        assert!(matches!(error, ShortenError::RequestConstruction(_)));
    }
}
