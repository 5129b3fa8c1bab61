use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::error::OmdbError;
use super::types::OmdbSearchResponse;
use crate::traits::{MovieSearchProvider, SearchOutcome};

pub const BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb HTTP API client.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    api_key: String,
    base_url: Url,
    http: Client,
}

impl OmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Url::parse(BASE_URL).expect("BASE_URL is a valid URL"),
            http: Client::new(),
        }
    }

    /// Point the client at another endpoint (mirrors, local test servers).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, OmdbError> {
        self.base_url = Url::parse(base_url)?;
        Ok(self)
    }

    /// Rebuild the HTTP client with a whole-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, OmdbError> {
        self.http = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Full request URL for a title search.
    ///
    /// The title is percent-encoded (space becomes `%20`, not `+`).
    pub fn search_url(&self, title: &str) -> String {
        let mut base = self.base_url.clone();
        base.set_query(None);
        format!(
            "{base}?apikey={}&s={}",
            urlencoding::encode(&self.api_key),
            urlencoding::encode(title)
        )
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, OmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "OMDb API error");
            Err(OmdbError::Api {
                status,
                message: body,
            })
        }
    }
}

impl MovieSearchProvider for OmdbClient {
    type Error = OmdbError;

    async fn search_movies(&self, query: &str) -> Result<SearchOutcome, OmdbError> {
        tracing::debug!(query, "OMDb title search");

        let resp = self.http.get(self.search_url(query)).send().await?;

        let resp = Self::check_response(resp).await?;
        let search: OmdbSearchResponse = resp
            .json()
            .await
            .map_err(|e| OmdbError::Parse(e.to_string()))?;

        Ok(search.into_outcome())
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;

    /// Serve one canned HTTP response and hand back the raw request head.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut request = Vec::new();
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}/"), handle)
    }

    #[test]
    fn test_search_url_encoding() {
        let client = OmdbClient::new("fd416966");
        assert_eq!(
            client.search_url("Jurassic Park"),
            "https://www.omdbapi.com/?apikey=fd416966&s=Jurassic%20Park"
        );
        assert_eq!(
            client.search_url("Tom & Jerry?"),
            "https://www.omdbapi.com/?apikey=fd416966&s=Tom%20%26%20Jerry%3F"
        );
    }

    #[test]
    fn test_search_url_custom_base_drops_query() {
        let client = OmdbClient::new("k")
            .with_base_url("http://localhost:8080/omdb?x=1")
            .unwrap();
        assert_eq!(
            client.search_url("Alien"),
            "http://localhost:8080/omdb?apikey=k&s=Alien"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = OmdbClient::new("k").with_base_url("not a url").unwrap_err();
        assert!(matches!(err, OmdbError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_search_success() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"Search":[{"Title":"Alien","Year":"1979","imdbID":"tt0078748","Type":"movie","Poster":"N/A"}],"totalResults":"1","Response":"True"}"#,
        )
        .await;

        let client = OmdbClient::new("key").with_base_url(&base).unwrap();
        let outcome = client.search_movies("Alien Covenant").await.unwrap();

        let SearchOutcome::Success(movies) = outcome else {
            panic!("expected success");
        };
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].imdb_id, "tt0078748");

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /?apikey=key&s=Alien%20Covenant HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_search_api_reported_failure() {
        let (base, _server) =
            serve_once("200 OK", r#"{"Response":"False","Error":"Too many results."}"#).await;

        let client = OmdbClient::new("key").with_base_url(&base).unwrap();
        let outcome = client.search_movies("a").await.unwrap();
        assert_eq!(outcome, SearchOutcome::Failure("Too many results.".into()));
    }

    #[tokio::test]
    async fn test_search_http_status_error() {
        let (base, _server) = serve_once(
            "401 Unauthorized",
            r#"{"Response":"False","Error":"Invalid API key!"}"#,
        )
        .await;

        let client = OmdbClient::new("bad").with_base_url(&base).unwrap();
        let err = client.search_movies("Alien").await.unwrap_err();
        match err {
            OmdbError::Api { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("Invalid API key!"));
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let (base, _server) = serve_once("200 OK", "<html>maintenance</html>").await;

        let client = OmdbClient::new("key").with_base_url(&base).unwrap();
        let err = client.search_movies("Alien").await.unwrap_err();
        assert!(matches!(err, OmdbError::Parse(_)));
    }

    #[tokio::test]
    async fn test_search_connection_refused() {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = OmdbClient::new("key")
            .with_base_url(&format!("http://{addr}/"))
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .unwrap();
        let err = client.search_movies("Alien").await.unwrap_err();
        assert!(matches!(err, OmdbError::Http(_)));
    }
}
