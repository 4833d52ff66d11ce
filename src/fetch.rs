//! network access

use std::io::Read;

use crate::{error::FetchError, Config};

static GITHUB_JSON: &str = "application/vnd.github+json";

/// The requests the resolver and installer make.
///
/// Implementations attach whatever headers the remote requires; callers only
/// see bodies or a [`FetchError`].
pub trait Fetcher {
    /// GET `url` and parse the body as json.
    fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError>;

    /// GET `url` and return the raw body.
    fn download(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        (**self).fetch_json(url)
    }

    fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).download(url)
    }
}

/// A blocking [`Fetcher`] backed by a `ureq` agent.
pub struct HttpFetcher {
    agent: ureq::Agent,
    auth_header: Option<String>,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(&config.user_agent)
            .build();
        Self {
            agent,
            auth_header: config.token.as_ref().map(|token| format!("Bearer {token}")),
        }
    }

    fn get(&self, url: &str) -> ureq::Request {
        let req = self.agent.get(url);
        match self.auth_header.as_deref() {
            Some(auth) => req.set("Authorization", auth),
            None => req,
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        log::debug!("GET {url}");
        let resp = self.get(url).set("Accept", GITHUB_JSON).call()?;
        let body = resp.into_string()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        log::debug!("downloading {url}");
        let resp = self.get(url).call()?;
        let mut bytes = Vec::new();
        resp.into_reader().read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}


#[cfg(test)]
mod tests {
    use std::{
        io::Write,
        net::TcpListener,
        thread::{self, JoinHandle},
    };

    use super::*;

    /// Serve one canned HTTP response on a loopback port.
    ///
    /// Returns the url to request, and a handle yielding the raw request.
    fn serve_once(status: &str, headers: &[&str], body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/ofl/inter", listener.local_addr().unwrap());
        let mut response = format!(
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n",
            body.len()
        );
        for header in headers {
            response.push_str(header);
            response.push_str("\r\n");
        }
        response.push_str("\r\n");
        response.push_str(body);

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.ends_with(b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).to_ascii_lowercase()
        });
        (url, handle)
    }

    fn fetcher_with_token() -> HttpFetcher {
        HttpFetcher::new(&Config {
            token: Some("tok".into()),
            ..Default::default()
        })
    }

    #[test]
    fn json_request_headers() {
        let (url, server) = serve_once("200 OK", &[], r#"[{"name": "a.ttf", "type": "file"}]"#);
        let json = fetcher_with_token().fetch_json(&url).unwrap();
        assert_eq!(json[0]["name"], "a.ttf");

        let request = server.join().unwrap();
        assert!(request.contains("user-agent: fifi\r\n"), "{request}");
        assert!(
            request.contains("accept: application/vnd.github+json\r\n"),
            "{request}"
        );
        assert!(request.contains("authorization: bearer tok\r\n"), "{request}");
    }

    #[test]
    fn download_returns_body() {
        let (url, server) = serve_once("200 OK", &[], "font bytes");
        let bytes = HttpFetcher::new(&Config::default()).download(&url).unwrap();
        assert_eq!(bytes, b"font bytes");

        let request = server.join().unwrap();
        assert!(request.contains("user-agent: fifi\r\n"), "{request}");
        assert!(!request.contains("authorization:"), "{request}");
    }

    #[test]
    fn http_not_found() {
        let (url, server) = serve_once("404 Not Found", &[], r#"{"message": "Not Found"}"#);
        let err = fetcher_with_token().fetch_json(&url).unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        server.join().unwrap();
    }

    #[test]
    fn http_rate_limited() {
        let (url, server) = serve_once("403 Forbidden", &["x-ratelimit-remaining: 0"], "");
        let err = fetcher_with_token().fetch_json(&url).unwrap_err();
        assert!(matches!(err, FetchError::RateLimited), "{err:?}");
        server.join().unwrap();

        let (url, server) = serve_once("429 Too Many Requests", &[], "");
        let err = fetcher_with_token().fetch_json(&url).unwrap_err();
        assert!(matches!(err, FetchError::RateLimited), "{err:?}");
        server.join().unwrap();
    }

    #[test]
    fn http_server_error() {
        let (url, server) = serve_once("500 Internal Server Error", &[], "oops");
        let err = fetcher_with_token().download(&url).unwrap_err();
        assert!(matches!(err, FetchError::Status(500)), "{err:?}");
        assert!(!err.is_not_found());
        server.join().unwrap();
    }

    #[test]
    fn http_malformed_json() {
        let (url, server) = serve_once("200 OK", &["Content-Type: text/html"], "<html>");
        let err = fetcher_with_token().fetch_json(&url).unwrap_err();
        assert!(matches!(err, FetchError::Json(_)), "{err:?}");
        server.join().unwrap();
    }

    #[test]
    fn token_becomes_auth_header() {
        let config = Config {
            token: Some("s3cret".into()),
            ..Default::default()
        };
        let fetcher = HttpFetcher::new(&config);
        assert_eq!(fetcher.auth_header.as_deref(), Some("Bearer s3cret"));
        let req = fetcher.get("https://api.example/ofl/inter");
        assert_eq!(req.header("Authorization"), Some("Bearer s3cret"));
    }

    #[test]
    fn no_token_no_auth_header() {
        let fetcher = HttpFetcher::new(&Config::default());
        let req = fetcher.get("https://api.example/ofl/inter");
        assert_eq!(req.header("Authorization"), None);
    }

    #[test]
    fn mock_records_requests() {
        let fetcher = mock::MockFetcher::default()
            .json("https://a.example", serde_json::json!([]))
            .with("https://b.example", mock::Response::Garbage);
        assert!(fetcher.fetch_json("https://a.example").is_ok());
        assert!(matches!(
            fetcher.fetch_json("https://b.example"),
            Err(FetchError::Json(_))
        ));
        assert!(fetcher
            .fetch_json("https://c.example")
            .unwrap_err()
            .is_not_found());
        assert_eq!(
            fetcher.requests(),
            ["https://a.example", "https://b.example", "https://c.example"]
        );
    }
}
