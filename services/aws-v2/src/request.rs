use std::str::FromStr;

use aws2_core::{Error, Result};
use http::uri::{Authority, PathAndQuery, Scheme};
use http::{HeaderMap, Method, Uri};

/// Request describes an outbound call to be signed.
///
/// Every field except `path` and `headers` is optional and will be inferred
/// while signing. Signing mutates the request in place.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// HTTP method, `POST` with a body and `GET` otherwise if unset.
    pub method: Option<Method>,
    /// Host, may carry a port.
    pub host: Option<String>,
    /// Host without port, preferred over `host`.
    pub hostname: Option<String>,
    /// Port carried over from a parsed url.
    pub port: Option<u16>,
    /// Scheme carried over from a parsed url, `https` if unset.
    pub scheme: Option<Scheme>,
    /// Path, may embed a query string: `/?Action=ListQueues`.
    pub path: String,
    /// Form encoded body.
    pub body: Option<String>,
    /// HTTP headers.
    pub headers: HeaderMap,
    /// Service name, such as `sqs`.
    pub service: Option<String>,
    /// Region name, such as `us-east-1`.
    pub region: Option<String>,
    /// Format the `Timestamp` parameter with the local wall clock.
    pub local_timezone: bool,
}

impl Request {
    /// Create an empty request with path `/`.
    pub fn new() -> Self {
        Self {
            path: "/".to_string(),
            ..Default::default()
        }
    }

    /// Build a request from an endpoint url such as
    /// `https://sqs.us-east-1.amazonaws.com/?Action=ListQueues`.
    ///
    /// Scheme, host, port, path and query are carried over.
    pub fn from_url(url: &str) -> Result<Self> {
        let uri: Uri = url.parse()?;
        let parts = uri.into_parts();

        let mut req = Request::new();
        if let Some(authority) = parts.authority {
            req.hostname = Some(authority.host().to_string());
            req.port = authority.port_u16();
        }
        req.scheme = parts.scheme;
        if let Some(paq) = parts.path_and_query {
            req.path = paq.as_str().to_string();
        }

        Ok(req)
    }

    /// Set the method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the service.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Convert a signed request into an [`http::Request`].
    ///
    /// The request must carry a host, which signing always sets.
    pub fn into_http(self) -> Result<http::Request<String>> {
        let host = self
            .hostname
            .as_deref()
            .or(self.host.as_deref())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::request_invalid("request without host is invalid"))?;

        let authority = match self.port {
            Some(port) if self.hostname.is_some() => Authority::from_str(&format!("{host}:{port}"))?,
            _ => Authority::from_str(host)?,
        };

        let uri = Uri::builder()
            .scheme(self.scheme.unwrap_or(Scheme::HTTPS))
            .authority(authority)
            .path_and_query(PathAndQuery::from_str(&self.path)?)
            .build()?;

        let mut builder = http::Request::builder()
            .method(self.method.unwrap_or(Method::GET))
            .uri(uri);
        if let Some(headers) = builder.headers_mut() {
            *headers = self.headers;
        }

        Ok(builder.body(self.body.unwrap_or_default())?)
    }
}

impl FromStr for Request {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Request::from_url(s)
    }
}
