use crate::constants::{DEFAULT_REGION, DOMAIN, S3, SINGLE_REGION_SERVICES};
use crate::Request;
use aws2_core::{Error, Result};
use http::header::HOST;
use http::uri::Authority;

/// Endpoint is the service, region and host a request is signed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Service name, empty if it could not be resolved.
    pub service: String,
    /// Region name, `us-east-1` if it could not be resolved.
    pub region: String,
    /// Host the request is sent to.
    pub host: String,
    /// Whether `host` was synthesized from `service` and `region`.
    pub inferred_host: bool,
}

impl Endpoint {
    /// Resolve the endpoint of a request.
    ///
    /// The host is taken from `hostname`, `host` and the `Host` header in that
    /// order. Explicit `service` and `region` win over values parsed from it.
    pub fn resolve(req: &Request) -> Self {
        let host = non_empty(req.hostname.as_deref())
            .or(non_empty(req.host.as_deref()))
            .or(non_empty(
                req.headers.get(HOST).and_then(|v| v.to_str().ok()),
            ));

        let (parsed_service, parsed_region) = host.and_then(parse_host).unzip();

        let service = non_empty(req.service.as_deref())
            .map(str::to_string)
            .or(parsed_service)
            .unwrap_or_default();
        let region = non_empty(req.region.as_deref())
            .map(str::to_string)
            .or(parsed_region.flatten())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        match host {
            Some(host) => Self {
                host: host.to_string(),
                service,
                region,
                inferred_host: false,
            },
            None => Self {
                host: create_host(&service, &region),
                service,
                region,
                inferred_host: true,
            },
        }
    }

    /// Check that the endpoint can be addressed.
    pub fn validate(&self) -> Result<()> {
        if self.inferred_host && self.service.is_empty() {
            return Err(Error::host_invalid(
                "no host given and no service to build one from",
            ));
        }
        if self.host.is_empty() {
            return Err(Error::host_invalid("host is empty"));
        }
        self.host.parse::<Authority>().map_err(|e| {
            Error::host_invalid(format!("host {:?} is not a valid authority", self.host))
                .with_source(e)
        })?;

        Ok(())
    }
}

/// Parse `<service>[.<region>].amazonaws.com` into service and region.
///
/// Returns `None` for hosts outside of the domain or with more segments.
pub fn parse_host(host: &str) -> Option<(String, Option<String>)> {
    let host = host.to_ascii_lowercase();
    let prefix = host.strip_suffix(DOMAIN)?.strip_suffix('.')?;

    let (service, region) = match prefix.split_once('.') {
        Some((service, region)) => (service, Some(region)),
        None => (prefix, None),
    };
    if service.is_empty() || region.is_some_and(|r| r.contains('.')) {
        return None;
    }

    Some((
        service.to_string(),
        region.filter(|r| !r.is_empty()).map(str::to_string),
    ))
}

/// Build the default host of a service in a region.
///
/// ```shell
/// (glacier, us-west-1) => glacier.us-west-1.amazonaws.com
/// (iam, us-west-1)     => iam.amazonaws.com
/// (s3, us-east-1)      => s3.amazonaws.com
/// (s3, eu-west-1)      => s3.eu-west-1.amazonaws.com
/// ```
pub fn create_host(service: &str, region: &str) -> String {
    if is_single_region(service) || (service == S3 && region == DEFAULT_REGION) {
        format!("{service}.{DOMAIN}")
    } else {
        format!("{service}.{region}.{DOMAIN}")
    }
}

/// Whether a service is only served from one global endpoint.
pub fn is_single_region(service: &str) -> bool {
    SINGLE_REGION_SERVICES.contains(&service)
}

fn non_empty(v: Option<&str>) -> Option<&str> {
    v.filter(|v| !v.is_empty())
}
