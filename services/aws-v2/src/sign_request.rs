use crate::constants::*;
use crate::endpoint::Endpoint;
use crate::params::ParameterSet;
use crate::{Config, Credential, Request};
use aws2_core::hash::base64_hmac_sha256;
use aws2_core::time::{
    format_iso8601_millis, local_offset, now, parse_http_date, shift_to_offset, DateTime,
};
use aws2_core::{Context, Error, Result, SignRequest, SigningCredential};
use chrono::FixedOffset;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, DATE, HOST};
use http::{HeaderValue, Method};
use log::{debug, warn};

/// RequestSigner that implement AWS Signature Version 2.
///
/// - [Signature Version 2 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-2.html)
///
/// The signer holds no per-request state and can be shared between threads.
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    time: Option<DateTime>,
    utc_offset: Option<FixedOffset>,
    strict: bool,
}

impl RequestSigner {
    /// Create a new signer in permissive mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a signer that follows the `strict` flag of `cfg`.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new().with_strict(cfg.strict)
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the offset used for requests with `local_timezone` set,
    /// instead of the offset of the local clock.
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    /// Fail on missing credentials, unresolvable hosts and invalid `Date`
    /// headers instead of signing with what is there.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sign the request in place.
    ///
    /// Parameters from the body (or the query of the path without a body) are
    /// merged with the signature parameters, signed, and written back to where
    /// they came from.
    pub fn sign(&self, req: &mut Request, credential: Option<&Credential>) -> Result<()> {
        let empty = Credential::default();
        let cred = match credential {
            Some(cred) if cred.is_valid() => cred,
            Some(cred) => {
                if self.strict {
                    return Err(Error::credential_missing(
                        "access key id or secret access key is empty",
                    ));
                }
                warn!("signing with incomplete credential: {cred:?}");
                cred
            }
            None => {
                if self.strict {
                    return Err(Error::credential_missing("no credential provided"));
                }
                warn!("no credential provided, signing with empty credential");
                &empty
            }
        };

        let endpoint = Endpoint::resolve(req);
        if self.strict {
            endpoint.validate()?;
        }
        debug!("resolved endpoint: {endpoint:?}");

        let timestamp = self.timestamp(req)?;
        let session_token = cred.session_token.as_deref().filter(|v| !v.is_empty());

        let has_body = req.body.as_deref().is_some_and(|v| !v.is_empty());
        let (path, query) = split_path(&req.path);
        let path = path.to_string();
        let mut params = match &req.body {
            Some(body) if has_body => ParameterSet::parse(body),
            _ => ParameterSet::parse(query),
        };

        let method = req.method.clone().unwrap_or(if has_body {
            Method::POST
        } else {
            Method::GET
        });

        // Headers
        if !req.headers.contains_key(HOST) {
            req.headers.insert(HOST, HeaderValue::from_str(&endpoint.host)?);
        }
        if non_empty(&req.hostname).is_none() && non_empty(&req.host).is_none() {
            req.hostname = Some(endpoint.host.clone());
        }
        if has_body && !req.headers.contains_key(CONTENT_TYPE) {
            req.headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        }
        if let Some(token) = session_token {
            let mut value = HeaderValue::from_str(token)?;
            value.set_sensitive(true);
            req.headers.insert(X_AMZ_SECURITY_TOKEN, value);
        }

        // Parameters
        params.remove(PARAM_SIGNATURE);
        if let Some(token) = session_token {
            params.insert(PARAM_SECURITY_TOKEN, token);
        }
        params.insert(PARAM_TIMESTAMP, timestamp);
        params.insert(PARAM_SIGNATURE_VERSION, SIGNATURE_VERSION);
        params.insert(PARAM_SIGNATURE_METHOD, SIGNATURE_METHOD);
        params.insert(PARAM_ACCESS_KEY_ID, cred.access_key_id.as_str());

        let string_to_sign = string_to_sign(&method, &endpoint.host, &path, &params);
        debug!("calculated string to sign: {string_to_sign}");

        let signature =
            base64_hmac_sha256(cred.secret_access_key.as_bytes(), string_to_sign.as_bytes());
        params.insert(PARAM_SIGNATURE, signature);

        let serialized = params.to_form_urlencoded();
        if has_body {
            req.headers
                .insert(CONTENT_LENGTH, HeaderValue::from(serialized.len()));
            req.body = Some(serialized);
        } else {
            req.path = format!("{path}?{serialized}");
        }
        req.method = Some(method);

        Ok(())
    }

    fn timestamp(&self, req: &Request) -> Result<String> {
        let t = match (self.time, req.headers.get(DATE)) {
            (Some(t), _) => t,
            (None, Some(date)) => match date
                .to_str()
                .map_err(Error::from)
                .and_then(parse_http_date)
            {
                Ok(t) => t,
                Err(err) if self.strict => {
                    return Err(Error::request_invalid("invalid Date header").with_source(err))
                }
                Err(err) => {
                    warn!("ignoring invalid Date header, signing with current time: {err}");
                    now()
                }
            },
            (None, None) => now(),
        };

        let t = if req.local_timezone {
            shift_to_offset(t, self.utc_offset.unwrap_or_else(|| local_offset(t)))
        } else {
            t
        };

        Ok(format_iso8601_millis(t))
    }
}

impl SignRequest for RequestSigner {
    type Request = Request;
    type Credential = Credential;

    fn sign_request(
        &self,
        _: &Context,
        req: &mut Self::Request,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        self.sign(req, credential)
    }
}

/// Build the string to sign:
///
/// ```shell
/// GET
/// sqs.us-east-1.amazonaws.com
/// /
/// AWSAccessKeyId=ABCDEF&Action=ListQueues&...
/// ```
pub fn string_to_sign(method: &Method, host: &str, path: &str, params: &ParameterSet) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        method.as_str(),
        host.to_lowercase(),
        path,
        params.canonical_query()
    )
}

/// Split `path` at the first `?`, defaulting an empty path to `/`.
fn split_path(path: &str) -> (&str, &str) {
    let (path, query) = path.split_once('?').unwrap_or((path, ""));
    if path.is_empty() {
        ("/", query)
    } else {
        (path, query)
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|v| !v.is_empty())
}
