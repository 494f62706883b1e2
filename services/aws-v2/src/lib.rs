//! AWS Signature Version 2 signer
//!
//! Signs query style requests (SQS, SimpleDB, the legacy EC2 and IAM query
//! APIs, ...) by merging `Timestamp`, `SignatureVersion`, `SignatureMethod`,
//! `AWSAccessKeyId` and `Signature` into the query string or the form body.
//!
//! ## Example
//!
//! ```
//! use aws2::{Credential, Request, RequestSigner};
//!
//! # fn example() -> aws2_core::Result<()> {
//! let mut req = Request::from_url("https://sqs.us-east-1.amazonaws.com/?Action=ListQueues")?;
//!
//! let cred = Credential::new("access_key_id", "secret_access_key");
//! RequestSigner::new().sign(&mut req, Some(&cred))?;
//! assert!(req.path.contains("&Signature="));
//!
//! // Hand the signed request to any http client.
//! let req = req.into_http()?;
//! assert_eq!(req.uri().host(), Some("sqs.us-east-1.amazonaws.com"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! With a credential provider:
//!
//! ```
//! use aws2::{DefaultCredentialProvider, Request, RequestSigner};
//! use aws2_core::{Context, OsEnv, Signer};
//!
//! # fn example() -> aws2_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new().with_env(OsEnv),
//!     DefaultCredentialProvider::new(),
//!     RequestSigner::new(),
//! );
//!
//! let mut req = Request::new()
//!     .with_service("sqs")
//!     .with_region("eu-west-1")
//!     .with_body("Action=ListQueues");
//! signer.sign(&mut req)?;
//! assert_eq!(req.hostname.as_deref(), Some("sqs.eu-west-1.amazonaws.com"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod endpoint;
pub use endpoint::{create_host, is_single_region, parse_host, Endpoint};

mod params;
pub use params::ParameterSet;

mod request;
pub use request::Request;

mod sign_request;
pub use sign_request::{string_to_sign, RequestSigner};

mod provide_credential;
pub use provide_credential::*;

use aws2_core::{Context, OsEnv, ProvideCredential, Result};

/// Sign a request with a permissive [`RequestSigner`].
///
/// Without `credential`, one is loaded from the process environment through
/// [`DefaultCredentialProvider`].
pub fn sign(req: &mut Request, credential: Option<&Credential>) -> Result<()> {
    let signer = RequestSigner::new();
    if credential.is_some() {
        return signer.sign(req, credential);
    }

    let ctx = Context::new().with_env(OsEnv);
    let credential = DefaultCredentialProvider::new().provide_credential(&ctx)?;
    signer.sign(req, credential.as_ref())
}
