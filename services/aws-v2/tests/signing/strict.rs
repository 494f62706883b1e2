use super::{fixture_credential, fixture_time, list_queues_request};
use anyhow::Result;
use aws2::{Config, Credential, Request, RequestSigner};
use aws2_core::ErrorKind;
use http::header::DATE;
use http::HeaderValue;
use test_case::test_case;

fn strict_signer() -> RequestSigner {
    RequestSigner::from_config(&Config::new().with_strict(true)).with_time(fixture_time())
}

#[test_case(None ; "no credential")]
#[test_case(Some(Credential::new("", "abcdef1234567890")) ; "empty access key id")]
#[test_case(Some(Credential::new("ABCDEF", "")) ; "empty secret access key")]
fn test_strict_rejects_missing_credential(cred: Option<Credential>) {
    let mut req = list_queues_request();
    let err = strict_signer()
        .sign(&mut req, cred.as_ref())
        .expect_err("strict signing must fail");

    assert_eq!(err.kind(), ErrorKind::CredentialMissing);
    // Nothing was written to the request.
    assert_eq!(req.path, "/?Action=ListQueues&Version=2009-02-01");
}

#[test_case(Request::new() ; "no service and no host")]
#[test_case(Request::new().with_region("eu-west-1") ; "region only")]
#[test_case(Request::new().with_host("bad host") ; "invalid authority")]
fn test_strict_rejects_invalid_host(mut req: Request) {
    let err = strict_signer()
        .sign(&mut req, Some(&fixture_credential()))
        .expect_err("strict signing must fail");

    assert_eq!(err.kind(), ErrorKind::HostInvalid);
}

#[test]
fn test_strict_rejects_invalid_date() {
    let mut req = list_queues_request();
    req.headers
        .insert(DATE, HeaderValue::from_static("not a date"));

    let err = RequestSigner::new()
        .with_strict(true)
        .sign(&mut req, Some(&fixture_credential()))
        .expect_err("strict signing must fail");

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
}

#[test]
fn test_strict_signs_valid_request_identically() -> Result<()> {
    let mut strict = list_queues_request();
    let mut permissive = list_queues_request();

    strict_signer().sign(&mut strict, Some(&fixture_credential()))?;
    RequestSigner::new()
        .with_time(fixture_time())
        .sign(&mut permissive, Some(&fixture_credential()))?;

    assert_eq!(strict.path, permissive.path);
    assert_eq!(strict.headers, permissive.headers);

    Ok(())
}

#[test]
fn test_permissive_signs_unresolvable_host() -> Result<()> {
    let mut req = Request::new().with_path("/?Action=ListQueues");
    RequestSigner::new()
        .with_time(fixture_time())
        .sign(&mut req, Some(&fixture_credential()))?;

    assert_eq!(req.hostname.as_deref(), Some(".us-east-1.amazonaws.com"));
    assert!(req.path.contains("&Signature="));

    Ok(())
}
