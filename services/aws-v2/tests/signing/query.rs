use super::{fixture_credential, fixture_time, init_logger, list_queues_request, path_params};
use anyhow::Result;
use aws2::{Credential, Request, RequestSigner};
use aws2_core::{Context, SignRequest, Signer, StaticEnv};
use chrono::FixedOffset;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, HOST};
use http::Method;
use pretty_assertions::assert_eq;

#[test]
fn test_sign_list_queues() -> Result<()> {
    init_logger();

    let mut req = list_queues_request();
    RequestSigner::new().sign(&mut req, Some(&fixture_credential()))?;

    assert_eq!(req.method, Some(Method::GET));
    assert!(req
        .path
        .starts_with("/?Action=ListQueues&Version=2009-02-01&Timestamp="));
    assert!(req
        .path
        .contains("Signature=DLYbFaqPn%2BgKVbpNrqA6feoGyczH%2B30nNmlFYGS18yk%3D"));

    let params = path_params(&req);
    assert_eq!(params.get("Timestamp"), Some("2012-12-26T06:10:30.000Z"));
    assert_eq!(params.get("SignatureVersion"), Some("2"));
    assert_eq!(params.get("SignatureMethod"), Some("HmacSHA256"));
    assert_eq!(params.get("AWSAccessKeyId"), Some("ABCDEF"));
    assert_eq!(params.get("SecurityToken"), None);

    assert_eq!(req.headers[HOST], "sqs.us-east-1.amazonaws.com");
    assert!(!req.headers.contains_key(CONTENT_TYPE));
    assert!(!req.headers.contains_key(CONTENT_LENGTH));

    Ok(())
}

#[test]
fn test_sign_list_queues_with_other_credential() -> Result<()> {
    let mut req = list_queues_request();
    RequestSigner::new().sign(&mut req, Some(&Credential::new("A", "B")))?;

    assert_eq!(
        path_params(&req).get("Signature"),
        Some("Z0LJr9UHo/vePJ8fUhB5fMqog/i6tNHib25+ItMSfDY=")
    );

    Ok(())
}

#[test]
fn test_sign_escapes_reserved_characters() -> Result<()> {
    let mut req = list_queues_request().with_path(
        "/?Action=ListQueues&Version=2009-02-01&QueueName=it%27s+%28a%29*%21%2B+q",
    );
    RequestSigner::new().sign(&mut req, Some(&fixture_credential()))?;

    let params = path_params(&req);
    assert_eq!(params.get("QueueName"), Some("it's (a)*!+ q"));
    assert_eq!(
        params.get("Signature"),
        Some("HEkUD4LoRgbhC1LKCJHVwT11Xtw2qZrS5dbk2V0HWEE=")
    );

    Ok(())
}

#[test]
fn test_sign_from_url() -> Result<()> {
    let mut req = Request::from_url(
        "https://sqs.us-east-1.amazonaws.com/?Action=ListQueues&Version=2009-02-01",
    )?;
    RequestSigner::new()
        .with_time(fixture_time())
        .sign(&mut req, Some(&fixture_credential()))?;

    assert_eq!(
        path_params(&req).get("Signature"),
        Some("DLYbFaqPn+gKVbpNrqA6feoGyczH+30nNmlFYGS18yk=")
    );

    let req = req.into_http()?;
    assert_eq!(req.method(), Method::GET);
    assert_eq!(req.uri().scheme_str(), Some("https"));
    assert_eq!(req.uri().host(), Some("sqs.us-east-1.amazonaws.com"));
    assert!(req
        .uri()
        .query()
        .is_some_and(|q| q.ends_with("Signature=DLYbFaqPn%2BgKVbpNrqA6feoGyczH%2B30nNmlFYGS18yk%3D")));

    Ok(())
}

#[test]
fn test_sign_with_session_token() -> Result<()> {
    let mut req = list_queues_request();
    RequestSigner::new().sign(
        &mut req,
        Some(&fixture_credential().with_session_token("TOKEN")),
    )?;

    let params = path_params(&req);
    assert_eq!(params.get("SecurityToken"), Some("TOKEN"));
    assert_eq!(
        params.get("Signature"),
        Some("Zhyo2Wx18zc3J43lcIvlyc6iQHnrST5WsH3Jk16IaR0=")
    );
    assert_eq!(req.headers["x-amz-security-token"], "TOKEN");

    Ok(())
}

#[test]
fn test_sign_discards_existing_signature() -> Result<()> {
    let mut req = list_queues_request()
        .with_path("/?Action=ListQueues&Signature=forged&Version=2009-02-01");
    RequestSigner::new().sign(&mut req, Some(&fixture_credential()))?;

    assert_eq!(
        path_params(&req).get("Signature"),
        Some("DLYbFaqPn+gKVbpNrqA6feoGyczH+30nNmlFYGS18yk=")
    );
    assert!(req.path.ends_with("&Signature=DLYbFaqPn%2BgKVbpNrqA6feoGyczH%2B30nNmlFYGS18yk%3D"));

    Ok(())
}

#[test]
fn test_sign_is_deterministic() -> Result<()> {
    let signer = RequestSigner::new().with_time(fixture_time());

    let mut a = list_queues_request();
    let mut b = list_queues_request();
    signer.sign(&mut a, Some(&fixture_credential()))?;
    signer.sign(&mut b, Some(&fixture_credential()))?;

    assert_eq!(a.path, b.path);

    Ok(())
}

#[test]
fn test_sign_keeps_caller_host_header() -> Result<()> {
    let mut req = list_queues_request();
    req.host = None;
    req.headers
        .insert(HOST, "SQS.us-east-1.amazonaws.com".parse()?);
    RequestSigner::new().sign(&mut req, Some(&fixture_credential()))?;

    // The host is lower cased for signing only.
    assert_eq!(req.headers[HOST], "SQS.us-east-1.amazonaws.com");
    assert_eq!(req.hostname.as_deref(), Some("SQS.us-east-1.amazonaws.com"));
    assert_eq!(
        path_params(&req).get("Signature"),
        Some("DLYbFaqPn+gKVbpNrqA6feoGyczH+30nNmlFYGS18yk=")
    );

    Ok(())
}

#[test]
fn test_sign_synthesizes_host() -> Result<()> {
    let mut req = Request::new()
        .with_service("glacier")
        .with_region("us-west-1")
        .with_path("/?Action=ListVaults");
    RequestSigner::new().sign(&mut req, Some(&fixture_credential()))?;

    assert_eq!(req.hostname.as_deref(), Some("glacier.us-west-1.amazonaws.com"));
    assert_eq!(req.headers[HOST], "glacier.us-west-1.amazonaws.com");

    Ok(())
}

#[test]
fn test_sign_local_timezone() -> Result<()> {
    let mut req = list_queues_request();
    req.local_timezone = true;

    let la = FixedOffset::west_opt(8 * 3600).expect("offset must be valid");
    RequestSigner::new()
        .with_utc_offset(la)
        .sign(&mut req, Some(&fixture_credential()))?;

    assert_eq!(
        path_params(&req).get("Timestamp"),
        Some("2012-12-25T22:10:30.000Z")
    );

    Ok(())
}

#[test]
fn test_sign_without_credential_is_permissive() -> Result<()> {
    let mut req = list_queues_request();
    RequestSigner::new().sign(&mut req, None)?;

    let params = path_params(&req);
    assert_eq!(params.get("AWSAccessKeyId"), Some(""));
    assert_eq!(
        params.get("Signature"),
        Some("Odp039O1/nSlg6XM3xNKcuyM9cPFyUiifgHBD96SPOM=")
    );

    Ok(())
}

#[test]
fn test_signer_with_env_provider() -> Result<()> {
    init_logger();

    let ctx = Context::new().with_env(StaticEnv::from_pairs([
        ("AWS_ACCESS_KEY", "ABCDEF"),
        ("AWS_SECRET_KEY", "abcdef1234567890"),
    ]));
    let signer = Signer::new(ctx, aws2::DefaultCredentialProvider::new(), RequestSigner::new());

    let mut req = list_queues_request();
    signer.sign(&mut req)?;

    assert_eq!(
        path_params(&req).get("Signature"),
        Some("DLYbFaqPn+gKVbpNrqA6feoGyczH+30nNmlFYGS18yk=")
    );

    Ok(())
}

#[test]
fn test_sign_request_trait() -> Result<()> {
    let mut req = list_queues_request();
    RequestSigner::new().sign_request(&Context::new(), &mut req, Some(&fixture_credential()))?;

    assert_eq!(
        path_params(&req).get("Signature"),
        Some("DLYbFaqPn+gKVbpNrqA6feoGyczH+30nNmlFYGS18yk=")
    );

    Ok(())
}

#[test]
fn test_aws2_sign_with_explicit_credential() -> Result<()> {
    let mut req = list_queues_request();
    aws2::sign(&mut req, Some(&Credential::new("A", "B")))?;

    assert_eq!(
        path_params(&req).get("Signature"),
        Some("Z0LJr9UHo/vePJ8fUhB5fMqog/i6tNHib25+ItMSfDY=")
    );

    Ok(())
}

#[test]
fn test_aws2_sign_reads_process_env() -> Result<()> {
    temp_env::with_vars(
        [
            ("AWS_ACCESS_KEY_ID", Some("A")),
            ("AWS_ACCESS_KEY", None),
            ("AWS_SECRET_ACCESS_KEY", Some("B")),
            ("AWS_SECRET_KEY", None),
            ("AWS_SESSION_TOKEN", None),
            ("AWS_SECURITY_TOKEN", None),
        ],
        || -> Result<()> {
            let mut req = list_queues_request();
            aws2::sign(&mut req, None)?;

            assert_eq!(
                path_params(&req).get("Signature"),
                Some("Z0LJr9UHo/vePJ8fUhB5fMqog/i6tNHib25+ItMSfDY=")
            );
            Ok(())
        },
    )
}
