mod query;
mod strict;

use aws2::{Credential, ParameterSet, Request};
use aws2_core::time::DateTime;
use chrono::{TimeZone, Utc};
use http::header::DATE;
use http::HeaderValue;

/// The instant all fixtures are signed at: `Wed, 26 Dec 2012 06:10:30 GMT`.
pub fn fixture_time() -> DateTime {
    Utc.with_ymd_and_hms(2012, 12, 26, 6, 10, 30)
        .single()
        .expect("fixture time must be valid")
}

pub fn fixture_credential() -> Credential {
    Credential::new("ABCDEF", "abcdef1234567890")
}

/// ListQueues against sqs in us-east-1 with a `Date` header.
pub fn list_queues_request() -> Request {
    let mut req = Request::new()
        .with_host("sqs.us-east-1.amazonaws.com")
        .with_path("/?Action=ListQueues&Version=2009-02-01");
    req.headers.insert(
        DATE,
        HeaderValue::from_static("Wed, 26 Dec 2012 06:10:30 GMT"),
    );
    req
}

/// Parse the query of a signed path.
pub fn path_params(req: &Request) -> ParameterSet {
    let query = req.path.split_once('?').map(|(_, q)| q).unwrap_or_default();
    ParameterSet::parse(query)
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
