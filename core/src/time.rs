// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Time related utils.

use crate::{Error, Result};
use chrono::{FixedOffset, Local, TimeZone, Utc};

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 with milliseconds: "2022-03-13T07:20:04.000Z"
pub fn format_iso8601_millis(t: DateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Format time into http date: "Sun, 06 Nov 1994 08:49:37 GMT"
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse an http date such as "Wed, 26 Dec 2012 06:10:30 GMT".
///
/// Both RFC 2822 dates (with `GMT` or a numeric zone) and RFC 3339 timestamps are accepted.
pub fn parse_http_date(s: &str) -> Result<DateTime> {
    let s = s.trim();

    let t = chrono::DateTime::parse_from_rfc2822(s)
        .or_else(|_| chrono::DateTime::parse_from_rfc3339(s))
        .map_err(|e| Error::request_invalid(format!("invalid date {s:?}")).with_source(e))?;
    Ok(t.with_timezone(&Utc))
}

/// Get the offset of the local clock from UTC at the given instant.
pub fn local_offset(t: DateTime) -> FixedOffset {
    Local.offset_from_utc_datetime(&t.naive_utc())
}

/// Shift an instant by `offset`, so that formatting it as UTC shows the wall clock of `offset`.
pub fn shift_to_offset(t: DateTime, offset: FixedOffset) -> DateTime {
    t + chrono::TimeDelta::seconds(i64::from(offset.local_minus_utc()))
}
