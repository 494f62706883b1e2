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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used in aws services.
pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";

// Query parameters injected by signature version 2.
pub const PARAM_TIMESTAMP: &str = "Timestamp";
pub const PARAM_SIGNATURE_VERSION: &str = "SignatureVersion";
pub const PARAM_SIGNATURE_METHOD: &str = "SignatureMethod";
pub const PARAM_ACCESS_KEY_ID: &str = "AWSAccessKeyId";
pub const PARAM_SECURITY_TOKEN: &str = "SecurityToken";
pub const PARAM_SIGNATURE: &str = "Signature";

pub const SIGNATURE_VERSION: &str = "2";
pub const SIGNATURE_METHOD: &str = "HmacSHA256";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

// Env values used in aws services, primary name first.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_ACCESS_KEY: &str = "AWS_ACCESS_KEY";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_SECRET_KEY: &str = "AWS_SECRET_KEY";
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
pub const AWS_SECURITY_TOKEN: &str = "AWS_SECURITY_TOKEN";

pub const ACCESS_KEY_ID_ENVS: &[&str] = &[AWS_ACCESS_KEY_ID, AWS_ACCESS_KEY];
pub const SECRET_ACCESS_KEY_ENVS: &[&str] = &[AWS_SECRET_ACCESS_KEY, AWS_SECRET_KEY];
pub const SESSION_TOKEN_ENVS: &[&str] = &[AWS_SESSION_TOKEN, AWS_SECURITY_TOKEN];

// Endpoint naming.
pub const DOMAIN: &str = "amazonaws.com";
pub const DEFAULT_REGION: &str = "us-east-1";
/// Services whose endpoint never carries a region segment.
pub const SINGLE_REGION_SERVICES: &[&str] = &["iam", "sts"];
/// Storage service that drops the region segment in the default region only.
pub const S3: &str = "s3";

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/general/latest/gr/signature-version-2.html)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
