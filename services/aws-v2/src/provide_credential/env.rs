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

use crate::{constants::*, Credential};
use aws2_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads AWS credentials from environment variables.
///
/// This provider looks for the following environment variables, primary name first:
/// - `AWS_ACCESS_KEY_ID` or `AWS_ACCESS_KEY`: The AWS access key ID
/// - `AWS_SECRET_ACCESS_KEY` or `AWS_SECRET_KEY`: The AWS secret access key
/// - `AWS_SESSION_TOKEN` or `AWS_SECURITY_TOKEN`: The AWS session token (optional)
///
/// A credential is returned as soon as either the key id or the secret is present;
/// the other one is left empty so that signing can still go ahead.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let access_key_id = ctx.env_var_any(ACCESS_KEY_ID_ENVS);
        let secret_access_key = ctx.env_var_any(SECRET_ACCESS_KEY_ENVS);

        if access_key_id.is_none() && secret_access_key.is_none() {
            return Ok(None);
        }

        Ok(Some(Credential {
            access_key_id: access_key_id.unwrap_or_default(),
            secret_access_key: secret_access_key.unwrap_or_default(),
            session_token: ctx.env_var_any(SESSION_TOKEN_ENVS),
        }))
    }
}
