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

use crate::{Context, ProvideCredential, Result, SignRequest};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// It binds a [`Context`], a credential provider and a request signer together.
/// The credential is loaded on every call, nothing is cached between calls.
pub struct Signer<K, R>
where
    K: Send + Sync + Unpin + 'static,
    R: 'static,
{
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    signer: Arc<dyn SignRequest<Credential = K, Request = R>>,
}

impl<K, R> Clone for Signer<K, R>
where
    K: Send + Sync + Unpin + 'static,
    R: 'static,
{
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            provider: self.provider.clone(),
            signer: self.signer.clone(),
        }
    }
}

impl<K, R> Debug for Signer<K, R>
where
    K: Send + Sync + Unpin + 'static,
    R: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("ctx", &self.ctx)
            .field("provider", &self.provider)
            .field("signer", &self.signer)
            .finish()
    }
}

impl<K, R> Signer<K, R>
where
    K: Send + Sync + Unpin + 'static,
    R: 'static,
{
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        signer: impl SignRequest<Credential = K, Request = R>,
    ) -> Self {
        Self {
            ctx,
            provider: Arc::new(provider),
            signer: Arc::new(signer),
        }
    }

    /// Sign the request in place.
    pub fn sign(&self, req: &mut R) -> Result<()> {
        let cred = self.provider.provide_credential(&self.ctx)?;

        self.signer.sign_request(&self.ctx, req, cred.as_ref())
    }
}
