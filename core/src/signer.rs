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

use crate::{
    Context, Error, ProvideCredential, Result, SignRequest, SigningCredential, SigningRequest,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Signer is the main struct used to sign the request.
///
/// The credential is loaded on first use and cached; later calls only reload
/// it when the cached one is not valid. A loaded credential is used as is:
/// validity decides reuse, never whether signing may proceed.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Return the cached credential, loading it if needed.
    ///
    /// Fails with [`ErrorKind::CredentialUnavailable`](crate::ErrorKind::CredentialUnavailable)
    /// if no credential could be loaded.
    pub async fn credential(&self) -> Result<K> {
        let cached = self.credential.lock().expect("lock poisoned").clone();
        if let Some(cred) = cached.filter(|v| v.is_valid()) {
            return Ok(cred);
        }

        let cred = self.loader.provide_credential(&self.ctx).await?.ok_or_else(|| {
            Error::credential_unavailable("no credential found from configured provider")
        })?;

        *self.credential.lock().expect("lock poisoned") = Some(cred.clone());
        Ok(cred)
    }

    /// Signing request.
    pub async fn sign(&self, req: &mut SigningRequest, expires_in: Option<Duration>) -> Result<()> {
        let cred = self.credential().await?;
        self.builder.sign_request(req, &cred, expires_in)
    }
}
