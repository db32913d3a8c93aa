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

use std::sync::Arc;

use log::debug;
use mpsign_core::{Context, ProvideCredential, Result, Signer};

use crate::config::Config;
use crate::credential::Credential;
use crate::provide_credential::FileCredentialProvider;
use crate::request::{ExportRequest, Host};
use crate::sign_request::RequestSigner;

/// Client produces signed export api urls.
///
/// The client never talks to mixpanel itself: every operation returns a url
/// that the caller fetches with a plain `GET` using any http client.
///
/// Clones share the same cached credential.
#[derive(Clone, Debug)]
pub struct Client {
    signer: Signer<Credential>,
    config: Arc<Config>,
}

impl Client {
    /// Create a new client loading credentials from `provider`.
    ///
    /// The credential is loaded lazily on the first operation.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
        config: Arc<Config>,
    ) -> Self {
        Self::with_signer(ctx, provider, RequestSigner::new(), config)
    }

    /// Create a new client with a custom [`RequestSigner`].
    pub fn with_signer(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
        signer: RequestSigner,
        config: Arc<Config>,
    ) -> Self {
        Self {
            signer: Signer::new(ctx, provider, signer),
            config,
        }
    }

    /// Create a client whose api key and api secret are read from two files.
    ///
    /// Both files are read right away, so a missing or unreadable source
    /// fails here with
    /// [`ErrorKind::CredentialUnavailable`](mpsign_core::ErrorKind::CredentialUnavailable)
    /// instead of on the first request.
    pub async fn configure_auth(ctx: Context, key_path: &str, secret_path: &str) -> Result<Self> {
        let provider = FileCredentialProvider::new(key_path, secret_path);
        let client = Self::new(ctx, provider, Arc::new(Config::default()));

        client.signer.credential().await?;
        Ok(client)
    }

    /// Sign `req` and return the url to fetch.
    pub async fn request(&self, req: ExportRequest) -> Result<String> {
        let expires_in = req.expires_in();
        let mut signing = req.into_signing_request(self.config.query_encoding);

        self.signer.sign(&mut signing, expires_in).await?;

        debug!("built export url for {}{}", signing.base, signing.path);
        Ok(signing.to_url())
    }

    /// Signed url for `/events`.
    pub async fn events<I, K, V>(&self, params: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request(ExportRequest::new("events").with_parameters(params))
            .await
    }

    /// Signed url for `/events/top`.
    pub async fn events_top<I, K, V>(&self, params: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request(
            ExportRequest::new("events")
                .with_sub_method("top")
                .with_parameters(params),
        )
        .await
    }

    /// Signed url for `/events/names`.
    pub async fn events_names<I, K, V>(&self, params: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request(
            ExportRequest::new("events")
                .with_sub_method("names")
                .with_parameters(params),
        )
        .await
    }

    /// Signed url for the raw data dump on the bulk export host.
    ///
    /// Required parameters are `from_date` and `to_date`, both in the format
    /// `yyyy-mm-dd`. Optional parameters are `event`, `where` and `bucket`.
    /// None of them are validated here, mistakes surface as an error from
    /// mixpanel once the url is fetched.
    pub async fn raw_export<I, K, V>(&self, params: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request(
            ExportRequest::new("export")
                .with_host(Host::Raw)
                .with_parameters(params),
        )
        .await
    }
}
