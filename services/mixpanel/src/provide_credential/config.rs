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

use async_trait::async_trait;
use mpsign_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

use super::file::read_source;
use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider will load credential from config.
///
/// Each value is taken inline (`api_key`, `api_secret`) when set, otherwise
/// read from its file (`api_key_file`, `api_secret_file`). Unset fields fall
/// back to the environment before that.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new loader via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        let Some(api_key) = resolve(ctx, "api key", config.api_key, config.api_key_file).await?
        else {
            return Ok(None);
        };
        let Some(api_secret) =
            resolve(ctx, "api secret", config.api_secret, config.api_secret_file).await?
        else {
            return Ok(None);
        };

        Ok(Some(Credential::new(api_key, api_secret)))
    }
}

async fn resolve(
    ctx: &Context,
    what: &str,
    value: Option<String>,
    path: Option<String>,
) -> Result<Option<String>> {
    match (value, path) {
        (Some(v), _) => Ok(Some(v)),
        (None, Some(path)) => read_source(ctx, what, &path).await.map(Some),
        (None, None) => Ok(None),
    }
}
