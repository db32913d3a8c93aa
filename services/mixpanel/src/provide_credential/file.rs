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
use log::debug;
use mpsign_core::{Context, Error, ProvideCredential, Result};

use crate::Credential;

/// FileCredentialProvider loads the api key and api secret from two files.
///
/// Each file holds one value; surrounding whitespace (such as the trailing
/// newline most editors add) is stripped. Paths starting with `~/` are
/// expanded against the home dir of the context.
///
/// Unlike other providers, a source that can't be read is an error rather
/// than `None`: the caller named these files explicitly.
#[derive(Debug, Clone)]
pub struct FileCredentialProvider {
    api_key_path: String,
    api_secret_path: String,
}

impl FileCredentialProvider {
    /// Create a new FileCredentialProvider from the key and secret paths.
    pub fn new(api_key_path: impl Into<String>, api_secret_path: impl Into<String>) -> Self {
        Self {
            api_key_path: api_key_path.into(),
            api_secret_path: api_secret_path.into(),
        }
    }
}

#[async_trait]
impl ProvideCredential for FileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let api_key = read_source(ctx, "api key", &self.api_key_path).await?;
        let api_secret = read_source(ctx, "api secret", &self.api_secret_path).await?;

        Ok(Some(Credential::new(api_key, api_secret)))
    }
}

/// Read one credential source, mapping every failure to `CredentialUnavailable`.
pub(crate) async fn read_source(ctx: &Context, what: &str, path: &str) -> Result<String> {
    let expanded = ctx.expand_home_dir(path).ok_or_else(|| {
        Error::credential_unavailable(format!(
            "failed to read {what} from {path}: home dir not found"
        ))
    })?;

    debug!("reading {what} from {expanded}");
    let content = ctx.file_read(&expanded).await.map_err(|e| {
        Error::credential_unavailable(format!("failed to read {what} from {expanded}"))
            .with_source(e)
    })?;
    // Lossy decoding would silently swap bytes for U+FFFD and sign with the wrong value.
    let content = String::from_utf8(content).map_err(|e| {
        Error::credential_unavailable(format!("{what} in {expanded} is not valid utf-8"))
            .with_source(e)
    })?;

    Ok(content.trim().to_string())
}
