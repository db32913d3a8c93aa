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
use mpsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::credential::Credential;
use crate::provide_credential::{ConfigCredentialProvider, EnvCredentialProvider};

/// DefaultCredentialProvider will try to load credential from different sources.
///
/// Resolution order:
///
/// 1. Environment variables (`MIXPANEL_API_KEY`, `MIXPANEL_API_SECRET`)
/// 2. Config, with key and secret files from `MIXPANEL_API_KEY_FILE` and
///    `MIXPANEL_API_SECRET_FILE`
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new() -> Self {
        Self::with_config(Arc::new(Config::default()))
    }

    /// Create a new DefaultCredentialProvider that falls back to the given config.
    pub fn with_config(config: Arc<Config>) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(ConfigCredentialProvider::new(config));

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    ///
    /// This allows adding a high-priority credential source that will be tried
    /// before all other providers in the default chain.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mpsign_mixpanel::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new()
    ///     .push_front(StaticCredentialProvider::new("api_key", "api_secret"));
    /// ```
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = Credential> + 'static,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::provide_credential::StaticCredentialProvider;
    use mpsign_core::StaticEnv;
    use mpsign_file_read_tokio::TokioFileRead;
    use std::collections::HashMap;
    use std::fs;

    #[tokio::test]
    async fn test_default_loader_without_env() {
        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::new(),
            });

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx).await.unwrap();

        assert!(credential.is_none());
    }

    #[tokio::test]
    async fn test_default_loader_with_env() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter([
                (MIXPANEL_API_KEY.to_string(), "env_key".to_string()),
                (MIXPANEL_API_SECRET.to_string(), "env_secret".to_string()),
            ]),
        });

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();

        assert_eq!("env_key", credential.api_key());
        assert_eq!("env_secret", credential.api_secret());
    }

    #[tokio::test]
    async fn test_default_loader_with_files_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = dir.path().join("key");
        let secret_path = dir.path().join("secret");
        fs::write(&key_path, "file_key\n").unwrap();
        fs::write(&secret_path, "file_secret\n").unwrap();

        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: HashMap::from_iter([
                    (
                        MIXPANEL_API_KEY_FILE.to_string(),
                        key_path.to_string_lossy().to_string(),
                    ),
                    (
                        MIXPANEL_API_SECRET_FILE.to_string(),
                        secret_path.to_string_lossy().to_string(),
                    ),
                ]),
            });

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();

        assert_eq!("file_key", credential.api_key());
        assert_eq!("file_secret", credential.api_secret());
    }

    #[tokio::test]
    async fn test_default_loader_push_front() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter([
                (MIXPANEL_API_KEY.to_string(), "env_key".to_string()),
                (MIXPANEL_API_SECRET.to_string(), "env_secret".to_string()),
            ]),
        });

        let loader = DefaultCredentialProvider::new()
            .push_front(StaticCredentialProvider::new("static_key", "static_secret"));
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();

        assert_eq!("static_key", credential.api_key());
    }

    #[tokio::test]
    async fn test_default_loader_with_chain_replaces_env_lookup() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from_iter([
                (MIXPANEL_API_KEY.to_string(), "env_key".to_string()),
                (MIXPANEL_API_SECRET.to_string(), "env_secret".to_string()),
            ]),
        });

        let loader = DefaultCredentialProvider::with_chain(
            ProvideCredentialChain::new()
                .push(StaticCredentialProvider::new("chain_key", "chain_secret")),
        );
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();
        assert_eq!("chain_key", credential.api_key());
        assert_eq!("chain_secret", credential.api_secret());

        let empty = DefaultCredentialProvider::with_chain(ProvideCredentialChain::new());
        assert!(empty.provide_credential(&ctx).await.unwrap().is_none());
    }
}
