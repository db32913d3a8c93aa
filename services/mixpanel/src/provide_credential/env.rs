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
use async_trait::async_trait;
use mpsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads mixpanel credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `MIXPANEL_API_KEY`: The mixpanel api key
/// - `MIXPANEL_API_SECRET`: The mixpanel api secret
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (envs.get(MIXPANEL_API_KEY), envs.get(MIXPANEL_API_SECRET)) {
            (Some(key), Some(secret)) => Ok(Some(Credential::new(key, secret))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpsign_core::{OsEnv, StaticEnv};
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let envs = HashMap::from([
            (MIXPANEL_API_KEY.to_string(), "abc\n".to_string()),
            (MIXPANEL_API_SECRET.to_string(), "xyz".to_string()),
        ]);
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs,
        });

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert_eq!(cred, Some(Credential::new("abc", "xyz")));

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> anyhow::Result<()> {
        let envs = HashMap::from([(MIXPANEL_API_KEY.to_string(), "abc".to_string())]);
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs,
        });

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }

    #[test]
    fn test_env_credential_provider_with_os_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        temp_env::with_vars(
            vec![
                (MIXPANEL_API_KEY, Some("os_key")),
                (MIXPANEL_API_SECRET, Some("os_secret")),
            ],
            || {
                tokio::runtime::Runtime::new().unwrap().block_on(async {
                    let ctx = Context::new().with_env(OsEnv);

                    let cred = EnvCredentialProvider::new()
                        .provide_credential(&ctx)
                        .await
                        .expect("load must succeed")
                        .expect("credential must be found");
                    assert_eq!("os_key", cred.api_key());
                    assert_eq!("os_secret", cred.api_secret());
                })
            },
        );
    }
}
