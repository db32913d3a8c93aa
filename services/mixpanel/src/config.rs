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

use std::fmt::{Debug, Formatter};

use super::constants::*;
use mpsign_core::{utils::Redact, Context, QueryEncoding};

/// Config carries all the configuration for the mixpanel signer.
///
/// Build it once and share it as `Arc<Config>`.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MIXPANEL_API_KEY`]
    pub api_key: Option<String>,
    /// `api_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MIXPANEL_API_SECRET`]
    pub api_secret: Option<String>,
    /// `api_key_file` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MIXPANEL_API_KEY_FILE`]
    pub api_key_file: Option<String>,
    /// `api_secret_file` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MIXPANEL_API_SECRET_FILE`]
    pub api_secret_file: Option<String>,
    /// How query values are written into the signed url.
    ///
    /// Defaults to [`QueryEncoding::Raw`], the format the export api verifies
    /// against.
    pub query_encoding: QueryEncoding,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set api_secret
    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Set api_key_file
    pub fn with_api_key_file(mut self, path: impl Into<String>) -> Self {
        self.api_key_file = Some(path.into());
        self
    }

    /// Set api_secret_file
    pub fn with_api_secret_file(mut self, path: impl Into<String>) -> Self {
        self.api_secret_file = Some(path.into());
        self
    }

    /// Set query_encoding
    pub fn with_query_encoding(mut self, encoding: QueryEncoding) -> Self {
        self.query_encoding = encoding;
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(MIXPANEL_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MIXPANEL_API_SECRET) {
            self.api_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MIXPANEL_API_KEY_FILE) {
            self.api_key_file.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MIXPANEL_API_SECRET_FILE) {
            self.api_secret_file.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(Redact::from))
            .field("api_secret", &self.api_secret.as_ref().map(Redact::from))
            .field("api_key_file", &self.api_key_file)
            .field("api_secret_file", &self.api_secret_file)
            .field("query_encoding", &self.query_encoding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpsign_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env_keeps_explicit_values() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (MIXPANEL_API_KEY.to_string(), "env_key".to_string()),
                (MIXPANEL_API_SECRET.to_string(), "env_secret".to_string()),
                (
                    MIXPANEL_API_SECRET_FILE.to_string(),
                    "/run/secrets/mixpanel".to_string(),
                ),
            ]),
        });

        let config = Config::new().with_api_key("explicit_key").from_env(&ctx);

        assert_eq!(config.api_key.as_deref(), Some("explicit_key"));
        assert_eq!(config.api_secret.as_deref(), Some("env_secret"));
        assert_eq!(config.api_key_file, None);
        assert_eq!(
            config.api_secret_file.as_deref(),
            Some("/run/secrets/mixpanel")
        );
        assert_eq!(config.query_encoding, QueryEncoding::Raw);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::new()
            .with_api_key("abc")
            .with_api_secret("a-long-api-secret");
        let output = format!("{config:?}");

        assert!(!output.contains("a-long-api-secret"));
        assert!(output.contains("a-l***ret"));
    }
}
