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

use mpsign_core::{utils::Redact, SigningCredential};

/// Credential for mixpanel.
///
/// Both values are trimmed on construction: key and secret files commonly
/// end with a newline that must not leak into the url or the signature.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    api_key: String,
    api_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(api_key: impl AsRef<str>, api_secret: impl AsRef<str>) -> Self {
        Self {
            api_key: api_key.as_ref().trim().to_string(),
            api_secret: api_secret.as_ref().trim().to_string(),
        }
    }

    /// Api key, sent in clear as `api_key`.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Api secret, only ever consumed by the signature.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("api_secret", &Redact::from(&self.api_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_trims_whitespace() {
        let cred = Credential::new("abc\n", "  xyz\r\n");
        assert_eq!(cred, Credential::new("abc", "xyz"));
    }

    #[test]
    fn test_credential_getters_return_trimmed_values() {
        let cred = Credential::new(" abc\t", "xyz\n");
        assert_eq!(cred.api_key(), "abc");
        assert_eq!(cred.api_secret(), "xyz");
    }

    #[test]
    fn test_credential_is_valid() {
        assert!(Credential::new("abc", "xyz").is_valid());
        assert!(!Credential::new("abc", "\n").is_valid());
        assert!(!Credential::new("", "xyz").is_valid());
    }

    #[test]
    fn test_credential_debug_redacted() {
        let cred = Credential::new("a1b2c3d4e5f6a7b8", "very-secret-value-123");
        let output = format!("{cred:?}");

        assert!(!output.contains("very-secret-value-123"));
        assert!(!output.contains("a1b2c3d4e5f6a7b8"));
        assert_eq!(
            output,
            r#"Credential { api_key: a1b***7b8, api_secret: ver***123 }"#
        );
    }
}
