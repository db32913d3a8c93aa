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

//! Mixpanel export api signer
use std::mem;
use std::time::Duration;

use log::debug;
use log::warn;
use mpsign_core::hash::hex_md5;
use mpsign_core::time::{expires_at, format_timestamp, now, DateTime};
use mpsign_core::{Result, SignRequest, SigningRequest};

use crate::constants::*;
use crate::credential::Credential;

/// RequestSigner that implements the mixpanel export api signature.
///
/// The signer consumes the caller parameters already present in the query
/// and rewrites the query as:
///
/// ```text
/// <caller params>&api_key=<key>&expire=<ts>&format=json&sig=<md5 hex>
/// ```
#[derive(Debug, Clone)]
pub struct RequestSigner {
    expires_in: Duration,
    time: Option<DateTime>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a signer using [`DEFAULT_EXPIRES_IN`].
    pub fn new() -> Self {
        Self {
            expires_in: DEFAULT_EXPIRES_IN,
            time: None,
        }
    }

    /// Set the lifetime used when the request doesn't carry one.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        req: &mut SigningRequest,
        cred: &Credential,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let now = self.time.unwrap_or_else(now);
        let expire = format_timestamp(expires_at(now, expires_in.unwrap_or(self.expires_in))?);

        let params: Vec<(String, String)> = mem::take(&mut req.query)
            .into_iter()
            .filter(|(k, _)| {
                if k == QUERY_SIG {
                    warn!("dropping caller supplied {QUERY_SIG} parameter");
                }
                !is_reserved(k)
            })
            .collect();

        let signature = signature(&params, cred, &expire);

        req.query = params;
        req.query_push(QUERY_API_KEY, cred.api_key());
        req.query_push(QUERY_EXPIRE, expire);
        req.query_push(QUERY_FORMAT, FORMAT);
        req.query_push(QUERY_SIG, signature);

        debug!("signed request for {}{}", req.base, req.path);
        Ok(())
    }
}

/// Keys owned by the signer, caller values for them never reach the url.
fn is_reserved(key: &str) -> bool {
    matches!(
        key,
        QUERY_API_KEY | QUERY_EXPIRE | QUERY_FORMAT | QUERY_SIG
    )
}

/// Compute `sig` for the given caller parameters.
///
/// Caller values for `api_key`, `expire` and `format` are replaced by the
/// signer's own before hashing.
fn signature(params: &[(String, String)], cred: &Credential, expire: &str) -> String {
    let mut s = canonical_query(params, cred, expire);
    debug!("canonical query: {s}");

    s.push_str(cred.api_secret());
    hex_md5(s.as_bytes())
}

/// Build the canonical query, the string to sign without the secret.
///
/// ## Format
///
/// ```text
/// sorted(params + api_key + expire + format)
///     .map(|(k, v)| k + "=" + v)
///     .join("")
/// ```
///
/// Keys are sorted byte-wise and nothing is escaped.
fn canonical_query(params: &[(String, String)], cred: &Credential, expire: &str) -> String {
    let mut query: Vec<(String, String)> = params
        .iter()
        .filter(|(k, _)| !matches!(k.as_str(), QUERY_API_KEY | QUERY_EXPIRE | QUERY_FORMAT))
        .cloned()
        .collect();
    query.push((QUERY_API_KEY.to_string(), cred.api_key().to_string()));
    query.push((QUERY_EXPIRE.to_string(), expire.to_string()));
    query.push((QUERY_FORMAT.to_string(), FORMAT.to_string()));

    SigningRequest::query_to_string(query, "=", "")
}
