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

//! Signer for the Mixpanel data export API.
//!
//! Every export call is authenticated by a signed query string: the request
//! parameters plus `api_key`, `expire` and `format` are sorted by key,
//! concatenated as `key=value`, suffixed with the api secret and hashed with
//! MD5 into `sig`.
//!
//! ## Example
//!
//! ```no_run
//! use mpsign_core::{Context, Result};
//! use mpsign_file_read_tokio::TokioFileRead;
//! use mpsign_mixpanel::Client;
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_file_read(TokioFileRead);
//! let client = Client::configure_auth(ctx, "/etc/mixpanel/key", "/etc/mixpanel/secret").await?;
//!
//! let url = client
//!     .raw_export([("from_date", "2024-01-01"), ("to_date", "2024-01-31")])
//!     .await?;
//! println!("GET {url}");
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{API_VERSION, DEFAULT_EXPIRES_IN, FORMAT, RAW_ENDPOINT, STANDARD_ENDPOINT};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod request;
pub use request::{ExportRequest, Host};

mod sign_request;
pub use sign_request::RequestSigner;

mod client;
pub use client::Client;
