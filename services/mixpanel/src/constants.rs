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

use std::time::Duration;

// Env values used in mixpanel services.
pub const MIXPANEL_API_KEY: &str = "MIXPANEL_API_KEY";
pub const MIXPANEL_API_SECRET: &str = "MIXPANEL_API_SECRET";
pub const MIXPANEL_API_KEY_FILE: &str = "MIXPANEL_API_KEY_FILE";
pub const MIXPANEL_API_SECRET_FILE: &str = "MIXPANEL_API_SECRET_FILE";

// Protocol constants, shared with the remote verifier.
pub const STANDARD_ENDPOINT: &str = "http://mixpanel.com/api";
pub const RAW_ENDPOINT: &str = "http://data.mixpanel.com/api";
pub const API_VERSION: &str = "2.0";
pub const FORMAT: &str = "json";

// Query keys filled by the signer.
pub const QUERY_API_KEY: &str = "api_key";
pub const QUERY_EXPIRE: &str = "expire";
pub const QUERY_FORMAT: &str = "format";
pub const QUERY_SIG: &str = "sig";

/// Lifetime of a signed url if the caller doesn't pick one.
pub const DEFAULT_EXPIRES_IN: Duration = Duration::from_secs(600);
