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

//! Time related utils.

use std::time::Duration;

use chrono::TimeDelta;
use chrono::Utc;

use crate::{Error, Result};

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into unix epoch seconds: "1000000000"
pub fn format_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}

/// Compute the time at which something created at `t` expires.
pub fn expires_at(t: DateTime, expires_in: Duration) -> Result<DateTime> {
    let delta = TimeDelta::from_std(expires_in).map_err(|e| {
        Error::config_invalid(format!("expires_in {expires_in:?} is out of range")).with_source(e)
    })?;

    t.checked_add_signed(delta).ok_or_else(|| {
        Error::config_invalid(format!("expires_in {expires_in:?} overflows the clock"))
    })
}

/// Parse time from RFC3339.
///
/// All input time SHOULD follow [RFC3339](https://tools.ietf.org/html/rfc3339)
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|v| v.with_timezone(&Utc))
        .map_err(|e| Error::unexpected(format!("parse '{s}' into rfc3339 failed")).with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() -> Result<()> {
        let t = parse_rfc3339("2001-09-09T01:46:40Z")?;
        assert_eq!(format_timestamp(t), "1000000000");
        Ok(())
    }

    #[test]
    fn test_expires_at() -> Result<()> {
        let t = parse_rfc3339("2001-09-09T01:46:40Z")?;
        let expire = expires_at(t, Duration::from_secs(600))?;
        assert_eq!(format_timestamp(expire), "1000000600");
        Ok(())
    }

    #[test]
    fn test_expires_at_overflow() {
        let err = expires_at(now(), Duration::from_secs(u64::MAX)).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::ConfigInvalid);
    }
}
