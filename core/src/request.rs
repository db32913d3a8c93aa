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

use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Characters left untouched by [`QueryEncoding::Percent`].
///
/// Everything except the RFC 3986 unreserved set is encoded.
static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// QueryEncoding controls how query pairs are written into the final URL.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum QueryEncoding {
    /// Write keys and values verbatim.
    ///
    /// This is the wire format remote verifiers expect, callers must make sure
    /// values don't contain `&`, `=`, `#` or whitespace.
    #[default]
    Raw,
    /// Percent-encode keys and values, leaving only unreserved characters.
    Percent,
}

/// Signing context for a query-signed request.
///
/// The request is serialized as `{base}{path}?{query}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigningRequest {
    /// Scheme, host and any fixed prefix, e.g. `http://mixpanel.com/api`.
    pub base: String,
    /// Path appended to base, e.g. `/2.0/events/`.
    pub path: String,
    /// Query pairs in emission order.
    pub query: Vec<(String, String)>,
    /// How query pairs are encoded by [`SigningRequest::to_url`].
    pub encoding: QueryEncoding,
}

impl SigningRequest {
    /// Create a new signing request without query.
    pub fn new(base: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            path: path.into(),
            query: Vec::new(),
            encoding: QueryEncoding::Raw,
        }
    }

    /// Set the query encoding.
    pub fn with_encoding(mut self, encoding: QueryEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Get query size.
    #[inline]
    pub fn query_size(&self) -> usize {
        self.query
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum::<usize>()
    }

    /// Push a new query pair into query list.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Get query value by key.
    pub fn query_get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Convert sorted query to string.
    ///
    /// Keys are sorted byte-wise before joining, pairs keep an empty value
    /// as `key{sep}`.
    ///
    /// ```shell
    /// [(c, d), (a, b)] with ("=", "") => "a=bc=d"
    /// ```
    pub fn query_to_string(mut query: Vec<(String, String)>, sep: &str, join: &str) -> String {
        let mut s = String::with_capacity(16);

        // Sort via query key.
        query.sort();

        for (idx, (k, v)) in query.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(&k);
            s.push_str(sep);
            s.push_str(&v);
        }

        s
    }

    /// Serialize into the final URL.
    ///
    /// Query pairs are written in their current order, joined by `&`.
    pub fn to_url(&self) -> String {
        let mut s = String::with_capacity(
            self.base.len() + self.path.len() + self.query_size() + self.query.len() * 2 + 1,
        );
        s.push_str(&self.base);
        s.push_str(&self.path);

        if self.query.is_empty() {
            return s;
        }

        s.push('?');
        for (idx, (k, v)) in self.query.iter().enumerate() {
            if idx > 0 {
                s.push('&');
            }

            match self.encoding {
                QueryEncoding::Raw => {
                    s.push_str(k);
                    s.push('=');
                    s.push_str(v);
                }
                QueryEncoding::Percent => {
                    s.extend(utf8_percent_encode(k, &QUERY_ENCODE_SET));
                    s.push('=');
                    s.extend(utf8_percent_encode(v, &QUERY_ENCODE_SET));
                }
            }
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(v: &[(&str, &str)]) -> Vec<(String, String)> {
        v.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_query_to_string_sorts_bytewise() {
        let query = pairs(&[
            ("format", "json"),
            ("Zeta", "1"),
            ("api_key", "abc"),
            ("from_date", "2024-01-01"),
        ]);

        assert_eq!(
            SigningRequest::query_to_string(query, "=", ""),
            "Zeta=1api_key=abcformat=jsonfrom_date=2024-01-01"
        );
    }

    #[test]
    fn test_query_to_string_keeps_empty_value() {
        let query = pairs(&[("where", ""), ("event", "login")]);
        assert_eq!(
            SigningRequest::query_to_string(query, "=", "&"),
            "event=login&where="
        );
    }

    #[test]
    fn test_to_url_raw() {
        let mut req = SigningRequest::new("http://example.com/api", "/2.0/events/");
        req.query_push("event", "a&b=c");
        req.query_push("sig", "0123");

        assert_eq!(
            req.to_url(),
            "http://example.com/api/2.0/events/?event=a&b=c&sig=0123"
        );
        assert_eq!(req.query_get("sig"), Some("0123"));
        assert_eq!(req.query_get("missing"), None);
    }

    #[test]
    fn test_to_url_percent() {
        let mut req = SigningRequest::new("http://example.com/api", "/2.0/events/")
            .with_encoding(QueryEncoding::Percent);
        req.query_push("event", "a&b=c d");
        req.query_push("from_date", "2024-01-01");

        assert_eq!(
            req.to_url(),
            "http://example.com/api/2.0/events/?event=a%26b%3Dc%20d&from_date=2024-01-01"
        );
    }

    #[test]
    fn test_to_url_without_query() {
        let req = SigningRequest::new("http://example.com/api", "/2.0/events/");
        assert_eq!(req.to_url(), "http://example.com/api/2.0/events/");
    }
}
