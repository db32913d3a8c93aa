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

//! Tokio-based file reading implementation for mpsign.
//!
//! This crate provides `TokioFileRead`, an async file reader that implements
//! the `FileRead` trait from `mpsign_core` using Tokio's file system operations.
//!
//! ## Example
//!
//! ```no_run
//! use mpsign_core::{Context, OsEnv};
//! use mpsign_file_read_tokio::TokioFileRead;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_env(OsEnv);
//!
//!     match ctx.file_read_as_string("/etc/mixpanel/api_key").await {
//!         Ok(content) => println!("Read {} bytes", content.len()),
//!         Err(e) => eprintln!("Failed to read file: {}", e),
//!     }
//! }
//! ```

use async_trait::async_trait;
use mpsign_core::{Error, FileRead, Result};

/// Tokio-based implementation of the `FileRead` trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileRead;

#[async_trait]
impl FileRead for TokioFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| Error::unexpected(format!("failed to read file {path}")).with_source(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpsign_core::{Context, ErrorKind};
    use std::io::Write;

    #[tokio::test]
    async fn test_file_read() -> anyhow::Result<()> {
        let mut f = tempfile::NamedTempFile::new()?;
        writeln!(f, "5f2a9c0e7b1d4a36b8e0")?;

        let ctx = Context::new().with_file_read(TokioFileRead);
        let path = f.path().to_string_lossy().to_string();
        let content = ctx.file_read_as_string(&path).await?;
        assert_eq!(content, "5f2a9c0e7b1d4a36b8e0\n");

        Ok(())
    }

    #[tokio::test]
    async fn test_file_read_missing() {
        let dir = tempfile::tempdir().expect("tempdir must be created");
        let path = dir.path().join("absent").to_string_lossy().to_string();

        let err = TokioFileRead.file_read(&path).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }
}
