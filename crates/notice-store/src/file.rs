//! JSON persistence for a cookie jar
//!
//! Hosts without a browser (the CLI, tests) keep the jar between runs in a
//! small JSON file.

use crate::clock::Clock;
use crate::cookie::Cookie;
use crate::error::StoreError;
use crate::jar::CookieJar;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct JarSnapshot {
    cookies: Vec<Cookie>,
}

/// Jar file location
#[derive(Debug, Clone)]
pub struct JarFile {
    path: PathBuf,
}

impl JarFile {
    /// Jar file at `path`
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the jar; a missing file is an empty jar
    ///
    /// # Errors
    /// - `StoreError::Io` if the file exists but cannot be read
    /// - `StoreError::Format` if the file is not a jar snapshot
    pub async fn load<C: Clock>(&self, clock: C) -> Result<CookieJar<C>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no jar file, starting empty");
                return Ok(CookieJar::new(clock));
            }
            Err(e) => return Err(StoreError::io_error(&self.path, e)),
        };

        let snapshot: JarSnapshot =
            serde_json::from_str(&raw).map_err(|e| StoreError::format_error(&self.path, e))?;
        Ok(CookieJar::with_cookies(clock, snapshot.cookies))
    }

    /// Write the jar's live cookies
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the file cannot be written
    pub async fn save<C: Clock>(&self, jar: &CookieJar<C>) -> Result<(), StoreError> {
        let snapshot = JarSnapshot {
            cookies: jar.cookies(),
        };
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| StoreError::format_error(&self.path, e))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| StoreError::io_error(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), cookies = snapshot.cookies.len(), "saved jar");
        Ok(())
    }
}
