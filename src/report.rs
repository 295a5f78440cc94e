//! Report emitted by `grch --json`.

use anyhow::{Context, Result};
use grc_hasher::HashError;
use serde::Serialize;
use std::error::Error as _;
use std::path::Path;

/// One hashed (or failed) file.
#[derive(Serialize)]
pub(crate) struct HashReport {
    pub(crate) path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) position: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<ErrorReport>,
}

/// Failure details recorded in place of a digest.
#[derive(Serialize)]
pub(crate) struct ErrorReport {
    pub(crate) code: ErrorCode,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) details: Vec<String>,
}

/// Failure classification.
#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ErrorCode {
    NotFound,
    IoError,
}

impl HashReport {
    pub(crate) fn digest(path: &Path, sha256: String, position: Option<u64>) -> Self {
        Self {
            path: path.display().to_string(),
            sha256: Some(sha256),
            position,
            error: None,
        }
    }

    pub(crate) fn failure(path: &Path, err: &HashError) -> Self {
        let code = if err.is_not_found() {
            ErrorCode::NotFound
        } else {
            ErrorCode::IoError
        };
        let mut details = Vec::new();
        let mut cause = err.source();
        while let Some(inner) = cause {
            details.push(inner.to_string());
            cause = inner.source();
        }
        Self {
            path: path.display().to_string(),
            sha256: None,
            position: None,
            error: Some(ErrorReport {
                code,
                message: err.to_string(),
                details,
            }),
        }
    }
}

/// Serialize the report as a single JSON line on stdout.
pub(crate) fn write_json(report: &HashReport) -> Result<()> {
    let json = serde_json::to_string(report).context("serialize report")?;
    println!("{json}");
    Ok(())
}
