// src/api.rs
//
// The one network seam: a blocking client for the parsing service.
// Two endpoints — GET /health for the manual connectivity check and
// POST /parse for the multipart upload. No retries, no concurrency;
// one request at a time, awaited to completion.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use reqwest::blocking::{Client, multipart};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::consts::REQUEST_TIMEOUT_SECS;
use crate::progress::Progress;
use crate::result::ParseResult;

/// `GET /health` body. Every field is optional; older service builds
/// send only `status`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: Option<String>,
    pub service: Option<String>,
    pub version: Option<String>,
    pub timestamp: Option<u64>,
}

impl HealthStatus {
    /// One-line description for the status label.
    pub fn describe(&self) -> String {
        match (&self.service, &self.version) {
            (Some(svc), Some(ver)) => format!("{svc} v{ver}"),
            (Some(svc), None) => svc.clone(),
            _ => self.status.clone().unwrap_or_else(|| s!("UP")),
        }
    }
}

/// `POST /parse` envelope. `result` is a JSON-encoded string holding the
/// actual payload; it is decoded in a second step.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub processing_time_ms: Option<u64>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<u64>,
}

pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Cannot build HTTP client")?;
        Ok(Self {
            base_url: s!(base_url.trim().trim_end_matches('/')),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        join!(&*self.base_url, "/", path)
    }

    /// Manual connectivity check.
    pub fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint("health");
        debug!("Health: GET {url}");

        let resp = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("No response from {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            bail!("Service responded with {status}");
        }
        resp.json().context("Health response was not JSON")
    }

    /// Upload one `.sav` file and decode the returned payload.
    ///
    /// The envelope is decoded regardless of HTTP status: the service
    /// reports failures as `success:false` with a 4xx/5xx status, and the
    /// error message in the body beats a bare status code.
    pub fn parse_file(&self, path: &Path, progress: &mut dyn Progress) -> Result<ParseResult> {
        let res = self.parse_file_inner(path, progress);
        progress.finish();
        res
    }

    fn parse_file_inner(&self, path: &Path, progress: &mut dyn Progress) -> Result<ParseResult> {
        let url = self.endpoint("parse");

        progress.stage(10, "Uploading file...");
        info!("Parse: POST {url} file={}", path.display());

        let form = multipart::Form::new()
            .file("file", path)
            .with_context(|| format!("Cannot read file: {}", path.display()))?;

        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .with_context(|| format!("Upload to {url} failed"))?;

        progress.stage(50, "Processing file...");

        let status = resp.status();
        let envelope: ParseResponse = resp
            .json()
            .with_context(|| format!("Service returned {status} with a non-JSON body"))?;

        progress.stage(90, "Finishing...");

        if !envelope.success {
            bail!("{}", envelope.error.unwrap_or_else(|| s!("Unknown error")));
        }
        let payload = envelope
            .result
            .ok_or_else(|| anyhow!("Service reported success without a result"))?;
        let result = ParseResult::from_json(&payload)?;

        if let Some(ms) = envelope.processing_time_ms {
            debug!("Parse: service time {ms} ms");
        }
        info!(
            "Parse: OK variables={} rows={}",
            result.variable_count(),
            result.row_count()
        );

        progress.stage(100, "Done");
        Ok(result)
    }
}
