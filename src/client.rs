//! Thin HTTP client for the remote counter service. One request per
//! run, no retries, no explicit timeout beyond the transport's own.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::RunError;
use crate::inputs::Inputs;

const DEFAULT_BASE_URL: &str = "https://api.mycounter.io";

/// Client for the counter API. Holds the connection pool and the base
/// URL; per-run data (key, workspace, counter) arrives with each call.
pub struct CounterClient {
    http: reqwest::Client,
    base_url: String,
}

impl CounterClient {
    /// Create a client, optionally pointed at a non-default endpoint
    /// (a local stub, a mock server in tests).
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Perform one counter operation and return the value the service
    /// reports afterwards.
    ///
    /// `workspace` and `counter` are substituted into the path verbatim;
    /// reserved characters are not encoded.
    pub async fn perform(
        &self,
        inputs: &Inputs,
        method: Method,
        path_suffix: &str,
        send_value: i64,
    ) -> Result<i64, RunError> {
        let url = format!(
            "{}/{}/counter/{}{}",
            self.base_url, inputs.workspace, inputs.counter, path_suffix
        );

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header("content-type", "application/json")
            .header("x-api-key", &inputs.apikey);

        // GET reads the counter as-is; everything else carries the payload.
        if method != Method::GET {
            req = req.json(&SendBody { value: send_value });
        }

        let resp = req.send().await?;

        if !resp.status().is_success() {
            return Err(RunError::RemoteRejection(status_text(resp.status())));
        }

        let body = resp.text().await?;
        interpret_body(&body)
    }
}

/// Canonical reason phrase for a status, falling back to the numeric
/// form for codes without one.
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

/// Pull the counter value out of a 2xx response body.
///
/// `status: false` fails with the service's own messages joined by
/// `", "`. A success body must carry an integral `data.value`; anything
/// else is a contract violation.
fn interpret_body(body: &str) -> Result<i64, RunError> {
    let resp: ApiResponse = serde_json::from_str(body)?;

    if !resp.status {
        return Err(RunError::ServiceError(resp.messages.join(", ")));
    }

    resp.data
        .and_then(|d| d.value)
        .and_then(|v| v.as_i64())
        .ok_or(RunError::InvalidResponse)
}

// --- wire types ---

#[derive(Serialize)]
struct SendBody {
    value: i64,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    status: bool,
    #[serde(default)]
    data: Option<ApiData>,
    #[serde(default)]
    messages: Vec<String>,
}

#[derive(Deserialize)]
struct ApiData {
    value: Option<serde_json::Value>,
}
