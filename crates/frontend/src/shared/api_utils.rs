//! API utilities for frontend-backend communication
//!
//! Resolves the backend base URL and interprets HTTP responses uniformly for
//! every call against the items resource.

use contracts::shared::api_error::ApiError;
use gloo_net::http::Response;
use serde_json::Value;

/// Backend location used when the build does not provide `API_BASE`
pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api";

/// Path segment every API route lives under
pub const API_PATH_SEGMENT: &str = "/api";

/// Pause before each render pass, simulating fetch latency
pub const DEFAULT_RENDER_DELAY_MS: u32 = 200;

/// Normalize a configured base so it ends in exactly one `/api`
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::resolve_api_base;
///
/// assert_eq!(resolve_api_base(Some("https://shop.test")), "https://shop.test/api");
/// assert_eq!(resolve_api_base(Some("https://shop.test/api")), "https://shop.test/api");
/// ```
pub fn resolve_api_base(override_base: Option<&str>) -> String {
    let base = override_base
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/');

    if base.ends_with(API_PATH_SEGMENT) {
        base.to_string()
    } else {
        format!("{}{}", base, API_PATH_SEGMENT)
    }
}

/// Get the base URL for API requests
///
/// Reads `API_BASE` from the build environment, falling back to
/// [`DEFAULT_API_BASE`].
pub fn api_base() -> String {
    resolve_api_base(option_env!("API_BASE"))
}

/// Runtime settings, provided to the component tree through context
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub render_delay_ms: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let render_delay_ms = option_env!("RENDER_DELAY_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_RENDER_DELAY_MS);

        Self {
            api_base: api_base(),
            render_delay_ms,
        }
    }

    /// Zero render delay, default backend
    pub fn for_tests() -> Self {
        Self {
            api_base: resolve_api_base(None),
            render_delay_ms: 0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// How a response status is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Success,
    NoContent,
    Failure,
}

impl ResponseKind {
    pub fn classify(status: u16) -> Self {
        match status {
            204 => ResponseKind::NoContent,
            200..=299 => ResponseKind::Success,
            _ => ResponseKind::Failure,
        }
    }
}

/// Build (and log) the error for a non-success response
///
/// The response text is preferred as detail; an empty or unreadable body
/// falls back to the status line.
pub fn failure_error(action: &str, status: u16, status_text: &str, body: Option<String>) -> ApiError {
    let detail = body
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| status_text.to_string());

    log::error!("Error al {}: {} - {}", action, status, detail);

    ApiError::Http {
        action: action.to_string(),
        status,
        detail,
    }
}

/// Decode a success body. Empty or malformed JSON yields `None` and a warning.
pub fn decode_body(action: &str, body: Option<&str>) -> Option<Value> {
    let text = body.unwrap_or_default();
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{}: respuesta vacía o no es JSON ({})", action, e);
            None
        }
    }
}

/// The parts of an HTTP response the handler looks at
pub trait HttpReply {
    fn status(&self) -> u16;

    fn status_text(&self) -> String;

    /// Body as text; `None` when it cannot be read
    fn text(&self) -> impl std::future::Future<Output = Option<String>>;
}

impl HttpReply for Response {
    fn status(&self) -> u16 {
        Response::status(self)
    }

    fn status_text(&self) -> String {
        Response::status_text(self)
    }

    async fn text(&self) -> Option<String> {
        Response::text(self).await.ok()
    }
}

/// Interpret a response for `action`
///
/// - failure status: error carrying the action and best-effort detail
/// - 204: `Ok(None)`, the body is never read
/// - otherwise: decoded JSON, or `Ok(None)` when the body does not decode
pub async fn handle_response<R: HttpReply>(response: R, action: &str) -> Result<Option<Value>, ApiError> {
    let status = response.status();

    match ResponseKind::classify(status) {
        ResponseKind::Failure => {
            let body = response.text().await;
            Err(failure_error(action, status, &response.status_text(), body))
        }
        ResponseKind::NoContent => Ok(None),
        ResponseKind::Success => {
            let body = response.text().await;
            Ok(decode_body(action, body.as_deref()))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_reply {
    use super::HttpReply;
    use std::cell::Cell;

    /// In-memory response that counts body reads
    pub struct FakeReply {
        pub status: u16,
        pub status_text: &'static str,
        pub body: Option<&'static str>,
        pub body_reads: Cell<u32>,
    }

    impl FakeReply {
        pub fn new(status: u16, status_text: &'static str, body: Option<&'static str>) -> Self {
            Self {
                status,
                status_text,
                body,
                body_reads: Cell::new(0),
            }
        }
    }

    impl HttpReply for &FakeReply {
        fn status(&self) -> u16 {
            self.status
        }

        fn status_text(&self) -> String {
            self.status_text.to_string()
        }

        async fn text(&self) -> Option<String> {
            self.body_reads.set(self.body_reads.get() + 1);
            self.body.map(str::to_string)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_log {
    //! Captures `log` records so tests can assert on emitted diagnostics.

    use log::{Level, LevelFilter, Log, Metadata, Record};
    use once_cell::sync::Lazy;
    use std::sync::{Mutex, Once};

    static RECORDS: Lazy<Mutex<Vec<(Level, String)>>> = Lazy::new(|| Mutex::new(Vec::new()));
    static INIT: Once = Once::new();

    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    pub fn install() {
        INIT.call_once(|| {
            let _ = log::set_logger(&CaptureLogger);
            log::set_max_level(LevelFilter::Trace);
        });
    }

    /// Records at `level` whose message contains `needle`
    pub fn matching(level: Level, needle: &str) -> Vec<String> {
        RECORDS
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, msg)| *l == level && msg.contains(needle))
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}
