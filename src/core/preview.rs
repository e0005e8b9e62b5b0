//! Demo-preview endpoint client
//!
//! The wizard's submission goes to an external preview-generation service;
//! nothing is generated locally. This module holds the wire types, the
//! client configuration and the WASM-side call, which adds two pieces of
//! behavior on top of a plain POST:
//!
//! - the loading state stays visible for a configurable minimum duration,
//!   so fast responses do not flash the UI
//! - the request is aborted after a configurable timeout instead of
//!   leaving the wizard stuck in its submitting state

use serde::{Deserialize, Serialize};

use crate::core::i18n::Lang;
use crate::core::wizard::LeadProfile;

/// Shown whenever the service fails without a usable message of its own.
pub const FALLBACK_ERROR: &str = "Could not generate preview. Please try again.";

/// Where and how to reach the preview service. All knobs are configurable;
/// the defaults match the hosted deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Endpoint receiving the merged URL + profile payload.
    pub endpoint: String,
    /// Static shared secret sent as `X-Demo-API-Key`.
    pub api_key: String,
    /// Minimum visible duration of the loading state.
    pub min_loading_ms: u32,
    /// Abort the request after this long.
    pub timeout_ms: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/demo-preview/create".to_string(),
            api_key: "ilnaj-demo-2024-secure".to_string(),
            min_loading_ms: 2_000,
            timeout_ms: 30_000,
        }
    }
}

/// Request body for the preview service: the accepted URL merged with the
/// profile fields plus the visitor's language tag.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub url: String,
    pub business_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub industry: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub industry_other: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub company_size: String,
    pub biggest_challenge: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub challenge_other: String,
    pub monthly_traffic: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
    pub language: &'static str,
}

impl PreviewRequest {
    pub fn new(url: &str, profile: &LeadProfile, lang: Lang) -> Self {
        Self {
            url: url.to_string(),
            business_name: profile.business_name.clone(),
            email: profile.email.clone(),
            industry: profile.industry.clone(),
            industry_other: profile.industry_other.clone(),
            company_size: profile.company_size.clone(),
            biggest_challenge: profile.biggest_challenge.clone(),
            challenge_other: profile.challenge_other.clone(),
            monthly_traffic: profile.monthly_traffic.clone(),
            notes: profile.notes.clone(),
            language: lang.as_str(),
        }
    }
}

/// Response body from the preview service. Every field except `success`
/// is optional; decoding tolerates whatever subset the service returns.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewResponse {
    pub success: bool,
    pub preview_url: Option<String>,
    pub brand_name: Option<String>,
    pub error: Option<String>,
}

/// POST the payload to the preview service and return the preview URL.
///
/// Network failure, a non-2xx status and a `success: false` body all map
/// to `Err` with the server-provided message when present, otherwise
/// [`FALLBACK_ERROR`]. The loading state is smoothed by sleeping out the
/// remainder of `min_loading_ms` after the response arrives.
#[cfg(not(feature = "ssr"))]
pub async fn create_preview(
    config: &PreviewConfig,
    request: &PreviewRequest,
) -> Result<String, String> {
    use gloo_timers::future::TimeoutFuture;

    let started = js_sys::Date::now();
    let result = send(config, request).await;

    let elapsed = js_sys::Date::now() - started;
    let remaining = f64::from(config.min_loading_ms) - elapsed;
    if remaining > 0.0 {
        TimeoutFuture::new(remaining as u32).await;
    }

    result
}

#[cfg(not(feature = "ssr"))]
async fn send(config: &PreviewConfig, request: &PreviewRequest) -> Result<String, String> {
    use gloo_net::http::Request;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_futures::spawn_local;

    // Arm a watchdog that aborts the fetch once the timeout passes.
    // Aborting an already-finished request is a no-op.
    let controller = web_sys::AbortController::new().ok();
    if let Some(controller) = controller.clone() {
        let timeout_ms = config.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            controller.abort();
        });
    }
    let signal = controller.as_ref().map(|c| c.signal());

    let response = Request::post(&config.endpoint)
        .header("X-Demo-API-Key", &config.api_key)
        .abort_signal(signal.as_ref())
        .json(request)
        .map_err(|_| FALLBACK_ERROR.to_string())?
        .send()
        .await
        .map_err(|_| FALLBACK_ERROR.to_string())?;

    let ok = response.ok();
    let body: PreviewResponse = response.json().await.unwrap_or_default();

    if ok && body.success {
        body.preview_url.ok_or_else(|| FALLBACK_ERROR.to_string())
    } else {
        Err(body.error.unwrap_or_else(|| FALLBACK_ERROR.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> LeadProfile {
        LeadProfile {
            business_name: "Acme".to_string(),
            email: "owner@acme.com".to_string(),
            biggest_challenge: "support".to_string(),
            monthly_traffic: "1k-10k".to_string(),
            ..LeadProfile::default()
        }
    }

    #[test]
    fn test_request_serializes_camel_case_with_language_tag() {
        let request = PreviewRequest::new("https://acme.com/", &profile(), Lang::En);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["url"], "https://acme.com/");
        assert_eq!(json["businessName"], "Acme");
        assert_eq!(json["biggestChallenge"], "support");
        assert_eq!(json["monthlyTraffic"], "1k-10k");
        assert_eq!(json["language"], "en");
    }

    #[test]
    fn test_request_skips_empty_optional_fields() {
        let request = PreviewRequest::new("https://acme.com/", &profile(), Lang::Es);
        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("industry").is_none());
        assert!(json.get("companySize").is_none());
        assert!(json.get("notes").is_none());
        assert_eq!(json["language"], "es");
    }

    #[test]
    fn test_response_decodes_success_payload() {
        let body: PreviewResponse = serde_json::from_str(
            r#"{"success":true,"previewUrl":"https://preview.example/acme","brandName":"Acme"}"#,
        )
        .unwrap();

        assert!(body.success);
        assert_eq!(
            body.preview_url.as_deref(),
            Some("https://preview.example/acme")
        );
        assert_eq!(body.brand_name.as_deref(), Some("Acme"));
        assert!(body.error.is_none());
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let body: PreviewResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!body.success);
        assert!(body.preview_url.is_none());
        assert!(body.error.is_none());

        let body: PreviewResponse = serde_json::from_str("{}").unwrap();
        assert!(!body.success);
    }

    #[test]
    fn test_response_carries_server_error() {
        let body: PreviewResponse =
            serde_json::from_str(r#"{"success":false,"error":"X"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("X"));
    }

    #[test]
    fn test_default_config_values() {
        let config = PreviewConfig::default();
        assert_eq!(config.endpoint, "/api/demo-preview/create");
        assert_eq!(config.min_loading_ms, 2_000);
        assert_eq!(config.timeout_ms, 30_000);
    }
}
