//! WASM HTTP client implementation using gloo_net
//!
//! Requests go through the browser's fetch API against the page origin
//! (or the configured base URL).

use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use web_sys::{RequestCache, RequestCredentials};

use super::{activities_url, participants_url, signup_url};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::interface::{ActivitiesApi, HttpClient};
use crate::model::dtos::{ApiResponse, RemovalParams, SignupParams};
use crate::model::structs::ActivityCatalog;

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    base_url: String,
}

impl HttpClient for WasmClient {
    async fn new(config: &BoardConfig) -> Result<Self> {
        Ok(Self {
            base_url: config.base_url.clone(),
        })
    }
}

impl WasmClient {
    /// Build a request with common headers and settings
    fn build_request(method: &str, url: &str) -> RequestBuilder {
        let builder = match method {
            "POST" => Request::post(url),
            "DELETE" => Request::delete(url),
            _ => Request::get(url),
        };

        builder
            .credentials(RequestCredentials::SameOrigin)
            .header("Accept", "application/json")
    }

    /// The activity listing request; never served from the HTTP cache
    fn activities_request(&self) -> Result<Request> {
        let url = activities_url(&self.base_url);
        Ok(Self::build_request("GET", &url)
            .cache(RequestCache::NoStore)
            .build()?)
    }

    /// Read status and JSON body
    async fn handle_json_response(resp: Response) -> Result<ApiResponse> {
        let status = resp.status();
        let text = resp.text().await?;
        let body = serde_json::from_str::<Value>(&text)?;

        log::debug!("Response {status}: {body}");

        Ok(ApiResponse { status, body })
    }
}

impl ActivitiesApi for WasmClient {
    async fn fetch_activities(&self) -> Result<ActivityCatalog> {
        let request = self.activities_request()?;
        let resp = request.send().await?;

        log::debug!("GET {} -> {}", resp.url(), resp.status());

        let json = resp.json::<Value>().await?;
        ActivityCatalog::from_value(json)
    }

    async fn signup(&self, params: SignupParams<'_>) -> Result<ApiResponse> {
        let url = signup_url(&self.base_url, params.activity, params.email);
        let resp = Self::build_request("POST", &url).send().await?;

        Self::handle_json_response(resp).await
    }

    async fn remove_participant(&self, params: RemovalParams<'_>) -> Result<ApiResponse> {
        let url = participants_url(&self.base_url, params.activity, params.email);
        let resp = Self::build_request("DELETE", &url).send().await?;

        Self::handle_json_response(resp).await
    }
}

#[cfg(all(test, feature = "wasm"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn listing_bypasses_cache() {
        let client = WasmClient::new(&BoardConfig::same_origin()).await.unwrap();
        let request = client.activities_request().unwrap();
        assert_eq!(request.method(), gloo_net::http::Method::GET);

        let raw = web_sys::Request::from(request);
        assert_eq!(raw.cache(), RequestCache::NoStore);
        assert!(raw.url().ends_with("/activities"));
    }
}
