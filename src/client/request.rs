//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, PRAGMA},
    Client, Response,
};
use serde_json::Value;

use super::{activities_url, participants_url, signup_url};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::interface::{ActivitiesApi, HttpClient};
use crate::model::dtos::{ApiResponse, RemovalParams, SignupParams};
use crate::model::structs::ActivityCatalog;

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    base_url: String,
}

impl HttpClient for NoWasmClient {
    async fn new(config: &BoardConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

impl NoWasmClient {
    /// Read status and JSON body; a body that is not JSON is an error
    async fn into_api_response(resp: Response) -> Result<ApiResponse> {
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        let body = serde_json::from_str::<Value>(&text)?;

        log::debug!("Response {status}: {body}");

        Ok(ApiResponse { status, body })
    }
}

impl ActivitiesApi for NoWasmClient {
    async fn fetch_activities(&self) -> Result<ActivityCatalog> {
        let url = activities_url(&self.base_url);

        let resp = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        log::debug!("GET {url} -> {}", resp.status());

        let json = resp.json::<Value>().await?;
        ActivityCatalog::from_value(json)
    }

    async fn signup(&self, params: SignupParams<'_>) -> Result<ApiResponse> {
        let url = signup_url(&self.base_url, params.activity, params.email);
        let resp = self.client.post(&url).send().await?;

        Self::into_api_response(resp).await
    }

    async fn remove_participant(&self, params: RemovalParams<'_>) -> Result<ApiResponse> {
        let url = participants_url(&self.base_url, params.activity, params.email);
        let resp = self.client.delete(&url).send().await?;

        Self::into_api_response(resp).await
    }
}

