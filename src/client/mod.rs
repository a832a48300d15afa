//! Client module - handles HTTP requests for both WASM and no-WASM environments
//!
//! The endpoint paths are shared; the transport is reqwest natively and
//! gloo_net (browser fetch) under WASM.

use urlencoding::encode;

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

pub fn activities_url(base_url: &str) -> String {
    format!("{base_url}/activities")
}

pub fn signup_url(base_url: &str, activity: &str, email: &str) -> String {
    format!(
        "{base_url}/activities/{}/signup?email={}",
        encode(activity),
        encode(email)
    )
}

pub fn participants_url(base_url: &str, activity: &str, email: &str) -> String {
    format!(
        "{base_url}/activities/{}/participants?email={}",
        encode(activity),
        encode(email)
    )
}
