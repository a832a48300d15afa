#![allow(async_fn_in_trait)] // the board is single-threaded, futures need not be Send

use crate::config::BoardConfig;
use crate::error::Result;
use crate::model::dtos::{ApiResponse, RemovalParams, SignupParams};
use crate::model::structs::ActivityCatalog;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new(config: &BoardConfig) -> Result<Self>
    where
        Self: Sized;
}

/// Common interface for all backend operations
pub trait ActivitiesApi {
    /// Fetch every activity, bypassing any HTTP cache
    async fn fetch_activities(&self) -> Result<ActivityCatalog>;

    /// Sign an email up for an activity
    async fn signup(&self, params: SignupParams<'_>) -> Result<ApiResponse>;

    /// Remove a participant from an activity
    async fn remove_participant(&self, params: RemovalParams<'_>) -> Result<ApiResponse>;
}
