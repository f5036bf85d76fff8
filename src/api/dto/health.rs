//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub site_url: String,

    /// Number of pilot offers in the catalog.
    pub offers: usize,
}
