use serde::{Deserialize, Serialize};

use crate::models::domain::{Application, InteractionStatus, PublicProfile};

/// Envelope for a single application lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub application: Option<Application>,
}

/// Envelope for a successful application write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveApplicationResponse {
    pub success: bool,
    pub application: Application,
}

/// Envelope for the submitted-applications listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListResponse {
    pub success: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub applications: Vec<Application>,
}

/// Outcome of a reaction, as reported to the initiator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactResponse {
    pub status: InteractionStatus,
}

/// Discovery feed response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(rename = "potentialMatches")]
    pub potential_matches: Vec<PublicProfile>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
