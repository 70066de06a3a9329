use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLinkRequest {
    pub long_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateLinkResponse {
    pub short_code: String,
    pub short_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
