//! API envelope shapes shared by the cloud's HTTP surface and its
//! clients.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard API error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ApiErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// API error codes, grouped by the HTTP status they ride on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    // Authentication (401)
    MissingAuth,
    InvalidToken,
    InvalidApiKey,
    InvalidAdoptionPin,
    AdoptionPinAlreadyUsed,
    AdoptionPinExpired,

    // Authorization (403)
    Forbidden,
    Unauthorized,
    InsufficientPermissions,

    // Validation (400)
    ValidationError,
    InvalidRequest,
    BarnAlreadyAdopted,
    BarnNotAdopted,
    DashboardTokenNotFound,
    DecryptionError,

    // Not found (404)
    ResourceNotFound,
    NotFound,
    BarnNotFound,
    HorseNotFound,
    CommandNotFound,
    MediaNotFound,
    SessionNotFound,

    // Conflict (409)
    ResourceConflict,
    DuplicateResource,

    // Rate limiting (429)
    RateLimitExceeded,

    // Server errors (500)
    InternalError,
    DatabaseError,
    ExternalServiceError,

    // Service unavailable (503)
    ServiceUnavailable,
    MaintenanceMode,
}

impl ApiErrorCode {
    /// HTTP status this code is served with
    pub fn http_status(&self) -> u16 {
        match self {
            Self::MissingAuth
            | Self::InvalidToken
            | Self::InvalidApiKey
            | Self::InvalidAdoptionPin
            | Self::AdoptionPinAlreadyUsed
            | Self::AdoptionPinExpired => 401,

            Self::Forbidden | Self::Unauthorized | Self::InsufficientPermissions => 403,

            Self::ValidationError
            | Self::InvalidRequest
            | Self::BarnAlreadyAdopted
            | Self::BarnNotAdopted
            | Self::DashboardTokenNotFound
            | Self::DecryptionError => 400,

            Self::ResourceNotFound
            | Self::NotFound
            | Self::BarnNotFound
            | Self::HorseNotFound
            | Self::CommandNotFound
            | Self::MediaNotFound
            | Self::SessionNotFound => 404,

            Self::ResourceConflict | Self::DuplicateResource => 409,

            Self::RateLimitExceeded => 429,

            Self::InternalError | Self::DatabaseError | Self::ExternalServiceError => 500,

            Self::ServiceUnavailable | Self::MaintenanceMode => 503,
        }
    }
}

/// Pagination block in a paginated response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Pagination request parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// State of an accepted asynchronous job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    Processing,
}

/// Async job response (202 Accepted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncJobResponse {
    pub job_id: String,
    pub status: JobStatus,
    pub status_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_code_wire_form() {
        assert_eq!(
            serde_json::to_value(ApiErrorCode::BarnAlreadyAdopted).unwrap(),
            json!("BARN_ALREADY_ADOPTED")
        );
        assert_eq!(
            serde_json::to_value(ApiErrorCode::RateLimitExceeded).unwrap(),
            json!("RATE_LIMIT_EXCEEDED")
        );
    }

    #[test]
    fn test_http_status_grouping() {
        assert_eq!(ApiErrorCode::InvalidApiKey.http_status(), 401);
        assert_eq!(ApiErrorCode::ValidationError.http_status(), 400);
        assert_eq!(ApiErrorCode::HorseNotFound.http_status(), 404);
        assert_eq!(ApiErrorCode::DatabaseError.http_status(), 500);
        assert_eq!(ApiErrorCode::MaintenanceMode.http_status(), 503);
    }

    #[test]
    fn test_paginated_response() {
        let doc = json!({
            "data": ["a", "b"],
            "pagination": { "page": 1, "pageSize": 2, "totalCount": 5, "totalPages": 3 },
        });

        let page: PaginatedResponse<String> = serde_json::from_value(doc).unwrap();
        assert_eq!(page.data, vec!["a", "b"]);
        assert_eq!(page.pagination.total_pages, 3);
    }
}
