use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Record (eventId={event_id}, userId={user_id}) already exists")]
    Duplicate { event_id: i64, user_id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type DemoResult<T> = Result<T, DemoError>;

impl DemoError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, DemoError::Duplicate { .. })
    }
}

/// Convert DemoError to AppError for standardized error responses
impl From<DemoError> for AppError {
    fn from(err: DemoError) -> Self {
        let message = err.to_string();
        match err {
            DemoError::Duplicate { event_id, user_id } => AppError::Conflict {
                message,
                details: Some(json!({ "eventId": event_id, "userId": user_id })),
            },
            // 503 when the pool is exhausted, 500 otherwise; cause is only logged
            DemoError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for DemoError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_duplicate_maps_to_conflict_with_details() {
        let err = DemoError::Duplicate {
            event_id: 5,
            user_id: 9,
        };
        assert!(err.is_duplicate());

        match AppError::from(err) {
            AppError::Conflict { message, details } => {
                assert_eq!(message, "Record (eventId=5, userId=9) already exists");
                assert_eq!(details, Some(json!({ "eventId": 5, "userId": 9 })));
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_database_error_is_500() {
        let err: DemoError = DbErr::Custom("connection reset".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_pool_exhaustion_is_503() {
        let err = DemoError::Database(DbErr::ConnectionAcquire(sea_orm::ConnAcquireErr::Timeout));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
