use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::load_state::ApiResponse;
use thiserror::Error;

/// Ошибка обработчика; отдается клиенту в конверте `{ success: false, error }`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<String> for ApiError {
    fn from(value: String) -> Self {
        ApiError::Internal(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(ApiResponse::<()>::failure(self.to_string()))).into_response()
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Успешный ответ в конверте
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::ok(data)))
}
