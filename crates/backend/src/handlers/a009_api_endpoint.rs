use axum::extract::State;
use contracts::domain::a009_api_endpoint::aggregate::ApiEndpoint;

use crate::shared::data::store::MockStore;
use crate::shared::error::{ok, ApiResult};

/// GET /api/api-endpoints
pub async fn list(State(store): State<MockStore>) -> ApiResult<Vec<ApiEndpoint>> {
    ok(store.read(|f| f.api_endpoints.clone())?)
}
