use axum::extract::State;
use contracts::domain::a003_leave::aggregate::LeaveRequest;

use crate::shared::data::store::MockStore;
use crate::shared::error::{ok, ApiResult};

/// GET /api/leaves
pub async fn list(State(store): State<MockStore>) -> ApiResult<Vec<LeaveRequest>> {
    ok(store.read(|f| f.leaves.clone())?)
}
