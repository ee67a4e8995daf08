use axum::extract::State;
use contracts::domain::a006_department::aggregate::Department;

use crate::shared::data::store::MockStore;
use crate::shared::error::{ok, ApiResult};

/// GET /api/departments
pub async fn list(State(store): State<MockStore>) -> ApiResult<Vec<Department>> {
    ok(store.read(|f| f.departments.clone())?)
}
