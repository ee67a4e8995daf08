use axum::extract::{Path, State};
use contracts::domain::a005_user::aggregate::StaffUser;

use crate::shared::data::store::{remove_by_id, MockStore};
use crate::shared::error::{ok, ApiError, ApiResult};

/// GET /api/users
pub async fn list(State(store): State<MockStore>) -> ApiResult<Vec<StaffUser>> {
    ok(store.read(|f| f.users.clone())?)
}

/// DELETE /api/users/:id
pub async fn delete(State(store): State<MockStore>, Path(id): Path<String>) -> ApiResult<String> {
    let removed = store.write(|f| remove_by_id(&mut f.users, &id, |u| u.id.as_str()))?;
    if !removed {
        return Err(ApiError::NotFound(format!("User {}", id)));
    }
    tracing::info!("User {} deleted", id);
    ok(id)
}
