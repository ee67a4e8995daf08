use axum::extract::{Path, Query, State};
use contracts::domain::a002_task::aggregate::Task;
use serde::Deserialize;

use crate::shared::data::store::{param_matches, remove_by_id, MockStore};
use crate::shared::error::{ok, ApiError, ApiResult};

#[derive(Debug, Default, Deserialize)]
pub struct TaskQuery {
    pub department: Option<String>,
    pub assignee: Option<String>,
}

/// GET /api/tasks?department=&assignee=
pub async fn list(
    State(store): State<MockStore>,
    Query(query): Query<TaskQuery>,
) -> ApiResult<Vec<Task>> {
    let items = store.read(|f| {
        f.tasks
            .iter()
            .filter(|t| param_matches(query.department.as_deref(), &t.department))
            .filter(|t| param_matches(query.assignee.as_deref(), &t.assignee))
            .cloned()
            .collect::<Vec<_>>()
    })?;
    ok(items)
}

/// DELETE /api/tasks/:id
pub async fn delete(State(store): State<MockStore>, Path(id): Path<String>) -> ApiResult<String> {
    let removed = store.write(|f| remove_by_id(&mut f.tasks, &id, |t| t.id.as_str()))?;
    if !removed {
        return Err(ApiError::NotFound(format!("Task {}", id)));
    }
    tracing::info!("Task {} deleted", id);
    ok(id)
}
