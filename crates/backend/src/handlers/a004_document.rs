use axum::extract::{Path, State};
use contracts::domain::a004_document::aggregate::Document;

use crate::shared::data::store::{remove_by_id, MockStore};
use crate::shared::error::{ok, ApiError, ApiResult};

/// GET /api/documents
pub async fn list(State(store): State<MockStore>) -> ApiResult<Vec<Document>> {
    ok(store.read(|f| f.documents.clone())?)
}

/// DELETE /api/documents/:id
pub async fn delete(State(store): State<MockStore>, Path(id): Path<String>) -> ApiResult<String> {
    let removed = store.write(|f| remove_by_id(&mut f.documents, &id, |d| d.id.as_str()))?;
    if !removed {
        return Err(ApiError::NotFound(format!("Document {}", id)));
    }
    tracing::info!("Document {} deleted", id);
    ok(id)
}
