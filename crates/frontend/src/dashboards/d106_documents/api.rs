use crate::shared::api_utils::{delete_record, fetch_collection};
use contracts::domain::a004_document::aggregate::Document;

pub async fn fetch_documents() -> Result<Vec<Document>, String> {
    fetch_collection("/api/documents", &[]).await
}

/// Возвращает id удаленного документа
pub async fn delete_document(id: String) -> Result<String, String> {
    delete_record("/api/documents", &id).await
}
