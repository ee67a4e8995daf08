use crate::shared::api_utils::fetch_collection;
use contracts::domain::a009_api_endpoint::aggregate::ApiEndpoint;

pub async fn fetch_endpoints() -> Result<Vec<ApiEndpoint>, String> {
    fetch_collection("/api/api-endpoints", &[]).await
}
