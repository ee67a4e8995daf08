use crate::shared::api_utils::fetch_collection;
use contracts::domain::a006_department::aggregate::Department;

pub async fn fetch_departments() -> Result<Vec<Department>, String> {
    fetch_collection("/api/departments", &[]).await
}
