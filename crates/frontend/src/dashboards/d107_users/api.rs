use crate::shared::api_utils::{delete_record, fetch_collection};
use contracts::domain::a005_user::aggregate::StaffUser;

pub async fn fetch_users() -> Result<Vec<StaffUser>, String> {
    fetch_collection("/api/users", &[]).await
}

pub async fn delete_user(id: String) -> Result<String, String> {
    delete_record("/api/users", &id).await
}
