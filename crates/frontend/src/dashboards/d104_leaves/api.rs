use crate::shared::api_utils::fetch_collection;
use contracts::domain::a003_leave::aggregate::LeaveRequest;

pub async fn fetch_leaves() -> Result<Vec<LeaveRequest>, String> {
    fetch_collection("/api/leaves", &[]).await
}
