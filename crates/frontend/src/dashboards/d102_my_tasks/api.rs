use crate::shared::api_utils::fetch_collection;
use contracts::domain::a002_task::aggregate::Task;

/// `department` пустой или "all" - все отделы
pub async fn fetch_tasks(department: String) -> Result<Vec<Task>, String> {
    fetch_collection("/api/tasks", &[("department", department.as_str())]).await
}
