use crate::shared::api_utils::fetch_collection;
use contracts::domain::a001_student::aggregate::Student;

pub async fn fetch_students(program: String, semester: String) -> Result<Vec<Student>, String> {
    fetch_collection(
        "/api/students",
        &[("program", program.as_str()), ("semester", semester.as_str())],
    )
    .await
}
