use crate::shared::api_utils::fetch_collection;
use contracts::domain::a007_subject::aggregate::{ProgramType, Subject};

pub async fn fetch_programs() -> Result<Vec<ProgramType>, String> {
    fetch_collection("/api/programs", &[]).await
}

pub async fn fetch_subjects(program: String, semester: String) -> Result<Vec<Subject>, String> {
    fetch_collection(
        "/api/subjects",
        &[("program", program.as_str()), ("semester", semester.as_str())],
    )
    .await
}
