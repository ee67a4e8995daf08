use axum::extract::{Query, State};
use contracts::domain::a001_student::aggregate::Student;
use serde::Deserialize;

use crate::shared::data::store::{param_matches, MockStore};
use crate::shared::error::{ok, ApiResult};

#[derive(Debug, Default, Deserialize)]
pub struct StudentQuery {
    pub program: Option<String>,
    pub semester: Option<String>,
}

/// GET /api/students?program=&semester=
pub async fn list(
    State(store): State<MockStore>,
    Query(query): Query<StudentQuery>,
) -> ApiResult<Vec<Student>> {
    let items = store.read(|f| {
        f.students
            .iter()
            .filter(|s| param_matches(query.program.as_deref(), &s.program))
            .filter(|s| param_matches(query.semester.as_deref(), &s.semester))
            .cloned()
            .collect::<Vec<_>>()
    })?;
    tracing::debug!(
        "students: program={:?} semester={:?} -> {}",
        query.program,
        query.semester,
        items.len()
    );
    ok(items)
}
