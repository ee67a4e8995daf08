use axum::extract::{Query, State};
use contracts::domain::a007_subject::aggregate::{ProgramType, Subject};
use serde::Deserialize;

use crate::shared::data::store::{param_matches, MockStore};
use crate::shared::error::{ok, ApiResult};

/// GET /api/programs
pub async fn list_programs(State(store): State<MockStore>) -> ApiResult<Vec<ProgramType>> {
    ok(store.read(|f| f.programs.clone())?)
}

#[derive(Debug, Default, Deserialize)]
pub struct SubjectQuery {
    pub program: Option<String>,
    pub semester: Option<String>,
}

/// GET /api/subjects?program=&semester=
pub async fn list_subjects(
    State(store): State<MockStore>,
    Query(query): Query<SubjectQuery>,
) -> ApiResult<Vec<Subject>> {
    let items = store.read(|f| {
        f.subjects
            .iter()
            .filter(|s| param_matches(query.program.as_deref(), &s.program_id))
            .filter(|s| param_matches(query.semester.as_deref(), &s.semester))
            .cloned()
            .collect::<Vec<_>>()
    })?;
    ok(items)
}
