use axum::extract::State;
use contracts::domain::a008_timesheet::aggregate::TimesheetEntry;

use crate::shared::data::store::MockStore;
use crate::shared::error::{ok, ApiResult};

/// GET /api/timesheets
pub async fn list(State(store): State<MockStore>) -> ApiResult<Vec<TimesheetEntry>> {
    ok(store.read(|f| f.timesheets.clone())?)
}
