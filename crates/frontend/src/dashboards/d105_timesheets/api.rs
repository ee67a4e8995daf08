use crate::shared::api_utils::fetch_collection;
use contracts::domain::a008_timesheet::aggregate::TimesheetEntry;

pub async fn fetch_timesheets() -> Result<Vec<TimesheetEntry>, String> {
    fetch_collection("/api/timesheets", &[]).await
}
