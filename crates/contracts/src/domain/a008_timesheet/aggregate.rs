use crate::shared::list_view::{Categorized, ListPolicy, NextPolicy, PageBase, Searchable};
use crate::shared::presentation::{ApprovalStatus, Presentable};
use crate::shared::sub_tabs::{date_in_tab, SubTab, SubTabKind};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const FILTER_DEPARTMENT: &str = "department";
pub const FILTER_STATUS: &str = "status";

pub const FILTERS: &[&str] = &[FILTER_DEPARTMENT, FILTER_STATUS];

pub const LIST_POLICY: ListPolicy = ListPolicy::new(10, PageBase::OneBased, NextPolicy::PageBound);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    pub id: String,
    #[serde(rename = "employeeName")]
    pub employee_name: String,
    pub department: String,
    pub project: String,
    pub date: NaiveDate,
    pub hours: f32,
    pub status: ApprovalStatus,
}

impl TimesheetEntry {
    pub fn in_period(&self, year: i32, tab: &SubTab) -> bool {
        // id вкладки-дня уже содержит год
        match tab.kind {
            SubTabKind::Month => self.date.year() == year && date_in_tab(self.date, tab),
            _ => date_in_tab(self.date, tab),
        }
    }
}

/// Сумма часов по записям
pub fn total_hours(entries: &[TimesheetEntry]) -> f32 {
    entries.iter().map(|e| e.hours).sum()
}

impl Searchable for TimesheetEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.employee_name.as_str(), self.project.as_str()]
    }
}

impl Categorized for TimesheetEntry {
    fn category(&self, filter_name: &str) -> Option<&str> {
        match filter_name {
            FILTER_DEPARTMENT => Some(self.department.as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sub_tabs::{derive_period_tabs, PeriodView};

    fn entry(day: u32, hours: f32) -> TimesheetEntry {
        TimesheetEntry {
            id: day.to_string(),
            employee_name: "Asha".to_string(),
            department: "Science".to_string(),
            project: "Board exams".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
            hours,
            status: ApprovalStatus::Approved,
        }
    }

    #[test]
    fn test_weekly_bucket_selects_entries() {
        let entries: Vec<TimesheetEntry> = (1..=29).map(|d| entry(d, 2.0)).collect();
        let last_week = derive_period_tabs(&PeriodView::Weekly {
            year: 2024,
            month: 2,
            week: 5,
        });
        let selected: Vec<&TimesheetEntry> = entries
            .iter()
            .filter(|e| last_week.iter().any(|tab| e.in_period(2024, tab)))
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "29");
    }

    #[test]
    fn test_total_hours() {
        assert_eq!(total_hours(&[entry(1, 7.5), entry(2, 0.5)]), 8.0);
        assert_eq!(total_hours(&[]), 0.0);
    }
}
