use crate::shared::list_view::{Categorized, ListPolicy, NextPolicy, PageBase, Searchable};
use crate::shared::presentation::{ApprovalStatus, Presentable};
use crate::shared::sub_tabs::{date_in_tab, SubTab, SubTabKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const FILTER_DEPARTMENT: &str = "department";
pub const FILTER_STATUS: &str = "status";
pub const FILTER_LEAVE_TYPE: &str = "leave_type";

pub const FILTERS: &[&str] = &[FILTER_DEPARTMENT, FILTER_STATUS, FILTER_LEAVE_TYPE];

/// Экран заявок на отпуск нумерует страницы с нуля
pub const LIST_POLICY: ListPolicy = ListPolicy::new(10, PageBase::ZeroBased, NextPolicy::PageBound);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    #[serde(rename = "employeeName")]
    pub employee_name: String,
    pub designation: String,
    pub department: String,
    #[serde(rename = "leaveType")]
    pub leave_type: String,
    #[serde(rename = "fromDate")]
    pub from_date: NaiveDate,
    #[serde(rename = "toDate")]
    pub to_date: NaiveDate,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

impl LeaveRequest {
    /// Число календарных дней (включительно); 0 при перепутанных датах
    pub fn days(&self) -> i64 {
        if self.to_date < self.from_date {
            return 0;
        }
        (self.to_date - self.from_date).num_days() + 1
    }

    /// Пересекается ли отпуск с вкладкой периода
    pub fn overlaps(&self, year: i32, tab: &SubTab) -> bool {
        match tab.kind {
            SubTabKind::Month => {
                let Ok(month) = tab.id.parse::<u32>() else {
                    return false;
                };
                let Some(start) = NaiveDate::from_ymd_opt(year, month, 1) else {
                    return false;
                };
                let end = crate::shared::sub_tabs::days_in_month(year, month)
                    .and_then(|days| NaiveDate::from_ymd_opt(year, month, days))
                    .unwrap_or(start);
                self.from_date <= end && self.to_date >= start
            }
            SubTabKind::Day => self
                .from_date
                .iter_days()
                .take_while(|d| *d <= self.to_date)
                .any(|d| date_in_tab(d, tab)),
            _ => false,
        }
    }
}

impl Searchable for LeaveRequest {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.employee_name.as_str(),
            self.designation.as_str(),
            self.leave_type.as_str(),
        ]
    }
}

impl Categorized for LeaveRequest {
    fn category(&self, filter_name: &str) -> Option<&str> {
        match filter_name {
            FILTER_DEPARTMENT => Some(self.department.as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            FILTER_LEAVE_TYPE => Some(self.leave_type.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{filter_records, visible_page, FilterState};
    use crate::shared::sub_tabs::{derive_period_tabs, PeriodView};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn leave(id: &str, designation: &str, from: NaiveDate, to: NaiveDate) -> LeaveRequest {
        LeaveRequest {
            id: id.to_string(),
            employee_name: "Ravi Kumar".to_string(),
            designation: designation.to_string(),
            department: "Science".to_string(),
            leave_type: "Casual".to_string(),
            from_date: from,
            to_date: to,
            status: ApprovalStatus::Pending,
            reason: None,
        }
    }

    #[test]
    fn test_designation_search_is_case_insensitive() {
        let leaves = vec![
            leave("1", "Mathematics", ymd(2024, 1, 1), ymd(2024, 1, 2)),
            leave("2", "Chemistry", ymd(2024, 1, 1), ymd(2024, 1, 2)),
        ];
        let filters = FilterState::with_filters(FILTERS);
        for query in ["math", "MATH", "Math"] {
            let found = filter_records(&leaves, &filters, query);
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].id, "1");
        }
    }

    #[test]
    fn test_zero_based_pages() {
        let leaves: Vec<LeaveRequest> = (0..12)
            .map(|i| leave(&i.to_string(), "Physics", ymd(2024, 1, 1), ymd(2024, 1, 1)))
            .collect();
        let filters = FilterState::new();
        let first = visible_page(&leaves, &filters, "", 0, &LIST_POLICY);
        assert_eq!(first.visible.len(), 10);
        let second = visible_page(&leaves, &filters, "", 1, &LIST_POLICY);
        assert_eq!(second.visible.len(), 2);
        assert!(!LIST_POLICY.has_prev(0));
        assert!(!LIST_POLICY.has_next(1, 12));
    }

    #[test]
    fn test_days_and_overlap() {
        let l = leave("1", "Physics", ymd(2024, 1, 30), ymd(2024, 2, 2));
        assert_eq!(l.days(), 4);

        let months = derive_period_tabs(&PeriodView::Monthly);
        assert!(l.overlaps(2024, &months[0]));
        assert!(l.overlaps(2024, &months[1]));
        assert!(!l.overlaps(2024, &months[2]));

        let days = derive_period_tabs(&PeriodView::Period {
            from: ymd(2024, 2, 2),
            to: ymd(2024, 2, 3),
        });
        assert!(l.overlaps(2024, &days[0]));
        assert!(!l.overlaps(2024, &days[1]));
    }
}
