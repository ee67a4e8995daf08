use crate::shared::list_view::{Categorized, ListPolicy, NextPolicy, PageBase, Searchable};
use crate::shared::presentation::{Presentable, TaskPriority, TaskStatus};
use crate::shared::sub_tabs::{date_in_tab, SubTab, SubTabKind};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const FILTER_PRIORITY: &str = "priority";
pub const FILTER_STATUS: &str = "status";
pub const FILTER_DEPARTMENT: &str = "department";

/// Фильтры экрана "My Tasks"
pub const MY_TASKS_FILTERS: &[&str] = &[FILTER_PRIORITY, FILTER_STATUS];

/// "Next" на экране "My Tasks" блокируется, пока записей не больше одной страницы
pub const MY_TASKS_POLICY: ListPolicy =
    ListPolicy::new(10, PageBase::OneBased, NextPolicy::MoreThanOnePage);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub assignee: String,
    #[serde(rename = "assignedBy", default)]
    pub assigned_by: Option<String>,
    pub department: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(rename = "dueDate")]
    pub due_date: NaiveDate,
}

impl Task {
    /// Срок задачи попадает в вкладку периода выбранного года
    pub fn in_period(&self, year: i32, tab: &SubTab) -> bool {
        // id вкладки-дня уже содержит год
        match tab.kind {
            SubTabKind::Month => self.due_date.year() == year && date_in_tab(self.due_date, tab),
            _ => date_in_tab(self.due_date, tab),
        }
    }
}

impl Searchable for Task {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.assignee.as_str()];
        if let Some(description) = &self.description {
            fields.push(description.as_str());
        }
        fields
    }
}

impl Categorized for Task {
    fn category(&self, filter_name: &str) -> Option<&str> {
        match filter_name {
            FILTER_PRIORITY => Some(self.priority.as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            FILTER_DEPARTMENT => Some(self.department.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{filter_records, FilterState};
    use crate::shared::sub_tabs::{derive_period_tabs, PeriodView};

    fn task(i: usize, priority: TaskPriority, department: &str) -> Task {
        Task {
            id: format!("t{}", i),
            title: format!("Prepare lesson plan {}", i),
            description: Some("Unit review".to_string()),
            assignee: "Asha".to_string(),
            assigned_by: None,
            department: department.to_string(),
            priority,
            status: TaskStatus::Pending,
            due_date: NaiveDate::from_ymd_opt(2024, 3, (i % 28 + 1) as u32).unwrap(),
        }
    }

    #[test]
    fn test_my_tasks_next_policy() {
        assert!(!MY_TASKS_POLICY.has_next(1, 10));
        assert!(MY_TASKS_POLICY.has_next(1, 11));
    }

    #[test]
    fn test_priority_filter_uses_wire_value() {
        let tasks = vec![
            task(1, TaskPriority::High, "Science"),
            task(2, TaskPriority::Low, "Science"),
        ];
        let mut filters = FilterState::with_filters(MY_TASKS_FILTERS);
        filters.set(FILTER_PRIORITY, "high");
        let result = filter_records(&tasks, &filters, "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "t1");
    }

    #[test]
    fn test_in_period() {
        let t = task(4, TaskPriority::Medium, "Arts");
        let months = derive_period_tabs(&PeriodView::Monthly);
        assert!(t.in_period(2024, &months[2]));
        assert!(!t.in_period(2023, &months[2]));
        assert!(!t.in_period(2024, &months[3]));
    }
}
