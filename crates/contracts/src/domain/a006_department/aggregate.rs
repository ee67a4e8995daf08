use crate::shared::list_view::{ListPolicy, NextPolicy, PageBase};
use crate::shared::presentation::RecordStatus;
use serde::{Deserialize, Serialize};

/// Дашборд отдела показывает задачи (`a002_task::Task`) по отделам
pub const FILTER_DEPARTMENT: &str = crate::domain::a002_task::aggregate::FILTER_DEPARTMENT;
pub const FILTER_PRIORITY: &str = crate::domain::a002_task::aggregate::FILTER_PRIORITY;

pub const DASHBOARD_FILTERS: &[&str] = &[FILTER_DEPARTMENT, FILTER_PRIORITY];

/// При закрытии панели фильтры отдела и приоритета сбрасываются
pub const DASHBOARD_POLICY: ListPolicy =
    ListPolicy::new(10, PageBase::OneBased, NextPolicy::PageBound).resetting_on_close();

/// Справочник отделов; на экранах используется только как источник вариантов фильтра
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub head: Option<String>,
    #[serde(rename = "staffCount", default)]
    pub staff_count: u32,
    pub status: RecordStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_task::aggregate::Task;
    use crate::shared::list_view::{filter_records, FilterState};
    use crate::shared::presentation::{TaskPriority, TaskStatus};
    use chrono::NaiveDate;

    fn task(id: &str, department: &str, priority: TaskPriority) -> Task {
        Task {
            id: id.to_string(),
            title: "Lab inventory".to_string(),
            description: None,
            assignee: "Kabir".to_string(),
            assigned_by: Some("HOD".to_string()),
            department: department.to_string(),
            priority,
            status: TaskStatus::InProgress,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        }
    }

    #[test]
    fn test_panel_close_resets_department_and_priority() {
        let mut filters = FilterState::with_filters(DASHBOARD_FILTERS);
        filters.set(FILTER_DEPARTMENT, "Science");
        filters.set(FILTER_PRIORITY, "high");
        assert_eq!(filters.active_count(), 2);

        DASHBOARD_POLICY.on_filter_panel_closed(&mut filters);
        assert_eq!(filters.get(FILTER_DEPARTMENT), "all");
        assert_eq!(filters.get(FILTER_PRIORITY), "all");
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_department_and_priority_filter_tasks() {
        let tasks = vec![
            task("1", "Science", TaskPriority::High),
            task("2", "Science", TaskPriority::Low),
            task("3", "Arts", TaskPriority::High),
        ];
        let mut filters = FilterState::with_filters(DASHBOARD_FILTERS);
        filters.set(FILTER_DEPARTMENT, "Science");
        filters.set(FILTER_PRIORITY, "high");
        let found = filter_records(&tasks, &filters, "");
        assert_eq!(found.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), vec!["1"]);

        DASHBOARD_POLICY.on_filter_panel_closed(&mut filters);
        assert_eq!(filter_records(&tasks, &filters, "").len(), 3);
    }
}
