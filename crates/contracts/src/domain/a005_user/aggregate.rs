use crate::shared::list_view::{Categorized, ListPolicy, NextPolicy, PageBase, Searchable};
use crate::shared::presentation::{Presentable, RecordStatus};
use serde::{Deserialize, Serialize};

pub const FILTER_DESIGNATION: &str = "designation";
pub const FILTER_DEPARTMENT: &str = "department";
pub const FILTER_STATUS: &str = "status";

pub const FILTERS: &[&str] = &[FILTER_DESIGNATION, FILTER_DEPARTMENT, FILTER_STATUS];

/// Фильтры пользователей сохраняются при закрытии панели
pub const LIST_POLICY: ListPolicy = ListPolicy::new(10, PageBase::OneBased, NextPolicy::PageBound);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub designation: String,
    pub department: String,
    pub role: String,
    pub status: RecordStatus,
    #[serde(rename = "lastLogin", default)]
    pub last_login: Option<String>,
}

impl Searchable for StaffUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.designation.as_str(),
        ]
    }
}

impl Categorized for StaffUser {
    fn category(&self, filter_name: &str) -> Option<&str> {
        match filter_name {
            FILTER_DESIGNATION => Some(self.designation.as_str()),
            FILTER_DEPARTMENT => Some(self.department.as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{filter_records, FilterState};

    fn user(name: &str, designation: &str) -> StaffUser {
        StaffUser {
            id: name.to_lowercase(),
            name: name.to_string(),
            email: format!("{}@school.edu", name.to_lowercase()),
            designation: designation.to_string(),
            department: "Science".to_string(),
            role: "teacher".to_string(),
            status: RecordStatus::Active,
            last_login: None,
        }
    }

    #[test]
    fn test_panel_close_keeps_filters() {
        let mut filters = FilterState::with_filters(FILTERS);
        filters.set(FILTER_DEPARTMENT, "Science");
        filters.set(FILTER_DESIGNATION, "Mathematics");
        LIST_POLICY.on_filter_panel_closed(&mut filters);
        assert_eq!(filters.get(FILTER_DEPARTMENT), "Science");
        assert_eq!(filters.get(FILTER_DESIGNATION), "Mathematics");
    }

    #[test]
    fn test_search_by_designation() {
        let users = vec![user("Asha", "Mathematics"), user("Ravi", "Physics")];
        let filters = FilterState::with_filters(FILTERS);
        let found = filter_records(&users, &filters, "MATH");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Asha");
    }
}
