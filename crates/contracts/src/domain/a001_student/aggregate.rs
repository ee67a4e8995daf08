use crate::shared::list_view::{Categorized, ListPolicy, NextPolicy, PageBase, Searchable};
use crate::shared::presentation::{Presentable, RecordStatus};
use serde::{Deserialize, Serialize};

pub const FILTER_PROGRAM: &str = "program";
pub const FILTER_SEMESTER: &str = "semester";
pub const FILTER_STATUS: &str = "status";

pub const FILTERS: &[&str] = &[FILTER_PROGRAM, FILTER_SEMESTER, FILTER_STATUS];

pub const LIST_POLICY: ListPolicy = ListPolicy::new(10, PageBase::OneBased, NextPolicy::PageBound);

/// Студент
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    #[serde(rename = "rollNumber")]
    pub roll_number: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub program: String,
    pub semester: String,
    #[serde(default)]
    pub section: Option<String>,
    pub status: RecordStatus,
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.roll_number.as_str()];
        if let Some(email) = &self.email {
            fields.push(email.as_str());
        }
        fields
    }
}

impl Categorized for Student {
    fn category(&self, filter_name: &str) -> Option<&str> {
        match filter_name {
            FILTER_PROGRAM => Some(self.program.as_str()),
            FILTER_SEMESTER => Some(self.semester.as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{visible_page, FilterState};

    fn student(i: usize, program: &str) -> Student {
        Student {
            id: i.to_string(),
            roll_number: format!("R{:03}", i),
            name: format!("Student {}", i),
            email: None,
            program: program.to_string(),
            semester: "1".to_string(),
            section: None,
            status: RecordStatus::Active,
        }
    }

    #[test]
    fn test_roll_number_search_and_program_filter() {
        let students: Vec<Student> = (1..=30)
            .map(|i| student(i, if i % 2 == 0 { "BTech" } else { "MBA" }))
            .collect();
        let mut filters = FilterState::with_filters(FILTERS);
        filters.set(FILTER_PROGRAM, "BTech");

        let page = visible_page(&students, &filters, "", 1, &LIST_POLICY);
        assert_eq!(page.total_entries, 15);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.visible.len(), 10);

        let page = visible_page(&students, &filters, "r012", 1, &LIST_POLICY);
        assert_eq!(page.visible.len(), 1);
        assert_eq!(page.visible[0].id, "12");
    }
}
