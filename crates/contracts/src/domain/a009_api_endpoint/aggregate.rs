use crate::shared::list_view::{Categorized, ListPolicy, NextPolicy, PageBase, Searchable};
use crate::shared::presentation::{HttpMethod, Presentable, RecordStatus};
use serde::{Deserialize, Serialize};

pub const FILTER_METHOD: &str = "method";
pub const FILTER_STATUS: &str = "status";

pub const FILTERS: &[&str] = &[FILTER_METHOD, FILTER_STATUS];

pub const LIST_POLICY: ListPolicy = ListPolicy::new(10, PageBase::ZeroBased, NextPolicy::PageBound);

/// Зарегистрированный API интеграции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub id: String,
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    pub owner: String,
    pub status: RecordStatus,
    #[serde(default)]
    pub description: Option<String>,
}

impl Searchable for ApiEndpoint {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.path.as_str(), self.owner.as_str()]
    }
}

impl Categorized for ApiEndpoint {
    fn category(&self, filter_name: &str) -> Option<&str> {
        match filter_name {
            FILTER_METHOD => Some(self.method.as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{filter_records, FilterState};

    #[test]
    fn test_method_filter() {
        let endpoints = vec![
            ApiEndpoint {
                id: "1".to_string(),
                name: "List students".to_string(),
                method: HttpMethod::Get,
                path: "/api/students".to_string(),
                owner: "Academics".to_string(),
                status: RecordStatus::Active,
                description: None,
            },
            ApiEndpoint {
                id: "2".to_string(),
                name: "Delete document".to_string(),
                method: HttpMethod::Delete,
                path: "/api/documents/:id".to_string(),
                owner: "Admin".to_string(),
                status: RecordStatus::Active,
                description: None,
            },
        ];
        let mut filters = FilterState::with_filters(FILTERS);
        filters.set(FILTER_METHOD, "DELETE");
        let found = filter_records(&endpoints, &filters, "/api");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");
    }
}
