use crate::shared::list_view::{Categorized, ListPolicy, NextPolicy, PageBase, Searchable};
use crate::shared::presentation::{DocumentKind, Presentable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const FILTER_KIND: &str = "kind";
pub const FILTER_DEPARTMENT: &str = "department";

pub const FILTERS: &[&str] = &[FILTER_KIND, FILTER_DEPARTMENT];

pub const LIST_POLICY: ListPolicy = ListPolicy::new(10, PageBase::OneBased, NextPolicy::PageBound);

/// Загруженный документ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub kind: DocumentKind,
    pub owner: String,
    pub department: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: NaiveDate,
    #[serde(rename = "sizeBytes", default)]
    pub size_bytes: Option<u64>,
}

impl Document {
    /// Размер для таблицы: "1.4 MB", "820 KB" или "—"
    pub fn size_label(&self) -> String {
        const KB: f64 = 1024.0;
        match self.size_bytes {
            None => crate::shared::list_view::DASH.to_string(),
            Some(bytes) if (bytes as f64) < KB * KB => {
                format!("{:.0} KB", (bytes as f64 / KB).max(1.0))
            }
            Some(bytes) => format!("{:.1} MB", bytes as f64 / (KB * KB)),
        }
    }
}

impl Searchable for Document {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.file_name.as_str(),
            self.owner.as_str(),
        ]
    }
}

impl Categorized for Document {
    fn category(&self, filter_name: &str) -> Option<&str> {
        match filter_name {
            FILTER_KIND => Some(self.kind.as_str()),
            FILTER_DEPARTMENT => Some(self.department.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(size: Option<u64>) -> Document {
        Document {
            id: "d1".to_string(),
            title: "Syllabus".to_string(),
            file_name: "syllabus.pdf".to_string(),
            kind: DocumentKind::Pdf,
            owner: "Meera".to_string(),
            department: "Arts".to_string(),
            uploaded_at: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            size_bytes: size,
        }
    }

    #[test]
    fn test_size_label() {
        assert_eq!(doc(None).size_label(), "—");
        assert_eq!(doc(Some(10)).size_label(), "1 KB");
        assert_eq!(doc(Some(2048)).size_label(), "2 KB");
        assert_eq!(doc(Some(3 * 1024 * 1024 / 2)).size_label(), "1.5 MB");
    }

    #[test]
    fn test_kind_category() {
        assert_eq!(doc(None).category(FILTER_KIND), Some("pdf"));
        assert_eq!(doc(None).category("unknown"), None);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(doc(Some(1))).unwrap();
        assert_eq!(json["fileName"], "syllabus.pdf");
        assert_eq!(json["kind"], "pdf");
        assert_eq!(json["uploadedAt"], "2024-05-01");
    }
}
