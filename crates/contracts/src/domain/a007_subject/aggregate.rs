use crate::shared::list_view::{Categorized, ListPolicy, NextPolicy, PageBase, Searchable};
use crate::shared::presentation::ContentKind;
use crate::shared::sub_tabs::{
    SpecializationSource, SubTab, SubTabKind, VerticalSource,
};
use serde::{Deserialize, Serialize};

pub const FILTER_SEMESTER: &str = "semester";
pub const FILTER_VERTICAL: &str = "vertical";
pub const FILTER_SPECIALIZATION: &str = "specialization";
/// "yes" для предметов без специализации, иначе "no"
pub const FILTER_UNSPECIALIZED: &str = "unspecialized";

pub const LIST_POLICY: ListPolicy = ListPolicy::new(10, PageBase::OneBased, NextPolicy::PageBound);

// ============================================================================
// Program type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertical {
    pub id: String,
    pub name: String,
}

/// Тип программы (BTech, MBA, ...); может делиться на вертикали
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub semesters: u32,
    #[serde(default)]
    pub verticals: Vec<Vertical>,
}

impl VerticalSource for ProgramType {
    fn verticals(&self) -> Vec<(&str, &str)> {
        self.verticals
            .iter()
            .map(|v| (v.id.as_str(), v.name.as_str()))
            .collect()
    }
}

// ============================================================================
// Subject and its content
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecializationRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub kind: ContentKind,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectModule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(rename = "programId")]
    pub program_id: String,
    pub semester: String,
    #[serde(rename = "verticalId", default)]
    pub vertical_id: Option<String>,
    #[serde(default)]
    pub specialization: Option<SpecializationRef>,
    #[serde(default)]
    pub faculty: Option<String>,
    #[serde(default)]
    pub modules: Vec<SubjectModule>,
}

impl Subject {
    pub fn content_count(&self) -> usize {
        self.modules.iter().map(|m| m.items.len()).sum()
    }
}

impl SpecializationSource for Subject {
    fn specialization(&self) -> Option<(&str, &str)> {
        self.specialization
            .as_ref()
            .map(|s| (s.id.as_str(), s.name.as_str()))
    }
}

impl Searchable for Subject {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.code.as_str()];
        if let Some(faculty) = &self.faculty {
            fields.push(faculty.as_str());
        }
        fields
    }
}

impl Categorized for Subject {
    fn category(&self, filter_name: &str) -> Option<&str> {
        match filter_name {
            FILTER_SEMESTER => Some(self.semester.as_str()),
            FILTER_VERTICAL => self.vertical_id.as_deref(),
            FILTER_SPECIALIZATION => self.specialization.as_ref().map(|s| s.id.as_str()),
            // вкладка "General" выбирает по отсутствию специализации, а не по id
            FILTER_UNSPECIALIZED => Some(if self.specialization.is_none() { "yes" } else { "no" }),
            _ => None,
        }
    }
}

/// Фильтр, соответствующий выбранной вкладке категории
pub fn tab_filter(tab: &SubTab) -> Option<(&'static str, String)> {
    match tab.kind {
        SubTabKind::Vertical => Some((FILTER_VERTICAL, tab.id.clone())),
        SubTabKind::Specialization => Some((FILTER_SPECIALIZATION, tab.id.clone())),
        SubTabKind::General => Some((FILTER_UNSPECIALIZED, "yes".to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{filter_records, FilterState};
    use crate::shared::sub_tabs::{derive_category_tabs, SubTabCursor, GENERAL_TAB_ID};

    fn subject(id: &str, spec: Option<(&str, &str)>) -> Subject {
        Subject {
            id: id.to_string(),
            code: format!("CS{}", id),
            name: format!("Subject {}", id),
            program_id: "btech".to_string(),
            semester: "3".to_string(),
            vertical_id: None,
            specialization: spec.map(|(id, name)| SpecializationRef {
                id: id.to_string(),
                name: name.to_string(),
            }),
            faculty: None,
            modules: vec![SubjectModule {
                id: "m1".to_string(),
                title: "Basics".to_string(),
                items: vec![ContentItem {
                    id: "c1".to_string(),
                    title: "Intro".to_string(),
                    kind: ContentKind::Video,
                    url: None,
                }],
            }],
        }
    }

    fn program(verticals: &[(&str, &str)]) -> ProgramType {
        ProgramType {
            id: "btech".to_string(),
            name: "BTech".to_string(),
            semesters: 8,
            verticals: verticals
                .iter()
                .map(|(id, name)| Vertical {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_general_tab_selects_unspecialized_subjects() {
        let subjects = vec![
            subject("1", Some(("ai", "AI & ML"))),
            subject("2", None),
            subject("3", Some(("cloud", "Cloud"))),
        ];
        let tabs = derive_category_tabs(Some(&program(&[])), &subjects);
        assert_eq!(tabs[0].id, GENERAL_TAB_ID);

        let (name, value) = tab_filter(&tabs[0]).unwrap();
        let mut filters = FilterState::new();
        filters.set(name, value);
        let found = filter_records(&subjects, &filters, "");
        assert_eq!(found.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(), vec!["2"]);
    }

    #[test]
    fn test_general_tab_ignores_specialization_named_general() {
        let subjects = vec![
            subject("1", None),
            subject("2", Some(("general", "General Studies"))),
        ];
        let tabs = derive_category_tabs(Some(&program(&[])), &subjects);
        assert_eq!(tabs.len(), 2);
        assert_ne!(tabs[0].id, tabs[1].id);

        let selected = |tab: &SubTab| {
            let (name, value) = tab_filter(tab).unwrap();
            let mut filters = FilterState::new();
            filters.set(name, value);
            filter_records(&subjects, &filters, "")
                .into_iter()
                .map(|s| s.id)
                .collect::<Vec<_>>()
        };
        assert_eq!(selected(&tabs[0]), vec!["1"]);
        assert_eq!(selected(&tabs[1]), vec!["2"]);

        let mut cursor: SubTabCursor<String> = SubTabCursor::new(tabs);
        assert!(cursor.select("general"));
        assert_eq!(cursor.active_tab().map(|t| t.kind), Some(SubTabKind::Specialization));
    }

    #[test]
    fn test_vertical_tabs_from_program() {
        let mut s = subject("1", None);
        s.vertical_id = Some("core".to_string());
        let subjects = vec![s, subject("2", None)];
        let program = program(&[("core", "Core"), ("elective", "Elective")]);
        let tabs = derive_category_tabs(Some(&program), &subjects);
        assert_eq!(tabs.len(), 2);

        let (name, value) = tab_filter(&tabs[0]).unwrap();
        let mut filters = FilterState::new();
        filters.set(name, value);
        assert_eq!(filter_records(&subjects, &filters, "").len(), 1);
    }

    #[test]
    fn test_program_change_resets_selected_subject() {
        let subjects = vec![subject("1", Some(("ai", "AI")))];
        let mut cursor: SubTabCursor<String> =
            SubTabCursor::new(derive_category_tabs(Some(&program(&[])), &subjects));
        cursor.select_child("1".to_string());

        cursor.replace_tabs(derive_category_tabs(Some(&program(&[("v", "V")])), &subjects));
        assert_eq!(cursor.active_id(), Some("v"));
        assert!(cursor.child().is_none());
    }

    #[test]
    fn test_content_count() {
        assert_eq!(subject("1", None).content_count(), 1);
    }
}
