use super::{SubTab, SubTabKind};
use std::collections::HashSet;

pub const GENERAL_TAB_ID: &str = "general";
const GENERAL_TAB_NAME: &str = "General";

/// Родительский тип (программа), который может задавать вертикали
pub trait VerticalSource {
    /// Пары (id, name)
    fn verticals(&self) -> Vec<(&str, &str)>;
}

/// Запись со ссылкой на специализацию
pub trait SpecializationSource {
    /// (id, name) или `None`, если специализация не указана
    fn specialization(&self) -> Option<(&str, &str)>;
}

/// id вкладки "General", не совпадающий ни с одной специализацией
fn general_tab_id(taken: &HashSet<&str>) -> String {
    if !taken.contains(GENERAL_TAB_ID) {
        return GENERAL_TAB_ID.to_string();
    }
    (1..)
        .map(|n| format!("{}-{}", GENERAL_TAB_ID, n))
        .find(|id| !taken.contains(id.as_str()))
        .unwrap_or_default()
}

/// Вкладки категорий:
/// - вертикали родителя, если они есть;
/// - иначе уникальные специализации записей (по id, в порядке появления),
///   с "General" в начале, если хотя бы у одной записи нет специализации;
/// - иначе вкладок нет.
pub fn derive_category_tabs<P, R>(parent: Option<&P>, records: &[R]) -> Vec<SubTab>
where
    P: VerticalSource,
    R: SpecializationSource,
{
    if let Some(parent) = parent {
        let verticals = parent.verticals();
        if !verticals.is_empty() {
            let mut seen = HashSet::new();
            return verticals
                .into_iter()
                .filter(|(id, _)| seen.insert(*id))
                .map(|(id, name)| SubTab::new(id, name, SubTabKind::Vertical))
                .collect();
        }
    }

    let mut seen = HashSet::new();
    let mut specializations = Vec::new();
    let mut has_unassigned = false;
    for record in records {
        match record.specialization() {
            Some((id, name)) => {
                if seen.insert(id) {
                    specializations.push(SubTab::new(id, name, SubTabKind::Specialization));
                }
            }
            None => has_unassigned = true,
        }
    }

    if specializations.is_empty() {
        return Vec::new();
    }

    let mut tabs = Vec::with_capacity(specializations.len() + 1);
    if has_unassigned {
        tabs.push(SubTab::new(
            general_tab_id(&seen),
            GENERAL_TAB_NAME,
            SubTabKind::General,
        ));
    }
    tabs.extend(specializations);
    tabs
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Program {
        verticals: Vec<(&'static str, &'static str)>,
    }

    impl VerticalSource for Program {
        fn verticals(&self) -> Vec<(&str, &str)> {
            self.verticals.clone()
        }
    }

    struct Subject(Option<(&'static str, &'static str)>);

    impl SpecializationSource for Subject {
        fn specialization(&self) -> Option<(&str, &str)> {
            self.0
        }
    }

    fn ids(tabs: &[SubTab]) -> Vec<&str> {
        tabs.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_verticals_win_over_specializations() {
        let program = Program {
            verticals: vec![("v1", "Engineering"), ("v2", "Management")],
        };
        let subjects = vec![Subject(Some(("s1", "AI"))), Subject(None)];
        let tabs = derive_category_tabs(Some(&program), &subjects);
        assert_eq!(ids(&tabs), vec!["v1", "v2"]);
        assert!(tabs.iter().all(|t| t.kind == SubTabKind::Vertical));
    }

    #[test]
    fn test_specializations_deduplicated_with_general_first() {
        let program = Program { verticals: vec![] };
        let subjects = vec![
            Subject(Some(("s2", "Data Science"))),
            Subject(None),
            Subject(Some(("s1", "AI"))),
            Subject(Some(("s2", "Data Science"))),
        ];
        let tabs = derive_category_tabs(Some(&program), &subjects);
        assert_eq!(ids(&tabs), vec![GENERAL_TAB_ID, "s2", "s1"]);
        assert_eq!(tabs[0].name, "General");
    }

    #[test]
    fn test_no_general_when_every_record_is_specialized() {
        let subjects = vec![Subject(Some(("s1", "AI"))), Subject(Some(("s3", "Cloud")))];
        let tabs = derive_category_tabs::<Program, _>(None, &subjects);
        assert_eq!(ids(&tabs), vec!["s1", "s3"]);
        assert!(tabs.iter().all(|t| t.kind != SubTabKind::General));
    }

    #[test]
    fn test_no_tabs_without_verticals_or_specializations() {
        let subjects = vec![Subject(None), Subject(None)];
        assert!(derive_category_tabs::<Program, _>(None, &subjects).is_empty());
        assert!(derive_category_tabs::<Program, Subject>(None, &[]).is_empty());
    }

    #[test]
    fn test_identifiers_never_repeat() {
        let subjects: Vec<Subject> = (0..20)
            .map(|i| match i % 4 {
                0 => Subject(None),
                1 => Subject(Some(("a", "A"))),
                2 => Subject(Some(("b", "B"))),
                _ => Subject(Some(("a", "A"))),
            })
            .collect();
        let tabs = derive_category_tabs::<Program, _>(None, &subjects);
        let unique: HashSet<&str> = tabs.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(unique.len(), tabs.len());
        assert_eq!(ids(&tabs), vec![GENERAL_TAB_ID, "a", "b"]);
    }

    #[test]
    fn test_general_id_does_not_clash_with_specialization_ids() {
        let subjects = vec![
            Subject(None),
            Subject(Some(("general", "General Studies"))),
            Subject(Some(("general-1", "General Studies II"))),
        ];
        let tabs = derive_category_tabs::<Program, _>(None, &subjects);
        let unique: HashSet<&str> = tabs.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(unique.len(), tabs.len());
        assert_eq!(ids(&tabs), vec!["general-2", "general", "general-1"]);
        assert_eq!(tabs[0].kind, SubTabKind::General);
        assert_eq!(tabs[1].kind, SubTabKind::Specialization);
    }
}
