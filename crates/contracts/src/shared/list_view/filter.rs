use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Запись, поддерживающая свободный текстовый поиск
pub trait Searchable {
    /// Фиксированный набор полей, по которым ищет строка поиска
    fn search_fields(&self) -> Vec<&str>;
}

/// Запись с категориальными полями для точной фильтрации
pub trait Categorized {
    /// Значение категориального поля по имени фильтра.
    /// `None`, если у записи такого поля нет.
    fn category(&self, filter_name: &str) -> Option<&str>;
}

/// Пустое значение или "all" означает отсутствие ограничения
pub fn is_unconstrained(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v.eq_ignore_ascii_case("all")
}

/// Текущие выбранные значения фильтров экрана
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    selections: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Состояние с заданными фильтрами, все в значении "all"
    pub fn with_filters(names: &[&str]) -> Self {
        let mut state = Self::default();
        for name in names {
            state.set(name, "all");
        }
        state
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.selections.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> &str {
        self.selections.get(name).map(String::as_str).unwrap_or("")
    }

    /// Сбросить один фильтр в "all"
    pub fn reset(&mut self, name: &str) {
        if let Some(value) = self.selections.get_mut(name) {
            *value = "all".to_string();
        }
    }

    pub fn reset_all(&mut self) {
        for value in self.selections.values_mut() {
            *value = "all".to_string();
        }
    }

    /// Количество фильтров, реально ограничивающих выборку (для бейджа)
    pub fn active_count(&self) -> usize {
        self.selections
            .values()
            .filter(|v| !is_unconstrained(v))
            .count()
    }

    /// Активные ограничения в порядке имён
    pub fn constraints(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections
            .iter()
            .filter(|(_, v)| !is_unconstrained(v))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Совпадение строки поиска с любым из полей (без учета регистра)
pub fn matches_search<T: Searchable>(item: &T, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query_lower = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&query_lower))
}

/// Все активные категориальные фильтры совпадают точно (AND)
pub fn matches_filters<T: Categorized>(item: &T, filters: &FilterState) -> bool {
    filters
        .constraints()
        .all(|(name, value)| item.category(name) == Some(value))
}

/// Фильтрует коллекцию: сначала поиск, затем категориальные фильтры.
/// Относительный порядок записей сохраняется.
pub fn filter_records<T>(records: &[T], filters: &FilterState, query: &str) -> Vec<T>
where
    T: Searchable + Categorized + Clone,
{
    records
        .iter()
        .filter(|item| matches_search(*item, query))
        .filter(|item| matches_filters(*item, filters))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        designation: &'static str,
        department: Option<&'static str>,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.designation]
        }
    }

    impl Categorized for Row {
        fn category(&self, filter_name: &str) -> Option<&str> {
            match filter_name {
                "designation" => Some(self.designation),
                "department" => self.department,
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Asha", designation: "Mathematics", department: Some("Science") },
            Row { id: 2, name: "Ravi", designation: "Physics", department: Some("Science") },
            Row { id: 3, name: "Meera", designation: "History", department: Some("Arts") },
            Row { id: 4, name: "Kabir", designation: "Mathematics", department: None },
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filters = FilterState::new();
        let lower = filter_records(&rows(), &filters, "math");
        let upper = filter_records(&rows(), &filters, "MATH");
        assert_eq!(lower, upper);
        assert_eq!(lower.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_unconstrained_values() {
        assert!(is_unconstrained(""));
        assert!(is_unconstrained("all"));
        assert!(is_unconstrained(" All "));
        assert!(!is_unconstrained("Arts"));
    }

    #[test]
    fn test_filters_are_and_combined() {
        let mut filters = FilterState::with_filters(&["designation", "department"]);
        filters.set("designation", "Mathematics");
        let result = filter_records(&rows(), &filters, "");
        assert_eq!(result.len(), 2);

        filters.set("department", "Science");
        let result = filter_records(&rows(), &filters, "");
        assert_eq!(result.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_search_applies_before_filters_and_keeps_order() {
        let mut filters = FilterState::new();
        filters.set("department", "Science");
        let result = filter_records(&rows(), &filters, "a");
        // "Asha" и "Ravi" совпадают по имени, оба из Science
        assert_eq!(result.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_missing_field_does_not_match_constraint() {
        let mut filters = FilterState::new();
        filters.set("department", "Arts");
        let result = filter_records(&rows(), &filters, "");
        assert!(result.iter().all(|r| r.department == Some("Arts")));
    }

    #[test]
    fn test_filtering_never_grows_and_is_idempotent() {
        let mut filters = FilterState::new();
        filters.set("designation", "Mathematics");
        for query in ["", "a", "zzz", "KAB"] {
            let once = filter_records(&rows(), &filters, query);
            assert!(once.len() <= rows().len());
            let twice = filter_records(&once, &filters, query);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_input() {
        let result = filter_records::<Row>(&[], &FilterState::new(), "x");
        assert!(result.is_empty());
    }

    #[test]
    fn test_active_count_and_reset() {
        let mut filters = FilterState::with_filters(&["designation", "department"]);
        assert_eq!(filters.active_count(), 0);
        filters.set("department", "Arts");
        assert_eq!(filters.active_count(), 1);
        filters.reset("department");
        assert_eq!(filters.get("department"), "all");
        filters.set("designation", "Physics");
        filters.reset_all();
        assert_eq!(filters.active_count(), 0);
    }
}
