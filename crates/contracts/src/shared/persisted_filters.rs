//! Сохраняемые фильтры дашборда контента.
//!
//! Вся работа с хранилищем идет через `load_content_filters` /
//! `save_content_filters`; компоненты не читают хранилище напрямую.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

pub const CONTENT_FILTERS_KEY: &str = "content_dashboard_filters";

/// Граница долговременного key/value хранилища
pub trait FilterStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Хранилище в памяти (тесты, окружения без localStorage)
#[derive(Debug, Default)]
pub struct MemoryFilterStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryFilterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilterStore for MemoryFilterStore {
    fn read(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Последние выбранные фильтры дашборда контента
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentFilters {
    pub program_id: String,
    pub semester: String,
    pub vertical_id: String,
    pub specialization_id: String,
    pub search: String,
}

/// Чтение при монтировании. Отсутствующий или битый JSON дает значения по умолчанию.
pub fn load_content_filters(store: &dyn FilterStore) -> ContentFilters {
    store
        .read(CONTENT_FILTERS_KEY)
        .and_then(|raw| serde_json::from_str::<ContentFilters>(&raw).ok())
        .unwrap_or_default()
}

/// Запись при каждом изменении фильтра
pub fn save_content_filters(store: &dyn FilterStore, filters: &ContentFilters) -> anyhow::Result<()> {
    let raw = serde_json::to_string(filters)?;
    store.write(CONTENT_FILTERS_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_blob_gives_defaults() {
        let store = MemoryFilterStore::new();
        assert_eq!(load_content_filters(&store), ContentFilters::default());
    }

    #[test]
    fn test_saved_filters_seed_next_mount() {
        let store = MemoryFilterStore::new();
        let filters = ContentFilters {
            program_id: "btech".to_string(),
            semester: "3".to_string(),
            specialization_id: "ai".to_string(),
            ..Default::default()
        };
        save_content_filters(&store, &filters).unwrap();
        assert_eq!(load_content_filters(&store), filters);
    }

    #[test]
    fn test_corrupt_blob_is_ignored() {
        let store = MemoryFilterStore::new();
        store.write(CONTENT_FILTERS_KEY, "{not json").unwrap();
        assert_eq!(load_content_filters(&store), ContentFilters::default());
    }

    #[test]
    fn test_partial_blob_fills_defaults() {
        let store = MemoryFilterStore::new();
        store
            .write(CONTENT_FILTERS_KEY, r#"{"program_id":"mba"}"#)
            .unwrap();
        let loaded = load_content_filters(&store);
        assert_eq!(loaded.program_id, "mba");
        assert!(loaded.semester.is_empty());
    }
}
