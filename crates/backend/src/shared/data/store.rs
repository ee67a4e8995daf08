use super::fixtures::Fixtures;
use contracts::shared::list_view::is_unconstrained;
use std::sync::{Arc, RwLock};

/// Коллекции в памяти, общие для всех обработчиков
#[derive(Clone)]
pub struct MockStore {
    inner: Arc<RwLock<Fixtures>>,
}

/// Необязательный параметр запроса: пустое значение или "all" не ограничивает
pub fn param_matches(param: Option<&str>, value: &str) -> bool {
    match param {
        Some(p) if !is_unconstrained(p) => p == value,
        _ => true,
    }
}

impl MockStore {
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            inner: Arc::new(RwLock::new(fixtures)),
        }
    }

    /// Чтение через замыкание; отравленная блокировка превращается в ошибку
    pub fn read<R>(&self, f: impl FnOnce(&Fixtures) -> R) -> Result<R, String> {
        let guard = self
            .inner
            .read()
            .map_err(|_| "data store lock poisoned".to_string())?;
        Ok(f(&guard))
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Fixtures) -> R) -> Result<R, String> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| "data store lock poisoned".to_string())?;
        Ok(f(&mut guard))
    }
}

/// Удалить запись по id; `true`, если запись была
pub fn remove_by_id<T>(items: &mut Vec<T>, id: &str, id_of: impl Fn(&T) -> &str) -> bool {
    let before = items.len();
    items.retain(|item| id_of(item) != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_matches() {
        assert!(param_matches(None, "btech"));
        assert!(param_matches(Some(""), "btech"));
        assert!(param_matches(Some("all"), "btech"));
        assert!(param_matches(Some("btech"), "btech"));
        assert!(!param_matches(Some("mba"), "btech"));
    }

    #[test]
    fn test_remove_by_id() {
        let store = MockStore::new(Fixtures::embedded());
        let removed = store
            .write(|f| remove_by_id(&mut f.documents, "doc-1", |d| d.id.as_str()))
            .unwrap();
        assert!(removed);
        let again = store
            .write(|f| remove_by_id(&mut f.documents, "doc-1", |d| d.id.as_str()))
            .unwrap();
        assert!(!again);
        assert_eq!(store.read(|f| f.documents.len()).unwrap(), 11);
    }
}
