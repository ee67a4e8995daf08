//! Клиентская обработка списков: поиск, фильтры, пагинация.
//!
//! Один и тот же конвейер используется всеми дашбордами:
//! `filter_records` -> `paginate` -> таблица.

pub mod filter;
pub mod pagination;
pub mod policy;

pub use filter::{
    filter_records, is_unconstrained, matches_filters, matches_search, Categorized, FilterState,
    Searchable,
};
pub use pagination::{paginate, total_pages, PageBase, PageSlice};
pub use policy::{ListPolicy, NextPolicy};

pub const DASH: &str = "—";
pub const NOT_AVAILABLE: &str = "N/A";

/// Значение для отображения или заглушка, если поле отсутствует или пустое
pub fn display_or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Полный конвейер экрана: фильтрация, прижатие страницы, срез
pub fn visible_page<T>(
    records: &[T],
    filters: &FilterState,
    query: &str,
    page: usize,
    policy: &ListPolicy,
) -> PageSlice<T>
where
    T: Searchable + Categorized + Clone,
{
    let filtered = filter_records(records, filters, query);
    let page = policy.clamp(page, filtered.len());
    paginate(&filtered, page, policy.page_size, policy.base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder() {
        assert_eq!(display_or_placeholder(Some("Asha"), DASH), "Asha");
        assert_eq!(display_or_placeholder(Some("  "), DASH), "—");
        assert_eq!(display_or_placeholder(None, NOT_AVAILABLE), "N/A");
    }
}
