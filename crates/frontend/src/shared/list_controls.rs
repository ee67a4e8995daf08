use contracts::shared::list_view::{
    visible_page, Categorized, FilterState, ListPolicy, PageSlice, Searchable,
};
use contracts::shared::presentation::Presentable;
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Состояние списка экрана: фильтры, строка поиска, страница и панель фильтров.
///
/// Любое изменение фильтра или поиска возвращает на первую страницу.
#[derive(Clone, Copy)]
pub struct ListControls {
    pub policy: ListPolicy,
    pub filters: RwSignal<FilterState>,
    pub search: RwSignal<String>,
    pub page: RwSignal<usize>,
    pub panel_open: RwSignal<bool>,
}

impl ListControls {
    pub fn new(policy: ListPolicy, filter_names: &[&str]) -> Self {
        Self {
            policy,
            filters: RwSignal::new(FilterState::with_filters(filter_names)),
            search: RwSignal::new(String::new()),
            page: RwSignal::new(policy.first_page()),
            panel_open: RwSignal::new(false),
        }
    }

    pub fn filter_value(&self, name: &'static str) -> Signal<String> {
        let filters = self.filters;
        Signal::derive(move || filters.with(|f| f.get(name).to_string()))
    }

    pub fn set_filter(&self, name: &str, value: String) {
        self.filters.update(|f| f.set(name, value));
        self.page.set(self.policy.first_page());
    }

    pub fn set_search(&self, query: String) {
        self.search.set(query);
        self.page.set(self.policy.first_page());
    }

    pub fn reset_filters(&self) {
        self.filters.update(|f| f.reset_all());
        self.page.set(self.policy.first_page());
    }

    pub fn active_count(&self) -> Signal<usize> {
        let filters = self.filters;
        Signal::derive(move || filters.with(|f| f.active_count()))
    }

    /// Панель закрыта пользователем; сброс фильтров решает политика экрана
    pub fn on_panel_closed(&self) {
        if self.policy.reset_on_panel_close {
            self.filters.update(|f| self.policy.on_filter_panel_closed(f));
            self.page.set(self.policy.first_page());
        }
    }

    /// Видимая страница (отслеживает фильтры, поиск и номер страницы)
    pub fn slice<T>(&self, records: &[T]) -> PageSlice<T>
    where
        T: Searchable + Categorized + Clone,
    {
        let query = self.search.get();
        let page = self.page.get();
        self.filters
            .with(|f| visible_page(records, f, &query, page, &self.policy))
    }

    pub fn next(&self, total_entries: usize) {
        let policy = self.policy;
        self.page.update(|p| *p = policy.next_page(*p, total_entries));
    }

    pub fn prev(&self) {
        let policy = self.policy;
        self.page.update(|p| *p = policy.prev_page(*p));
    }
}

/// Варианты фильтра из значений перечисления
pub fn presentable_options<P: Presentable>() -> Vec<(String, String)> {
    P::ALL
        .iter()
        .map(|v| (v.as_str().to_string(), v.presentation().label.to_string()))
        .collect()
}

/// Варианты фильтра из значений поля записей: уникальные, по алфавиту
pub fn distinct_options<T>(records: &[T], field: impl Fn(&T) -> &str) -> Vec<(String, String)> {
    let values: BTreeSet<&str> = records
        .iter()
        .map(|r| field(r))
        .filter(|v| !v.trim().is_empty())
        .collect();
    values
        .into_iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}
