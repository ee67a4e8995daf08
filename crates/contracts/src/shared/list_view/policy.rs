use super::filter::FilterState;
use super::pagination::{total_pages, PageBase};
use serde::{Deserialize, Serialize};

/// Правило блокировки кнопки "Next"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextPolicy {
    /// Заблокирована на последней странице (`page >= total_pages`)
    PageBound,
    /// Заблокирована, пока записей не больше одной страницы
    /// (`total_entries <= page_size`). Граница страниц не проверяется,
    /// обработчик перехода сам прижимает номер.
    MoreThanOnePage,
}

/// Поведение списка конкретного экрана
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPolicy {
    pub page_size: usize,
    pub base: PageBase,
    pub next: NextPolicy,
    /// Сбрасывать фильтры при закрытии панели фильтров
    pub reset_on_panel_close: bool,
}

impl ListPolicy {
    pub const fn new(page_size: usize, base: PageBase, next: NextPolicy) -> Self {
        Self {
            page_size,
            base,
            next,
            reset_on_panel_close: false,
        }
    }

    pub const fn resetting_on_close(mut self) -> Self {
        self.reset_on_panel_close = true;
        self
    }

    pub fn first_page(&self) -> usize {
        self.base.first_page()
    }

    pub fn last_page(&self, total_entries: usize) -> usize {
        let pages = total_pages(total_entries, self.page_size);
        self.base.from_index(pages.saturating_sub(1))
    }

    pub fn total_pages(&self, total_entries: usize) -> usize {
        total_pages(total_entries, self.page_size)
    }

    pub fn has_prev(&self, page: usize) -> bool {
        page > self.first_page()
    }

    pub fn has_next(&self, page: usize, total_entries: usize) -> bool {
        match self.next {
            NextPolicy::PageBound => {
                let index = self.base.to_index(page);
                index + 1 < self.total_pages(total_entries)
            }
            NextPolicy::MoreThanOnePage => total_entries > self.page_size,
        }
    }

    /// Прижать номер страницы к допустимому диапазону
    pub fn clamp(&self, page: usize, total_entries: usize) -> usize {
        page.max(self.first_page()).min(self.last_page(total_entries))
    }

    /// Следующая страница с учетом границы
    pub fn next_page(&self, page: usize, total_entries: usize) -> usize {
        self.clamp(page + 1, total_entries)
    }

    pub fn prev_page(&self, page: usize) -> usize {
        page.saturating_sub(1).max(self.first_page())
    }

    /// Реакция на закрытие панели фильтров
    pub fn on_filter_panel_closed(&self, filters: &mut FilterState) {
        if self.reset_on_panel_close {
            filters.reset_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUND: ListPolicy = ListPolicy::new(10, PageBase::OneBased, NextPolicy::PageBound);
    const LOOSE: ListPolicy =
        ListPolicy::new(10, PageBase::OneBased, NextPolicy::MoreThanOnePage);

    #[test]
    fn test_next_disabled_exactly_on_last_page() {
        assert!(BOUND.has_next(1, 25));
        assert!(BOUND.has_next(2, 25));
        assert!(!BOUND.has_next(3, 25));
    }

    #[test]
    fn test_prev_disabled_on_first_page() {
        assert!(!BOUND.has_prev(1));
        assert!(BOUND.has_prev(2));

        let zero = ListPolicy::new(10, PageBase::ZeroBased, NextPolicy::PageBound);
        assert!(!zero.has_prev(0));
        assert!(zero.has_prev(1));
        assert!(zero.has_next(0, 11));
        assert!(!zero.has_next(1, 11));
    }

    #[test]
    fn test_more_than_one_page_policy() {
        assert!(!LOOSE.has_next(1, 0));
        assert!(!LOOSE.has_next(1, 10));
        assert!(LOOSE.has_next(1, 11));
        // граница страниц не учитывается
        assert!(LOOSE.has_next(2, 11));
        assert_eq!(LOOSE.next_page(2, 11), 2);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(BOUND.clamp(0, 25), 1);
        assert_eq!(BOUND.clamp(9, 25), 3);
        assert_eq!(BOUND.clamp(2, 0), 1);
        let zero = ListPolicy::new(10, PageBase::ZeroBased, NextPolicy::PageBound);
        assert_eq!(zero.clamp(9, 25), 2);
        assert_eq!(zero.clamp(3, 0), 0);
    }

    #[test]
    fn test_panel_close_reset_only_when_enabled() {
        let mut filters = FilterState::with_filters(&["department", "priority"]);
        filters.set("department", "Science");
        BOUND.on_filter_panel_closed(&mut filters);
        assert_eq!(filters.get("department"), "Science");

        BOUND.resetting_on_close().on_filter_panel_closed(&mut filters);
        assert_eq!(filters.get("department"), "all");
    }
}
