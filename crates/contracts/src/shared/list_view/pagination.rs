use serde::{Deserialize, Serialize};

/// Нумерация страниц на экране
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageBase {
    /// Первая страница = 1
    OneBased,
    /// Первая страница = 0
    ZeroBased,
}

impl PageBase {
    pub fn first_page(self) -> usize {
        match self {
            PageBase::OneBased => 1,
            PageBase::ZeroBased => 0,
        }
    }

    /// Индекс страницы с нуля
    pub fn to_index(self, page: usize) -> usize {
        match self {
            PageBase::OneBased => page.saturating_sub(1),
            PageBase::ZeroBased => page,
        }
    }

    pub fn from_index(self, index: usize) -> usize {
        match self {
            PageBase::OneBased => index + 1,
            PageBase::ZeroBased => index,
        }
    }
}

/// Видимый срез отфильтрованной коллекции и метаданные пагинации
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub visible: Vec<T>,
    pub start: usize,
    pub end: usize,
    pub total_entries: usize,
    pub total_pages: usize,
}

impl<T> PageSlice<T> {
    pub fn empty() -> Self {
        Self {
            visible: Vec::new(),
            start: 0,
            end: 0,
            total_entries: 0,
            total_pages: 0,
        }
    }
}

/// ceil(total / page_size); 0 при пустой коллекции
pub fn total_pages(total_entries: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_entries.div_ceil(page_size)
}

/// Срез страницы. Номер страницы вне диапазона не паникует:
/// границы прижимаются к длине коллекции и видимая часть пуста.
pub fn paginate<T: Clone>(
    filtered: &[T],
    page: usize,
    page_size: usize,
    base: PageBase,
) -> PageSlice<T> {
    let total_entries = filtered.len();
    let start = base
        .to_index(page)
        .saturating_mul(page_size)
        .min(total_entries);
    let end = start.saturating_add(page_size).min(total_entries);

    PageSlice {
        visible: filtered[start..end].to_vec(),
        start,
        end,
        total_entries,
        total_pages: total_pages(total_entries, page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_twenty_five_records_in_pages_of_ten() {
        let data = items(25);
        let sizes: Vec<usize> = (1..=3)
            .map(|p| paginate(&data, p, 10, PageBase::OneBased).visible.len())
            .collect();
        assert_eq!(sizes, vec![10, 10, 5]);

        let last = paginate(&data, 3, 10, PageBase::OneBased);
        assert_eq!(last.start, 20);
        assert_eq!(last.end, 25);
        assert_eq!(last.total_pages, 3);
    }

    #[test]
    fn test_zero_based_matches_one_based() {
        let data = items(23);
        for index in 0..3 {
            let one = paginate(&data, index + 1, 10, PageBase::OneBased);
            let zero = paginate(&data, index, 10, PageBase::ZeroBased);
            assert_eq!(one, zero);
        }
    }

    #[test]
    fn test_pages_partition_filtered_sequence() {
        for n in [0usize, 1, 9, 10, 11, 30, 31] {
            let data = items(n);
            let pages = total_pages(n, 10);
            let rebuilt: Vec<usize> = (1..=pages)
                .flat_map(|p| paginate(&data, p, 10, PageBase::OneBased).visible)
                .collect();
            assert_eq!(rebuilt, data);
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_empty_collection() {
        let slice = paginate::<usize>(&[], 1, 10, PageBase::OneBased);
        assert_eq!(slice, PageSlice::empty());
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let data = items(5);
        let slice = paginate(&data, 7, 10, PageBase::OneBased);
        assert!(slice.visible.is_empty());
        assert_eq!(slice.start, 5);
        assert_eq!(slice.end, 5);
        assert_eq!(slice.total_entries, 5);
    }
}
