use chrono::{Datelike, Utc};
use contracts::shared::sub_tabs::{derive_period_tabs, PeriodView, SubTab, SubTabCursor};
use leptos::prelude::*;

/// Откуда взят текущий год экрана
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearOrigin {
    Today,
    Data,
    User,
}

/// Год из данных заменяет только год по умолчанию
fn year_to_adopt(origin: YearOrigin, years: impl IntoIterator<Item = i32>) -> Option<i32> {
    match origin {
        YearOrigin::Today => years.into_iter().max(),
        YearOrigin::Data | YearOrigin::User => None,
    }
}

/// Вкладки периода экрана: режим, год и курсор по вычисленным вкладкам.
/// Смена режима или диапазона пересчитывает вкладки и делает активной первую.
#[derive(Clone, Copy)]
pub struct PeriodTabs {
    pub period: RwSignal<PeriodView>,
    pub year: RwSignal<i32>,
    pub cursor: RwSignal<SubTabCursor<()>>,
    year_origin: StoredValue<YearOrigin>,
}

impl PeriodTabs {
    pub fn new() -> Self {
        let period = RwSignal::new(PeriodView::Monthly);
        let cursor = RwSignal::new(SubTabCursor::new(derive_period_tabs(&PeriodView::Monthly)));
        Effect::new(move |_| {
            let tabs = period.with(derive_period_tabs);
            cursor.update(|c| c.replace_tabs(tabs));
        });
        Self {
            period,
            year: RwSignal::new(Utc::now().year()),
            cursor,
            year_origin: StoredValue::new(YearOrigin::Today),
        }
    }

    pub fn tabs(&self) -> Signal<Vec<SubTab>> {
        let cursor = self.cursor;
        Signal::derive(move || cursor.with(|c| c.tabs().to_vec()))
    }

    pub fn active_id(&self) -> Signal<Option<String>> {
        let cursor = self.cursor;
        Signal::derive(move || cursor.with(|c| c.active_id().map(str::to_string)))
    }

    /// Активная вкладка (отслеживается)
    pub fn active_tab(&self) -> Option<SubTab> {
        self.cursor.with(|c| c.active_tab().cloned())
    }

    pub fn select(&self, id: String) {
        self.cursor.update(|c| {
            c.select(&id);
        });
    }

    /// Один раз за время жизни экрана переключиться на последний год в данных,
    /// если пользователь еще не выбирал год сам
    pub fn adopt_year(&self, years: impl IntoIterator<Item = i32>) {
        if let Some(latest) = year_to_adopt(self.year_origin.get_value(), years) {
            self.year_origin.set_value(YearOrigin::Data);
            self.year.set(latest);
        }
    }

    /// Год, выбранный пользователем; данные, пришедшие позже, его не меняют
    pub fn choose_year(&self, value: i32) {
        self.year_origin.set_value(YearOrigin::User);
        self.year.set(value);
        self.period.update(|p| {
            if let PeriodView::Weekly { year, .. } = p {
                *year = value;
            }
        });
    }
}

impl Default for PeriodTabs {
    fn default() -> Self {
        Self::new()
    }
}
