//! Вторичная навигация, вычисляемая из формы данных:
//! вертикали и специализации предметов, месяцы, недели и дни периода.

pub mod category;
pub mod cursor;
pub mod period;

pub use category::{derive_category_tabs, SpecializationSource, VerticalSource, GENERAL_TAB_ID};
pub use cursor::SubTabCursor;
pub use period::{
    date_in_tab, days_in_month, derive_period_tabs, format_day, month_name, week_buckets, week_tabs,
    PeriodView, WeekBucket,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubTabKind {
    Vertical,
    Specialization,
    General,
    Month,
    Week,
    Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTab {
    pub id: String,
    pub name: String,
    pub kind: SubTabKind,
}

impl SubTab {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: SubTabKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}
