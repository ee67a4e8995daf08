use super::{SubTab, SubTabKind};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAYS_PER_WEEK: u32 = 7;

/// Режим периода для табеля, отпусков и задач
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PeriodView {
    Monthly,
    /// `week` с единицы, недели режутся по 7 дней от 1-го числа
    Weekly { year: i32, month: u32, week: u32 },
    /// Включительный диапазон дат
    Period { from: NaiveDate, to: NaiveDate },
}

/// Неделя месяца: номер и дни
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekBucket {
    pub number: u32,
    pub days: Vec<NaiveDate>,
}

/// Количество дней в месяце; `None` для некорректного месяца
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - start).num_days() as u32)
}

/// Все недели месяца: ceil(days/7) корзин, последняя обрезана концом месяца
pub fn week_buckets(year: i32, month: u32) -> Vec<WeekBucket> {
    let Some(days) = days_in_month(year, month) else {
        return Vec::new();
    };
    (1..=days)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect::<Vec<_>>()
        .chunks(DAYS_PER_WEEK as usize)
        .enumerate()
        .map(|(i, chunk)| WeekBucket {
            number: i as u32 + 1,
            days: chunk.to_vec(),
        })
        .collect()
}

pub fn format_day(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

fn day_tab(date: NaiveDate) -> SubTab {
    SubTab::new(
        date.format("%Y-%m-%d").to_string(),
        format_day(date),
        SubTabKind::Day,
    )
}

/// Вкладки периода
pub fn derive_period_tabs(view: &PeriodView) -> Vec<SubTab> {
    match view {
        PeriodView::Monthly => MONTH_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| SubTab::new((i + 1).to_string(), *name, SubTabKind::Month))
            .collect(),
        PeriodView::Weekly { year, month, week } => week_buckets(*year, *month)
            .into_iter()
            .find(|bucket| bucket.number == *week)
            .map(|bucket| bucket.days.into_iter().map(day_tab).collect())
            .unwrap_or_default(),
        PeriodView::Period { from, to } => {
            if from > to {
                return Vec::new();
            }
            let len = (*to - *from).num_days();
            (0..=len).map(|offset| day_tab(*from + Duration::days(offset))).collect()
        }
    }
}

/// Вкладки-недели для выбора номера недели в месяце
pub fn week_tabs(year: i32, month: u32) -> Vec<SubTab> {
    week_buckets(year, month)
        .into_iter()
        .map(|bucket| {
            SubTab::new(
                bucket.number.to_string(),
                format!("Week {}", bucket.number),
                SubTabKind::Week,
            )
        })
        .collect()
}

/// Попадает ли дата в выбранную вкладку
pub fn date_in_tab(date: NaiveDate, tab: &SubTab) -> bool {
    match tab.kind {
        SubTabKind::Month => tab.id.parse::<u32>().is_ok_and(|m| m == date.month()),
        SubTabKind::Day => date.format("%Y-%m-%d").to_string() == tab.id,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_tabs() {
        let tabs = derive_period_tabs(&PeriodView::Monthly);
        assert_eq!(tabs.len(), 12);
        assert_eq!(tabs[0].name, "January");
        assert_eq!(tabs[11].id, "12");
    }

    #[test]
    fn test_february_leap_year_has_five_weeks() {
        let buckets = week_buckets(2024, 2);
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[4].days, vec![ymd(2024, 2, 29)]);
        assert_eq!(week_tabs(2024, 2).len(), 5);
    }

    #[test]
    fn test_weekly_day_labels() {
        let tabs = derive_period_tabs(&PeriodView::Weekly {
            year: 2024,
            month: 2,
            week: 2,
        });
        assert_eq!(tabs.len(), 7);
        assert_eq!(tabs[0].name, "08-02-2024");
        assert_eq!(tabs[6].name, "14-02-2024");

        let last = derive_period_tabs(&PeriodView::Weekly {
            year: 2024,
            month: 2,
            week: 5,
        });
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].name, "29-02-2024");
    }

    #[test]
    fn test_weekly_out_of_range() {
        let view = PeriodView::Weekly {
            year: 2023,
            month: 2,
            week: 5,
        };
        assert!(derive_period_tabs(&view).is_empty());
        assert!(week_buckets(2024, 13).is_empty());
    }

    #[test]
    fn test_period_is_inclusive() {
        let tabs = derive_period_tabs(&PeriodView::Period {
            from: ymd(2024, 12, 30),
            to: ymd(2025, 1, 2),
        });
        let names: Vec<&str> = tabs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["30-12-2024", "31-12-2024", "01-01-2025", "02-01-2025"]
        );
    }

    #[test]
    fn test_reversed_period_is_empty() {
        let view = PeriodView::Period {
            from: ymd(2024, 3, 2),
            to: ymd(2024, 3, 1),
        };
        assert!(derive_period_tabs(&view).is_empty());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 0), None);
    }

    #[test]
    fn test_date_in_tab() {
        let month = SubTab::new("3", "March", SubTabKind::Month);
        assert!(date_in_tab(ymd(2024, 3, 15), &month));
        assert!(!date_in_tab(ymd(2024, 4, 15), &month));
        let day = &derive_period_tabs(&PeriodView::Period {
            from: ymd(2024, 3, 15),
            to: ymd(2024, 3, 15),
        })[0];
        assert!(date_in_tab(ymd(2024, 3, 15), day));
    }
}
