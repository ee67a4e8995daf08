use chrono::{Datelike, NaiveDate, Utc};
use crate::shared::period_tabs::PeriodTabs;
use contracts::shared::sub_tabs::{month_name, week_tabs, PeriodView};
use leptos::prelude::*;

const MODE_MONTHLY: &str = "monthly";
const MODE_WEEKLY: &str = "weekly";
const MODE_PERIOD: &str = "period";

fn mode_of(view: &PeriodView) -> &'static str {
    match view {
        PeriodView::Monthly => MODE_MONTHLY,
        PeriodView::Weekly { .. } => MODE_WEEKLY,
        PeriodView::Period { .. } => MODE_PERIOD,
    }
}

/// Представление по умолчанию при переключении режима
fn default_view(mode: &str, year: i32) -> PeriodView {
    let today = Utc::now().date_naive();
    match mode {
        MODE_WEEKLY => PeriodView::Weekly {
            year,
            month: today.month(),
            week: 1,
        },
        MODE_PERIOD => PeriodView::Period {
            from: today,
            to: today,
        },
        _ => PeriodView::Monthly,
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// PeriodSelector: режим (месяцы, неделя месяца, диапазон дат) и год
#[component]
pub fn PeriodSelector(periods: PeriodTabs) -> impl IntoView {
    let period = periods.period;
    let year = periods.year;

    let on_mode = move |ev: leptos::ev::Event| {
        let mode = event_target_value(&ev);
        period.set(default_view(&mode, year.get_untracked()));
    };

    let on_year = move |ev: leptos::ev::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<i32>() {
            periods.choose_year(value);
        }
    };

    let weekly_controls = move || {
        let PeriodView::Weekly { year: y, month, week } = period.get() else {
            return None;
        };
        let weeks = week_tabs(y, month);
        Some(view! {
            <select
                prop:value=month.to_string()
                on:change=move |ev| {
                    if let Ok(m) = event_target_value(&ev).parse::<u32>() {
                        period.set(PeriodView::Weekly { year: y, month: m, week: 1 });
                    }
                }
            >
                {(1..=12u32)
                    .map(|m| {
                        view! { <option value=m.to_string()>{month_name(m).unwrap_or_default()}</option> }
                    })
                    .collect_view()}
            </select>
            <select
                prop:value=week.to_string()
                on:change=move |ev| {
                    if let Ok(w) = event_target_value(&ev).parse::<u32>() {
                        period.set(PeriodView::Weekly { year: y, month, week: w });
                    }
                }
            >
                {weeks
                    .into_iter()
                    .map(|tab| view! { <option value=tab.id>{tab.name}</option> })
                    .collect_view()}
            </select>
        })
    };

    let range_controls = move || {
        let PeriodView::Period { from, to } = period.get() else {
            return None;
        };
        Some(view! {
            <input
                type="date"
                prop:value=from.format("%Y-%m-%d").to_string()
                on:change=move |ev| {
                    if let Some(d) = parse_date(&event_target_value(&ev)) {
                        period.set(PeriodView::Period { from: d, to });
                    }
                }
            />
            <span>"–"</span>
            <input
                type="date"
                prop:value=to.format("%Y-%m-%d").to_string()
                on:change=move |ev| {
                    if let Some(d) = parse_date(&event_target_value(&ev)) {
                        period.set(PeriodView::Period { from, to: d });
                    }
                }
            />
        })
    };

    view! {
        <div class="period-selector">
            <select prop:value=move || mode_of(&period.get()) on:change=on_mode>
                <option value=MODE_MONTHLY>"Monthly"</option>
                <option value=MODE_WEEKLY>"Weekly"</option>
                <option value=MODE_PERIOD>"Period"</option>
            </select>
            <input
                type="number"
                class="period-selector__year"
                prop:value=move || year.get().to_string()
                on:change=on_year
            />
            {weekly_controls}
            {range_controls}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in [MODE_MONTHLY, MODE_WEEKLY, MODE_PERIOD] {
            assert_eq!(mode_of(&default_view(mode, 2024)), mode);
        }
    }

    #[test]
    fn test_unknown_mode_is_monthly() {
        assert_eq!(default_view("quarterly", 2024), PeriodView::Monthly);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_date("29-02-2024"), None);
    }
}
