use super::api::fetch_timesheets;
use crate::shared::collection::{load_collection, retry_collection, use_collection};
use crate::shared::components::{
    FilterPanel, FilterSelect, LoadStatus, PageHeader, PaginationControls, PeriodSelector,
    SubTabStrip,
};
use crate::shared::icons::presentable_badge;
use crate::shared::list_controls::{distinct_options, presentable_options, ListControls};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::period_tabs::PeriodTabs;
use chrono::Datelike;
use contracts::domain::a008_timesheet::aggregate::{
    total_hours, TimesheetEntry, FILTERS, FILTER_DEPARTMENT, FILTER_STATUS, LIST_POLICY,
};
use contracts::shared::presentation::ApprovalStatus;
use contracts::shared::sub_tabs::format_day;
use leptos::prelude::*;

#[component]
pub fn TimesheetsDashboard() -> impl IntoView {
    let controls = ListControls::new(LIST_POLICY, FILTERS);
    let periods = PeriodTabs::new();
    let entries = use_collection::<TimesheetEntry>();

    load_collection(entries, "timesheets".to_string(), fetch_timesheets());
    let retry = Callback::new(move |_| retry_collection(entries, fetch_timesheets()));

    Effect::new(move |_| {
        let years: Vec<i32> = entries.with(|e| e.records().iter().map(|x| x.date.year()).collect());
        periods.adopt_year(years);
    });

    Effect::new(move |_| {
        periods.cursor.track();
        controls.page.set(LIST_POLICY.first_page());
    });

    let in_period = Memo::new(move |_| {
        let tab = periods.active_tab();
        let year = periods.year.get();
        entries.with(|e| {
            e.records()
                .iter()
                .filter(|entry| tab.as_ref().map_or(true, |tab| entry.in_period(year, tab)))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let slice = Signal::derive(move || in_period.with(|records| controls.slice(records)));
    let total = Signal::derive(move || slice.with(|p| p.total_entries));
    let page_hours = Signal::derive(move || slice.with(|p| total_hours(&p.visible)));

    let department_options = Signal::derive(move || {
        entries.with(|e| distinct_options(e.records(), |x| x.department.as_str()))
    });

    let set_filter = move |name: &'static str| {
        Callback::new(move |value: String| controls.set_filter(name, value))
    };

    view! {
        <div class="page">
            <PageHeader
                title="Timesheets"
                count=total
                is_loading=Signal::derive(move || entries.with(|e| e.is_loading()))
                on_refresh=retry
            >
                <PeriodSelector periods=periods />
            </PageHeader>

            <div class="page__content">
                <SubTabStrip
                    tabs=periods.tabs()
                    active=periods.active_id()
                    on_select=Callback::new(move |id| periods.select(id))
                />

                <FilterPanel
                    is_expanded=controls.panel_open
                    active_filters_count=controls.active_count()
                    on_closed=Callback::new(move |_| controls.on_panel_closed())
                    filter_content=move || view! {
                        <div class="filter-panel__fields">
                            <FilterSelect
                                label="Department"
                                value=controls.filter_value(FILTER_DEPARTMENT)
                                options=department_options
                                on_change=set_filter(FILTER_DEPARTMENT)
                            />
                            <FilterSelect
                                label="Status"
                                value=controls.filter_value(FILTER_STATUS)
                                options={presentable_options::<ApprovalStatus>()}
                                on_change=set_filter(FILTER_STATUS)
                            />
                            <SearchInput
                                value=controls.search
                                on_change=Callback::new(move |q| controls.set_search(q))
                                placeholder="Employee or project"
                            />
                        </div>
                    }
                    pagination_controls=move || view! {
                        <PaginationControls
                            policy=LIST_POLICY
                            current_page=controls.page
                            total_entries=total
                            on_prev=Callback::new(move |_| controls.prev())
                            on_next=Callback::new(move |_| controls.next(total.get_untracked()))
                        />
                    }
                />

                <LoadStatus
                    is_loading=Signal::derive(move || entries.with(|e| e.is_loading()))
                    error=Signal::derive(move || entries.with(|e| e.error().map(str::to_string)))
                    on_retry=retry
                />

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Employee"</th>
                            <th>"Department"</th>
                            <th>"Project"</th>
                            <th>"Date"</th>
                            <th class="text-right">"Hours"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let query = controls.search.get();
                            slice
                                .get()
                                .visible
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <tr>
                                            <td>{highlight_matches(&entry.employee_name, &query)}</td>
                                            <td>{entry.department.clone()}</td>
                                            <td>{highlight_matches(&entry.project, &query)}</td>
                                            <td>{format_day(entry.date)}</td>
                                            <td class="text-right">{format!("{:.1}", entry.hours)}</td>
                                            <td>{presentable_badge(entry.status)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                    <tfoot>
                        <tr class="data-table__totals">
                            <td colspan="4">"Total on page"</td>
                            <td class="text-right">{move || format!("{:.1}", page_hours.get())}</td>
                            <td></td>
                        </tr>
                    </tfoot>
                </table>
            </div>
        </div>
    }
}
