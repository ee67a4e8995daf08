use super::api::fetch_tasks;
use crate::shared::collection::{load_collection, retry_collection, use_collection};
use crate::shared::components::{
    FilterPanel, FilterSelect, LoadStatus, PageHeader, PaginationControls, PeriodSelector,
    SubTabStrip,
};
use crate::shared::icons::presentable_badge;
use crate::shared::list_controls::{presentable_options, ListControls};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::period_tabs::PeriodTabs;
use chrono::Datelike;
use contracts::domain::a002_task::aggregate::{
    Task, FILTER_PRIORITY, FILTER_STATUS, MY_TASKS_FILTERS, MY_TASKS_POLICY,
};
use contracts::shared::list_view::{display_or_placeholder, DASH};
use contracts::shared::presentation::{TaskPriority, TaskStatus};
use contracts::shared::sub_tabs::format_day;
use leptos::prelude::*;

#[component]
pub fn MyTasksDashboard() -> impl IntoView {
    let controls = ListControls::new(MY_TASKS_POLICY, MY_TASKS_FILTERS);
    let periods = PeriodTabs::new();
    let tasks = use_collection::<Task>();

    load_collection(tasks, "tasks".to_string(), fetch_tasks(String::new()));
    let retry = Callback::new(move |_| retry_collection(tasks, fetch_tasks(String::new())));

    Effect::new(move |_| {
        let years: Vec<i32> = tasks.with(|t| t.records().iter().map(|x| x.due_date.year()).collect());
        periods.adopt_year(years);
    });

    // новая вкладка периода - снова первая страница
    Effect::new(move |_| {
        periods.cursor.track();
        controls.page.set(MY_TASKS_POLICY.first_page());
    });

    let in_period = Memo::new(move |_| {
        let tab = periods.active_tab();
        let year = periods.year.get();
        tasks.with(|t| {
            t.records()
                .iter()
                .filter(|task| tab.as_ref().map_or(true, |tab| task.in_period(year, tab)))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let slice = Signal::derive(move || in_period.with(|records| controls.slice(records)));
    let total = Signal::derive(move || slice.with(|p| p.total_entries));

    let set_filter = move |name: &'static str| {
        Callback::new(move |value: String| controls.set_filter(name, value))
    };

    view! {
        <div class="page">
            <PageHeader
                title="My Tasks"
                count=total
                is_loading=Signal::derive(move || tasks.with(|t| t.is_loading()))
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
                                label="Priority"
                                value=controls.filter_value(FILTER_PRIORITY)
                                options={presentable_options::<TaskPriority>()}
                                on_change=set_filter(FILTER_PRIORITY)
                            />
                            <FilterSelect
                                label="Status"
                                value=controls.filter_value(FILTER_STATUS)
                                options={presentable_options::<TaskStatus>()}
                                on_change=set_filter(FILTER_STATUS)
                            />
                            <SearchInput
                                value=controls.search
                                on_change=Callback::new(move |q| controls.set_search(q))
                                placeholder="Title, assignee or description"
                            />
                        </div>
                    }
                    pagination_controls=move || view! {
                        <PaginationControls
                            policy=MY_TASKS_POLICY
                            current_page=controls.page
                            total_entries=total
                            on_prev=Callback::new(move |_| controls.prev())
                            on_next=Callback::new(move |_| controls.next(total.get_untracked()))
                        />
                    }
                />

                <LoadStatus
                    is_loading=Signal::derive(move || tasks.with(|t| t.is_loading()))
                    error=Signal::derive(move || tasks.with(|t| t.error().map(str::to_string)))
                    on_retry=retry
                />

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Assignee"</th>
                            <th>"Assigned by"</th>
                            <th>"Due"</th>
                            <th>"Priority"</th>
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
                                .map(|task| {
                                    view! {
                                        <tr>
                                            <td>
                                                <div>{highlight_matches(&task.title, &query)}</div>
                                                <div class="data-table__hint">
                                                    {highlight_matches(&display_or_placeholder(task.description.as_deref(), DASH), &query)}
                                                </div>
                                            </td>
                                            <td>{highlight_matches(&task.assignee, &query)}</td>
                                            <td>{display_or_placeholder(task.assigned_by.as_deref(), DASH)}</td>
                                            <td>{format_day(task.due_date)}</td>
                                            <td>{presentable_badge(task.priority)}</td>
                                            <td>{presentable_badge(task.status)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
