use super::api::fetch_leaves;
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
use contracts::domain::a003_leave::aggregate::{
    LeaveRequest, FILTERS, FILTER_DEPARTMENT, FILTER_LEAVE_TYPE, FILTER_STATUS, LIST_POLICY,
};
use contracts::shared::list_view::{display_or_placeholder, DASH};
use contracts::shared::presentation::ApprovalStatus;
use contracts::shared::sub_tabs::format_day;
use leptos::prelude::*;

/// Заявки на отпуск. Заявка попадает во вкладку периода, если ее интервал
/// пересекается с вкладкой хотя бы одним днем.
#[component]
pub fn LeavesDashboard() -> impl IntoView {
    let controls = ListControls::new(LIST_POLICY, FILTERS);
    let periods = PeriodTabs::new();
    let leaves = use_collection::<LeaveRequest>();

    load_collection(leaves, "leaves".to_string(), fetch_leaves());
    let retry = Callback::new(move |_| retry_collection(leaves, fetch_leaves()));

    Effect::new(move |_| {
        let years: Vec<i32> = leaves.with(|l| {
            l.records()
                .iter()
                .flat_map(|x| [x.from_date.year(), x.to_date.year()])
                .collect()
        });
        periods.adopt_year(years);
    });

    Effect::new(move |_| {
        periods.cursor.track();
        controls.page.set(LIST_POLICY.first_page());
    });

    let in_period = Memo::new(move |_| {
        let tab = periods.active_tab();
        let year = periods.year.get();
        leaves.with(|l| {
            l.records()
                .iter()
                .filter(|leave| tab.as_ref().map_or(true, |tab| leave.overlaps(year, tab)))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let slice = Signal::derive(move || in_period.with(|records| controls.slice(records)));
    let total = Signal::derive(move || slice.with(|p| p.total_entries));

    let department_options = Signal::derive(move || {
        leaves.with(|l| distinct_options(l.records(), |x| x.department.as_str()))
    });
    let leave_type_options = Signal::derive(move || {
        leaves.with(|l| distinct_options(l.records(), |x| x.leave_type.as_str()))
    });

    let set_filter = move |name: &'static str| {
        Callback::new(move |value: String| controls.set_filter(name, value))
    };

    view! {
        <div class="page">
            <PageHeader
                title="Leave Requests"
                count=total
                is_loading=Signal::derive(move || leaves.with(|l| l.is_loading()))
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
                            <FilterSelect
                                label="Leave type"
                                value=controls.filter_value(FILTER_LEAVE_TYPE)
                                options=leave_type_options
                                on_change=set_filter(FILTER_LEAVE_TYPE)
                            />
                            <SearchInput
                                value=controls.search
                                on_change=Callback::new(move |q| controls.set_search(q))
                                placeholder="Employee, designation or reason"
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
                    is_loading=Signal::derive(move || leaves.with(|l| l.is_loading()))
                    error=Signal::derive(move || leaves.with(|l| l.error().map(str::to_string)))
                    on_retry=retry
                />

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Employee"</th>
                            <th>"Department"</th>
                            <th>"Type"</th>
                            <th>"From"</th>
                            <th>"To"</th>
                            <th class="text-right">"Days"</th>
                            <th>"Reason"</th>
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
                                .map(|leave| {
                                    view! {
                                        <tr>
                                            <td>
                                                <div>{highlight_matches(&leave.employee_name, &query)}</div>
                                                <div class="data-table__hint">{leave.designation.clone()}</div>
                                            </td>
                                            <td>{leave.department.clone()}</td>
                                            <td>{leave.leave_type.clone()}</td>
                                            <td>{format_day(leave.from_date)}</td>
                                            <td>{format_day(leave.to_date)}</td>
                                            <td class="text-right">{leave.days()}</td>
                                            <td>
                                                {highlight_matches(&display_or_placeholder(leave.reason.as_deref(), DASH), &query)}
                                            </td>
                                            <td>{presentable_badge(leave.status)}</td>
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
