use super::api::fetch_departments;
use crate::dashboards::d102_my_tasks::api::fetch_tasks;
use crate::shared::collection::{load_collection, retry_collection, use_collection};
use crate::shared::components::{
    DeleteDialog, FilterPanel, FilterSelect, LoadStatus, PageHeader, PaginationControls,
};
use crate::shared::api_utils::delete_record;
use crate::shared::icons::{icon, presentable_badge};
use crate::shared::list_controls::{distinct_options, presentable_options, ListControls};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a002_task::aggregate::Task;
use contracts::domain::a006_department::aggregate::{
    Department, DASHBOARD_FILTERS, DASHBOARD_POLICY, FILTER_DEPARTMENT, FILTER_PRIORITY,
};
use contracts::shared::confirmation::DeleteConfirmation;
use contracts::shared::presentation::{Icon, TaskPriority};
use contracts::shared::sub_tabs::format_day;
use leptos::logging::log;
use leptos::prelude::*;

/// Варианты фильтра отдела: задачи хранят название отдела, а не его id
fn department_filter_options(departments: &[Department]) -> Vec<(String, String)> {
    distinct_options(departments, |d| d.name.as_str())
}

#[component]
pub fn DepartmentTasksDashboard() -> impl IntoView {
    let controls = ListControls::new(DASHBOARD_POLICY, DASHBOARD_FILTERS);
    controls.panel_open.set(true);
    let tasks = use_collection::<Task>();
    let departments = use_collection::<Department>();
    let pending_delete = RwSignal::new(None::<DeleteConfirmation>);
    let delete_error = RwSignal::new(None::<String>);

    load_collection(departments, "departments".to_string(), fetch_departments());

    // отдел фильтруется на сервере; при закрытии панели сбрасывается и список перезагружается
    let department = Memo::new(move |_| controls.filters.with(|f| f.get(FILTER_DEPARTMENT).to_string()));

    Effect::new(move |_| {
        let department = department.get();
        let key = format!("tasks?department={}", department);
        load_collection(tasks, key, fetch_tasks(department));
    });

    let retry = Callback::new(move |_| {
        retry_collection(tasks, fetch_tasks(department.get_untracked()));
    });

    let slice = Signal::derive(move || tasks.with(|t| controls.slice(t.records())));
    let total = Signal::derive(move || slice.with(|p| p.total_entries));

    let department_options = Signal::derive(move || departments.with(|d| department_filter_options(d.records())));

    let set_filter = move |name: &'static str| {
        Callback::new(move |value: String| controls.set_filter(name, value))
    };

    let confirm_delete = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            match delete_record("/api/tasks", &id).await {
                Ok(deleted) => {
                    delete_error.set(None);
                    tasks.update(|t| {
                        t.remove_where(|task| task.id == deleted);
                    });
                }
                Err(e) => {
                    log!("Failed to delete task {}: {}", id, e);
                    delete_error.set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="page">
            <PageHeader
                title="Department Tasks"
                count=total
                is_loading=Signal::derive(move || tasks.with(|t| t.is_loading()))
                on_refresh=retry
            />

            <div class="page__content">
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
                                label="Priority"
                                value=controls.filter_value(FILTER_PRIORITY)
                                options={presentable_options::<TaskPriority>()}
                                on_change=set_filter(FILTER_PRIORITY)
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
                            policy=DASHBOARD_POLICY
                            current_page=controls.page
                            total_entries=total
                            on_prev=Callback::new(move |_| controls.prev())
                            on_next=Callback::new(move |_| controls.next(total.get_untracked()))
                        />
                    }
                />

                <LoadStatus
                    is_loading=Signal::derive(move || tasks.with(|t| t.is_loading()))
                    error=Signal::derive(move || {
                        tasks.with(|t| t.error().map(str::to_string)).or_else(|| delete_error.get())
                    })
                    on_retry=retry
                />

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Department"</th>
                            <th>"Assignee"</th>
                            <th>"Due"</th>
                            <th>"Priority"</th>
                            <th>"Status"</th>
                            <th></th>
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
                                    let confirmation = DeleteConfirmation::new(task.id.clone(), task.title.clone());
                                    view! {
                                        <tr>
                                            <td>{highlight_matches(&task.title, &query)}</td>
                                            <td>{task.department.clone()}</td>
                                            <td>{highlight_matches(&task.assignee, &query)}</td>
                                            <td>{format_day(task.due_date)}</td>
                                            <td>{presentable_badge(task.priority)}</td>
                                            <td>{presentable_badge(task.status)}</td>
                                            <td>
                                                <button
                                                    class="icon-btn icon-btn--danger"
                                                    title="Delete"
                                                    on:click=move |_| pending_delete.set(Some(confirmation.clone()))
                                                >
                                                    {icon(Icon::Trash)}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <DeleteDialog target=pending_delete on_confirm=confirm_delete />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_view::{filter_records, FilterState};
    use contracts::shared::presentation::{RecordStatus, TaskPriority, TaskStatus};
    use chrono::NaiveDate;

    fn department(id: &str, name: &str) -> Department {
        Department {
            id: id.to_string(),
            name: name.to_string(),
            code: id.to_uppercase(),
            head: None,
            staff_count: 4,
            status: RecordStatus::Active,
        }
    }

    fn task(id: &str, department: &str) -> Task {
        Task {
            id: id.to_string(),
            title: "Syllabus review".to_string(),
            description: None,
            assignee: "Meera".to_string(),
            assigned_by: None,
            department: department.to_string(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Pending,
            due_date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        }
    }

    #[test]
    fn test_department_option_values_match_task_departments() {
        let departments = vec![department("science", "Science"), department("arts", "Arts")];
        let options = department_filter_options(&departments);
        assert_eq!(
            options,
            vec![
                ("Arts".to_string(), "Arts".to_string()),
                ("Science".to_string(), "Science".to_string()),
            ]
        );

        let tasks = vec![task("1", "Science"), task("2", "Arts"), task("3", "Science")];
        let mut filters = FilterState::with_filters(DASHBOARD_FILTERS);
        filters.set(FILTER_DEPARTMENT, options[1].0.clone());
        assert_eq!(filter_records(&tasks, &filters, "").len(), 2);
    }
}
