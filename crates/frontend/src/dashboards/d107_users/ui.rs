use super::api::{delete_user, fetch_users};
use crate::shared::collection::{load_collection, retry_collection, use_collection};
use crate::shared::components::{
    DeleteDialog, FilterPanel, FilterSelect, LoadStatus, PageHeader, PaginationControls,
};
use crate::shared::icons::{icon, presentable_badge};
use crate::shared::list_controls::{distinct_options, presentable_options, ListControls};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a005_user::aggregate::{
    StaffUser, FILTERS, FILTER_DEPARTMENT, FILTER_DESIGNATION, FILTER_STATUS, LIST_POLICY,
};
use contracts::shared::confirmation::DeleteConfirmation;
use contracts::shared::list_view::{display_or_placeholder, NOT_AVAILABLE};
use contracts::shared::presentation::{Icon, RecordStatus};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn UsersDashboard() -> impl IntoView {
    let controls = ListControls::new(LIST_POLICY, FILTERS);
    let users = use_collection::<StaffUser>();
    let pending_delete = RwSignal::new(None::<DeleteConfirmation>);
    let delete_error = RwSignal::new(None::<String>);

    load_collection(users, "users".to_string(), fetch_users());
    let retry = Callback::new(move |_| retry_collection(users, fetch_users()));

    let slice = Signal::derive(move || users.with(|u| controls.slice(u.records())));
    let total = Signal::derive(move || slice.with(|p| p.total_entries));

    let designation_options = Signal::derive(move || {
        users.with(|u| distinct_options(u.records(), |x| x.designation.as_str()))
    });
    let department_options = Signal::derive(move || {
        users.with(|u| distinct_options(u.records(), |x| x.department.as_str()))
    });

    let set_filter = move |name: &'static str| {
        Callback::new(move |value: String| controls.set_filter(name, value))
    };

    let confirm_delete = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            match delete_user(id.clone()).await {
                Ok(deleted) => {
                    delete_error.set(None);
                    users.update(|u| {
                        u.remove_where(|user| user.id == deleted);
                    });
                }
                Err(e) => {
                    log!("Failed to delete user {}: {}", id, e);
                    delete_error.set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="page">
            <PageHeader
                title="Users"
                count=total
                is_loading=Signal::derive(move || users.with(|u| u.is_loading()))
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
                                label="Designation"
                                value=controls.filter_value(FILTER_DESIGNATION)
                                options=designation_options
                                on_change=set_filter(FILTER_DESIGNATION)
                            />
                            <FilterSelect
                                label="Department"
                                value=controls.filter_value(FILTER_DEPARTMENT)
                                options=department_options
                                on_change=set_filter(FILTER_DEPARTMENT)
                            />
                            <FilterSelect
                                label="Status"
                                value=controls.filter_value(FILTER_STATUS)
                                options={presentable_options::<RecordStatus>()}
                                on_change=set_filter(FILTER_STATUS)
                            />
                            <SearchInput
                                value=controls.search
                                on_change=Callback::new(move |q| controls.set_search(q))
                                placeholder="Name, email or role"
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
                    is_loading=Signal::derive(move || users.with(|u| u.is_loading()))
                    error=Signal::derive(move || {
                        users.with(|u| u.error().map(str::to_string)).or_else(|| delete_error.get())
                    })
                    on_retry=retry
                />

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Designation"</th>
                            <th>"Department"</th>
                            <th>"Role"</th>
                            <th>"Last login"</th>
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
                                .map(|user| {
                                    let confirmation = DeleteConfirmation::new(user.id.clone(), user.name.clone());
                                    view! {
                                        <tr>
                                            <td>
                                                <div>{highlight_matches(&user.name, &query)}</div>
                                                <div class="data-table__hint">{highlight_matches(&user.email, &query)}</div>
                                            </td>
                                            <td>{user.designation.clone()}</td>
                                            <td>{user.department.clone()}</td>
                                            <td>{highlight_matches(&user.role, &query)}</td>
                                            <td>{display_or_placeholder(user.last_login.as_deref(), NOT_AVAILABLE)}</td>
                                            <td>{presentable_badge(user.status)}</td>
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
