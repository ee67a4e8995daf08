use super::api::{delete_document, fetch_documents};
use crate::shared::collection::{load_collection, retry_collection, use_collection};
use crate::shared::components::{
    DeleteDialog, FilterPanel, FilterSelect, LoadStatus, PageHeader, PaginationControls,
};
use crate::shared::icons::{icon, presentable_badge};
use crate::shared::list_controls::{distinct_options, presentable_options, ListControls};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a004_document::aggregate::{
    Document, FILTERS, FILTER_DEPARTMENT, FILTER_KIND, LIST_POLICY,
};
use contracts::shared::confirmation::DeleteConfirmation;
use contracts::shared::presentation::{DocumentKind, Icon};
use contracts::shared::sub_tabs::format_day;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn DocumentsDashboard() -> impl IntoView {
    let controls = ListControls::new(LIST_POLICY, FILTERS);
    let documents = use_collection::<Document>();
    let pending_delete = RwSignal::new(None::<DeleteConfirmation>);
    let delete_error = RwSignal::new(None::<String>);

    load_collection(documents, "documents".to_string(), fetch_documents());
    let retry = Callback::new(move |_| retry_collection(documents, fetch_documents()));

    let slice = Signal::derive(move || documents.with(|d| controls.slice(d.records())));
    let total = Signal::derive(move || slice.with(|p| p.total_entries));

    let department_options = Signal::derive(move || {
        documents.with(|d| distinct_options(d.records(), |x| x.department.as_str()))
    });

    let set_filter = move |name: &'static str| {
        Callback::new(move |value: String| controls.set_filter(name, value))
    };

    // запись убирается из списка только после ответа сервера
    let confirm_delete = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            match delete_document(id.clone()).await {
                Ok(deleted) => {
                    delete_error.set(None);
                    documents.update(|d| {
                        d.remove_where(|doc| doc.id == deleted);
                    });
                }
                Err(e) => {
                    log!("Failed to delete document {}: {}", id, e);
                    delete_error.set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="page">
            <PageHeader
                title="Documents"
                count=total
                is_loading=Signal::derive(move || documents.with(|d| d.is_loading()))
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
                                label="Type"
                                value=controls.filter_value(FILTER_KIND)
                                options={presentable_options::<DocumentKind>()}
                                on_change=set_filter(FILTER_KIND)
                            />
                            <FilterSelect
                                label="Department"
                                value=controls.filter_value(FILTER_DEPARTMENT)
                                options=department_options
                                on_change=set_filter(FILTER_DEPARTMENT)
                            />
                            <SearchInput
                                value=controls.search
                                on_change=Callback::new(move |q| controls.set_search(q))
                                placeholder="Title, file name or owner"
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
                    is_loading=Signal::derive(move || documents.with(|d| d.is_loading()))
                    error=Signal::derive(move || {
                        documents.with(|d| d.error().map(str::to_string)).or_else(|| delete_error.get())
                    })
                    on_retry=retry
                />

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Type"</th>
                            <th>"Owner"</th>
                            <th>"Department"</th>
                            <th>"Uploaded"</th>
                            <th class="text-right">"Size"</th>
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
                                .map(|doc| {
                                    let confirmation = DeleteConfirmation::new(doc.id.clone(), doc.title.clone());
                                    view! {
                                        <tr>
                                            <td>
                                                <div>{highlight_matches(&doc.title, &query)}</div>
                                                <div class="data-table__hint">{highlight_matches(&doc.file_name, &query)}</div>
                                            </td>
                                            <td>{presentable_badge(doc.kind)}</td>
                                            <td>{highlight_matches(&doc.owner, &query)}</td>
                                            <td>{doc.department.clone()}</td>
                                            <td>{format_day(doc.uploaded_at)}</td>
                                            <td class="text-right">{doc.size_label()}</td>
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
