use super::api::fetch_endpoints;
use crate::shared::collection::{load_collection, retry_collection, use_collection};
use crate::shared::components::{
    FilterPanel, FilterSelect, LoadStatus, PageHeader, PaginationControls,
};
use crate::shared::icons::presentable_badge;
use crate::shared::list_controls::{presentable_options, ListControls};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a009_api_endpoint::aggregate::{
    ApiEndpoint, FILTERS, FILTER_METHOD, FILTER_STATUS, LIST_POLICY,
};
use contracts::shared::list_view::{display_or_placeholder, DASH};
use contracts::shared::presentation::{HttpMethod, RecordStatus};
use leptos::prelude::*;

/// Каталог API; нумерация страниц с нуля
#[component]
pub fn ApiEndpointsDashboard() -> impl IntoView {
    let controls = ListControls::new(LIST_POLICY, FILTERS);
    let endpoints = use_collection::<ApiEndpoint>();

    load_collection(endpoints, "api-endpoints".to_string(), fetch_endpoints());
    let retry = Callback::new(move |_| retry_collection(endpoints, fetch_endpoints()));

    let slice = Signal::derive(move || endpoints.with(|e| controls.slice(e.records())));
    let total = Signal::derive(move || slice.with(|p| p.total_entries));

    let set_filter = move |name: &'static str| {
        Callback::new(move |value: String| controls.set_filter(name, value))
    };

    view! {
        <div class="page">
            <PageHeader
                title="API Endpoints"
                count=total
                is_loading=Signal::derive(move || endpoints.with(|e| e.is_loading()))
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
                                label="Method"
                                value=controls.filter_value(FILTER_METHOD)
                                options={presentable_options::<HttpMethod>()}
                                on_change=set_filter(FILTER_METHOD)
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
                                placeholder="Name, path or owner"
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
                    is_loading=Signal::derive(move || endpoints.with(|e| e.is_loading()))
                    error=Signal::derive(move || endpoints.with(|e| e.error().map(str::to_string)))
                    on_retry=retry
                />

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Method"</th>
                            <th>"Name"</th>
                            <th>"Path"</th>
                            <th>"Owner"</th>
                            <th>"Description"</th>
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
                                .map(|endpoint| {
                                    view! {
                                        <tr>
                                            <td>{presentable_badge(endpoint.method)}</td>
                                            <td>{highlight_matches(&endpoint.name, &query)}</td>
                                            <td><code>{highlight_matches(&endpoint.path, &query)}</code></td>
                                            <td>{highlight_matches(&endpoint.owner, &query)}</td>
                                            <td>{display_or_placeholder(endpoint.description.as_deref(), DASH)}</td>
                                            <td>{presentable_badge(endpoint.status)}</td>
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
