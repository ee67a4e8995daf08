use crate::shared::icons::icon;
use contracts::shared::presentation::Icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible filter panel
///
/// `on_closed` вызывается, когда пользователь сворачивает панель.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    on_closed: Callback<()>,

    /// Filter content (form fields)
    #[prop(into)]
    filter_content: ViewFn,

    /// Pagination controls, shown in the header
    #[prop(optional, into)]
    pagination_controls: Option<ViewFn>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        let was_expanded = is_expanded.get_untracked();
        is_expanded.set(!was_expanded);
        if was_expanded {
            on_closed.run(());
        }
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon(Icon::ChevronRight)}
                    </span>
                    {icon(Icon::Filter)}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.as_ref().map(|controls| controls.run())}
                </div>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">{filter_content.run()}</div>
            </Show>
        </div>
    }
}

/// Выпадающий список категориального фильтра; первое значение "all"
#[component]
pub fn FilterSelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    /// `(value, label)`
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-select">
            <span class="filter-select__label">{label}</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="all">"All"</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
