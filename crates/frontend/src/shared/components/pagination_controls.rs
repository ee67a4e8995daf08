use crate::shared::icons::icon;
use contracts::shared::list_view::ListPolicy;
use contracts::shared::presentation::Icon;
use leptos::prelude::*;

/// PaginationControls component - "Showing X to Y of Z entries" с Prev/Next.
///
/// Блокировка кнопок определяется `ListPolicy` экрана.
#[component]
pub fn PaginationControls(
    policy: ListPolicy,

    /// Current page in the policy's numbering
    #[prop(into)]
    current_page: Signal<usize>,

    /// Entries after filtering
    #[prop(into)]
    total_entries: Signal<usize>,

    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let page = move || policy.clamp(current_page.get(), total_entries.get());

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || {
                    let total = total_entries.get();
                    if total == 0 {
                        return "No entries".to_string();
                    }
                    let start = policy.base.to_index(page()) * policy.page_size;
                    let end = (start + policy.page_size).min(total);
                    format!("Showing {} to {} of {} entries", start + 1, end, total)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || !policy.has_prev(page())
                title="Previous"
            >
                {icon(Icon::ChevronLeft)}
            </button>
            <span class="pagination-page">
                {move || {
                    let pages = policy.total_pages(total_entries.get()).max(1);
                    format!("{} / {}", policy.base.to_index(page()) + 1, pages)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !policy.has_next(page(), total_entries.get())
                title="Next"
            >
                {icon(Icon::ChevronRight)}
            </button>
        </div>
    }
}
