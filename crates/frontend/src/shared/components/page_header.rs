use crate::shared::icons::icon;
use contracts::shared::presentation::Icon;
use leptos::prelude::*;
use thaw::*;

/// PageHeader component - header for list pages: title, entry count and "Refresh"
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Entries after filtering
    #[prop(into)]
    count: Signal<usize>,

    #[prop(into)]
    is_loading: Signal<bool>,

    on_refresh: Callback<()>,

    /// Extra controls (pass empty fragment if not needed)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <span class="badge badge--primary">{move || count.get()}</span>
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_refresh.run(())
                    disabled=Signal::derive(move || is_loading.get())
                >
                    {icon(Icon::Refresh)}
                    {move || if is_loading.get() { "Loading..." } else { "Refresh" }}
                </Button>
            </div>
        </div>
    }
}

/// Индикатор загрузки и сообщение об ошибке с кнопкой повтора
#[component]
pub fn LoadStatus(
    #[prop(into)]
    is_loading: Signal<bool>,

    #[prop(into)]
    error: Signal<Option<String>>,

    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || is_loading.get()>
            <div class="load-status">
                {icon(Icon::Loader)}
                <span>"Loading..."</span>
            </div>
        </Show>
        {move || {
            error.get().map(|e| view! {
                <div class="alert alert--error">
                    {icon(Icon::Alert)}
                    <span>{format!("Error: {}", e)}</span>
                    <button class="alert__action" on:click=move |_| on_retry.run(())>
                        "Retry"
                    </button>
                </div>
            })
        }}
    }
}
