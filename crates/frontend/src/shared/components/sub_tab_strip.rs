use contracts::shared::sub_tabs::SubTab;
use leptos::prelude::*;

/// Полоса вложенных вкладок; пустой список ничего не рисует
#[component]
pub fn SubTabStrip(
    #[prop(into)] tabs: Signal<Vec<SubTab>>,
    #[prop(into)] active: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <Show when=move || !tabs.with(|t| t.is_empty())>
            <div class="sub-tabs" role="tablist">
                <For
                    each=move || tabs.get()
                    key=|tab| tab.id.clone()
                    children=move |tab| {
                        let id = tab.id.clone();
                        let is_active = {
                            let id = id.clone();
                            move || active.with(|a| a.as_deref() == Some(id.as_str()))
                        };
                        view! {
                            <button
                                role="tab"
                                class="sub-tabs__tab"
                                class:sub-tabs__tab--active=is_active
                                on:click=move |_| on_select.run(id.clone())
                            >
                                {tab.name}
                            </button>
                        }
                    }
                />
            </div>
        </Show>
    }
}
