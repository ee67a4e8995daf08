//! TopHeader component - application top navigation bar.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::presentation::Icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon(Icon::ChevronLeft)
                    } else {
                        icon(Icon::ChevronRight)
                    }}
                </button>
                <span class="top-header__title">"Campus Workspace"</span>
            </div>
            <div class="top-header__section">
                {move || ctx.active.get().title()}
            </div>
        </div>
    }
}
