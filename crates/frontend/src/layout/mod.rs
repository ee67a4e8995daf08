pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Sidebar />
                <div class="app-main">
                    <center::Center />
                </div>
            </div>
        </div>
    }
}
